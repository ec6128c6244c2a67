//! Energy Prediction Service
//!
//! Forwards weather readings to the pre-trained generation model served over
//! HTTP and returns its score untouched. Input validation (no negative
//! readings) happens in the route handler before this client is called.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Model input: current conditions plus the prior generation reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionInput {
    pub temperature: f64,
    pub hour_of_day: f64,
    pub cloud_coverage: f64,
    pub wind_speed: f64,
    pub energy_generated: f64,
}

impl PredictionInput {
    /// The model rejects negative readings; callers turn this into a 400.
    pub fn has_negative_values(&self) -> bool {
        self.temperature < 0.0
            || self.hour_of_day < 0.0
            || self.cloud_coverage < 0.0
            || self.wind_speed < 0.0
            || self.energy_generated < 0.0
    }
}

/// Model output: predicted energy generation score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutput {
    pub score: f64,
}

pub struct EnergyPredictor {
    client: reqwest::Client,
    base_url: String,
}

impl EnergyPredictor {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn predict(&self, input: &PredictionInput) -> Result<PredictionOutput> {
        let url = format!("{}/predict", self.base_url);
        let output = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .context("prediction model unreachable")?
            .error_for_status()
            .context("prediction model rejected the request")?
            .json()
            .await
            .context("prediction model returned an unexpected body")?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> PredictionInput {
        PredictionInput {
            temperature: 28.0,
            hour_of_day: 13.0,
            cloud_coverage: 0.2,
            wind_speed: 12.0,
            energy_generated: 150.0,
        }
    }

    #[test]
    fn test_non_negative_input_passes() {
        assert!(!input().has_negative_values());
    }

    #[test]
    fn test_any_negative_reading_is_flagged() {
        for field in 0..5 {
            let mut i = input();
            match field {
                0 => i.temperature = -1.0,
                1 => i.hour_of_day = -1.0,
                2 => i.cloud_coverage = -0.1,
                3 => i.wind_speed = -5.0,
                _ => i.energy_generated = -0.5,
            }
            assert!(i.has_negative_values());
        }
    }

    #[test]
    fn test_zero_is_a_valid_reading() {
        let i = PredictionInput {
            temperature: 0.0,
            hour_of_day: 0.0,
            cloud_coverage: 0.0,
            wind_speed: 0.0,
            energy_generated: 0.0,
        };
        assert!(!i.has_negative_values());
    }
}
