//! Energy Prediction Endpoint
//!
//! Forwards weather readings to the pre-trained generation model and returns
//! its score. The model rejects negative readings, so they are refused here
//! before the call goes out.

use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::services::{PredictionInput, PredictionOutput};
use crate::AppState;

/// POST /api/energy/predict
pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<PredictionInput>,
) -> Result<Json<PredictionOutput>, ApiError> {
    if input.has_negative_values() {
        return Err(ApiError::BadRequest(
            "Input data contains invalid values.".to_string(),
        ));
    }

    let output = state.predictor.predict(&input).await.map_err(|err| {
        tracing::warn!(error = ?err, "prediction model call failed");
        ApiError::ServiceUnavailable("Modelo de previsão".to_string())
    })?;

    Ok(Json(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::testing;

    #[tokio::test]
    async fn test_negative_reading_is_400() {
        let state = testing::state();
        let input = PredictionInput {
            temperature: -3.0,
            hour_of_day: 10.0,
            cloud_coverage: 0.5,
            wind_speed: 8.0,
            energy_generated: 100.0,
        };

        let err = predict(State(state), Json(input)).await.unwrap_err();
        match err {
            ApiError::BadRequest(msg) => {
                assert_eq!(msg, "Input data contains invalid values.")
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_model_is_503() {
        let state = testing::state();
        let input = PredictionInput {
            temperature: 25.0,
            hour_of_day: 12.0,
            cloud_coverage: 0.1,
            wind_speed: 10.0,
            energy_generated: 200.0,
        };

        let err = predict(State(state), Json(input)).await.unwrap_err();
        assert!(matches!(err, ApiError::ServiceUnavailable(_)));
    }
}
