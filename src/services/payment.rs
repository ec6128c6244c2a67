//! Payment Gateway Service
//!
//! Creates a payment intent against a Stripe-shaped API and hands the
//! client secret back for the frontend to complete the charge. This is the
//! only collaborator whose failure is caught and reported to the caller with
//! its own message instead of propagating to the fault boundary.

use anyhow::{anyhow, bail, Result};
use serde::Deserialize;

/// Client-usable payment handle.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    error: UpstreamErrorBody,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

pub struct PaymentGateway {
    client: reqwest::Client,
    base_url: String,
    secret_key: Option<String>,
}

impl PaymentGateway {
    pub fn new(base_url: &str, secret_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key,
        }
    }

    /// Create a payment intent for `amount` (smallest currency unit, e.g.
    /// cents) charged by card.
    pub async fn create_payment_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent> {
        let secret_key = self
            .secret_key
            .as_deref()
            .ok_or_else(|| anyhow!("payment secret key is not configured"))?;

        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            // Surface the provider's own message; the handler reports it.
            let status = response.status();
            match response.json::<UpstreamError>().await {
                Ok(body) => bail!("{}", body.error.message),
                Err(_) => bail!("payment provider answered with status {status}"),
            }
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_secret_key_is_reported() {
        let gateway = PaymentGateway::new("https://api.stripe.com", None);
        let err = gateway.create_payment_intent(5000, "usd").await.unwrap_err();
        assert!(err.to_string().contains("secret key"));
    }

    #[test]
    fn test_upstream_error_body_parses() {
        let raw = r#"{"error": {"message": "Amount must be at least 50 cents"}}"#;
        let body: UpstreamError = serde_json::from_str(raw).unwrap();
        assert_eq!(body.error.message, "Amount must be at least 50 cents");
    }

    #[test]
    fn test_payment_intent_parses() {
        let raw = r#"{"id": "pi_123", "client_secret": "pi_123_secret_abc"}"#;
        let intent: PaymentIntent = serde_json::from_str(raw).unwrap();
        assert_eq!(intent.client_secret, "pi_123_secret_abc");
    }
}
