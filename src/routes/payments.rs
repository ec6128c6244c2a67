//! Payment Endpoints
//!
//! Creates a payment intent and returns the client secret the frontend needs
//! to complete the charge. Unlike every other collaborator, a failure here is
//! caught and reported to the caller with the provider's message.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

/// Payment request: amount in the smallest currency unit (cents).
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub amount: i64,
}

#[derive(Debug, Serialize)]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// POST /api/payments/create-payment-intent
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let intent = state
        .payments
        .create_payment_intent(request.amount, "usd")
        .await
        .map_err(|err| ApiError::PaymentFailed(err.to_string()))?;

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::testing;

    #[tokio::test]
    async fn test_gateway_failure_is_reported_not_propagated() {
        // The fixture has no secret key configured, so the gateway refuses
        // the call; the handler must surface that as PaymentFailed.
        let state = testing::state();

        let err = create_payment_intent(State(state), Json(PaymentRequest { amount: 5000 }))
            .await
            .unwrap_err();
        match err {
            ApiError::PaymentFailed(msg) => assert!(msg.contains("secret key")),
            other => panic!("expected PaymentFailed, got {other:?}"),
        }
    }
}
