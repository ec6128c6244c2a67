//! Error Handling Module
//!
//! Provides type-safe error handling with proper HTTP status code mapping.
//! Uses thiserror for domain errors and integrates with tracing for
//! structured logging. Validation and not-found failures carry the Portuguese
//! message shown to the client; internal details are logged, never leaked.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ApiResponse;

/// API error type.
///
/// Every variant maps to an HTTP status code, and every error body is the
/// uniform [`ApiResponse`] envelope with `success = false`.
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 400 Bad Request ============
    #[error("{0}")]
    BadRequest(String),

    /// Payment-intent creation failure. The one collaborator failure that is
    /// caught locally and reported back with its message.
    #[error("payment failed: {0}")]
    PaymentFailed(String),

    // ============ 404 Not Found ============
    #[error("{0}")]
    NotFound(String),

    // ============ 500 Internal Server Error ============
    #[error("database error: {0}")]
    Database(String),

    #[error("internal server error")]
    Internal,

    // ============ 503 Service Unavailable ============
    #[error("{0} is unavailable")]
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, ApiResponse<()>) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiResponse::error(msg)),
            ApiError::PaymentFailed(msg) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::error_with_details("Falha ao criar intenção de pagamento.", vec![msg]),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiResponse::error(msg)),
            ApiError::Database(detail) => {
                tracing::error!(%detail, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error("Erro interno do servidor."),
                )
            }
            ApiError::Internal => {
                tracing::error!("internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error("Erro interno do servidor."),
                )
            }
            ApiError::ServiceUnavailable(service) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiResponse::error(format!("{service} indisponível no momento.")),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = ?err, "sqlx error");
        ApiError::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // Repository internals surface as anyhow; keep the sqlx detail if any.
        if let Some(db) = err.downcast_ref::<sqlx::Error>() {
            return ApiError::Database(db.to_string());
        }
        tracing::error!(error = ?err, "unhandled error");
        ApiError::Internal
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!(error = ?err, "upstream request failed");
        ApiError::ServiceUnavailable("Serviço externo".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = ApiError::NotFound("Usuário não encontrado.".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let resp = ApiError::BadRequest("Dados inválidos.".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_payment_failure_is_400_with_detail() {
        let resp = ApiError::PaymentFailed("card declined".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_does_not_leak_detail() {
        let err: ApiError = sqlx::Error::PoolTimedOut.into();
        match err {
            ApiError::Database(_) => {}
            other => panic!("expected Database, got {other:?}"),
        }
    }
}
