//! Common Types Module
//!
//! Shared types used across the whole application, most importantly the
//! uniform response envelope every CRUD handler returns.

use serde::Serialize;

/// Uniform API response envelope.
///
/// Every entity operation answers with this shape, success or failure:
/// a flag, a human-readable (Portuguese) message, the payload when there is
/// one, and a list of granular error strings.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    /// Success with the default message.
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, "Operação realizada com sucesso.")
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Failure with no payload and no granular errors.
    pub fn error(message: impl Into<String>) -> Self {
        Self::error_with_details(message, Vec::new())
    }

    pub fn error_with_details(message: impl Into<String>, errors: Vec<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            message: if message.is_empty() {
                "Operação mal sucedida.".to_string()
            } else {
                message
            },
            data: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_default_message() {
        let resp = ApiResponse::success(42);
        assert!(resp.success);
        assert_eq!(resp.message, "Operação realizada com sucesso.");
        assert_eq!(resp.data, Some(42));
        assert!(resp.errors.is_empty());
    }

    #[test]
    fn test_error_empty_message_falls_back() {
        let resp = ApiResponse::<()>::error("");
        assert!(!resp.success);
        assert_eq!(resp.message, "Operação mal sucedida.");
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_error_omits_data_field() {
        let resp = ApiResponse::<()>::error("Usuário não encontrado.");
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"], serde_json::json!([]));
    }
}
