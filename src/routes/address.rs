//! Address Lookup Endpoint
//!
//! CEP to street address, straight through ViaCEP. The only logic here is
//! the format check; the answer is the upstream payload reshaped.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiError;
use crate::services::{Address, AddressLookup};
use crate::AppState;

/// GET /api/cep/{cep}
pub async fn lookup_cep(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> Result<Json<Address>, ApiError> {
    let cep = AddressLookup::normalize_cep(&cep)
        .ok_or_else(|| ApiError::BadRequest("CEP inválido.".to_string()))?;

    let address = state
        .address_lookup
        .lookup(&cep)
        .await
        .map_err(|err| {
            tracing::warn!(error = ?err, "ViaCEP lookup failed");
            ApiError::ServiceUnavailable("ViaCEP".to_string())
        })?
        .ok_or_else(|| ApiError::NotFound("CEP não encontrado.".to_string()))?;

    Ok(Json(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::testing;

    #[tokio::test]
    async fn test_malformed_cep_is_400() {
        let state = testing::state();
        let err = lookup_cep(State(state), Path("12ab".to_string()))
            .await
            .unwrap_err();
        match err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "CEP inválido."),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_503() {
        // The fixture points at a closed port.
        let state = testing::state();
        let err = lookup_cep(State(state), Path("01001-000".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ServiceUnavailable(_)));
    }
}
