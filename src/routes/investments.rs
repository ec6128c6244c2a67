//! Investment Endpoints
//!
//! CRUD over investment proposals. Creation verifies the investing user and
//! the target microgrid; the only field an update may change is the proposal
//! text.

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::Deserialize;

use crate::db::{Investment, Repository};
use crate::error::ApiError;
use crate::types::ApiResponse;
use crate::AppState;

/// Request body for create and update.
#[derive(Debug, Deserialize)]
pub struct InvestmentPayload {
    #[serde(default)]
    pub investment_id: i32,
    pub user_id: i32,
    pub microgrid_id: i32,
    pub proposal: String,
}

/// GET /api/investments/{id}
pub async fn get_investment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Investment>>, ApiError> {
    let investment = state
        .investments
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Investimento não encontrado.".to_string()))?;

    Ok(Json(ApiResponse::success(investment)))
}

/// GET /api/investments
pub async fn list_investments(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Investment>>>, ApiError> {
    let investments = state.investments.get_all().await?;

    if investments.is_empty() {
        return Err(ApiError::NotFound(
            "Nenhum investimento encontrado.".to_string(),
        ));
    }

    Ok(Json(ApiResponse::success(investments)))
}

/// POST /api/investments
pub async fn create_investment(
    State(state): State<AppState>,
    Json(payload): Json<InvestmentPayload>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ApiResponse<Investment>>), ApiError> {
    if state.users.get_by_id(payload.user_id).await?.is_none() {
        return Err(ApiError::BadRequest("Usuário não encontrado.".to_string()));
    }

    if state
        .microgrids
        .get_by_id(payload.microgrid_id)
        .await?
        .is_none()
    {
        return Err(ApiError::BadRequest("Microgrid não encontrada.".to_string()));
    }

    let investment = Investment {
        investment_id: 0,
        user_id: payload.user_id,
        microgrid_id: payload.microgrid_id,
        proposal: payload.proposal,
    };

    let stored = state.investments.add(investment).await?;
    let location = format!("/api/investments/{}", stored.investment_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success_with_message(
            stored,
            "Investimento criado com sucesso.",
        )),
    ))
}

/// PUT /api/investments/{id}
pub async fn update_investment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<InvestmentPayload>,
) -> Result<Json<ApiResponse<Investment>>, ApiError> {
    if payload.investment_id != id {
        return Err(ApiError::BadRequest(
            "Dados inválidos ou ID não corresponde ao investimento.".to_string(),
        ));
    }

    let existing = state
        .investments
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Investimento não encontrado.".to_string()))?;

    let updated = Investment {
        investment_id: existing.investment_id,
        user_id: existing.user_id,
        microgrid_id: existing.microgrid_id,
        proposal: payload.proposal,
    };

    let stored = state.investments.update(updated).await?;

    Ok(Json(ApiResponse::success_with_message(
        stored,
        "Investimento atualizado com sucesso.",
    )))
}

/// DELETE /api/investments/{id}
pub async fn delete_investment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let investment = state
        .investments
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Investimento não encontrado.".to_string()))?;

    state.investments.delete(&investment).await?;

    Ok(StatusCode::NO_CONTENT)
}
