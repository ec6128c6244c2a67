//! Microgrid Endpoints
//!
//! CRUD over microgrid projects. Creation verifies both references, owner
//! first, then the hosting space; updates keep both fixed.

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::Deserialize;

use crate::db::{Microgrid, Repository};
use crate::error::ApiError;
use crate::types::ApiResponse;
use crate::AppState;

const DEFAULT_PHOTO: &str = "foto_microgrid_padrao.jpg";

/// Request body for create and update.
#[derive(Debug, Deserialize)]
pub struct MicrogridPayload {
    #[serde(default)]
    pub microgrid_id: i32,
    pub user_id: i32,
    pub space_id: i32,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub required_solar_radiation: f64,
    pub required_topography: String,
    #[serde(default)]
    pub required_area: f64,
    #[serde(default)]
    pub required_wind_speed: f64,
    pub energy_source: String,
    #[serde(default)]
    pub funding_goal: f64,
}

/// GET /api/microgrids/{id}
pub async fn get_microgrid(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Microgrid>>, ApiError> {
    let microgrid = state
        .microgrids
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Microgrid não encontrada.".to_string()))?;

    Ok(Json(ApiResponse::success(microgrid)))
}

/// GET /api/microgrids
pub async fn list_microgrids(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Microgrid>>>, ApiError> {
    let microgrids = state.microgrids.get_all().await?;

    if microgrids.is_empty() {
        return Err(ApiError::NotFound(
            "Nenhuma microgrid encontrada.".to_string(),
        ));
    }

    Ok(Json(ApiResponse::success(microgrids)))
}

/// POST /api/microgrids
pub async fn create_microgrid(
    State(state): State<AppState>,
    Json(payload): Json<MicrogridPayload>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ApiResponse<Microgrid>>), ApiError> {
    if state.users.get_by_id(payload.user_id).await?.is_none() {
        return Err(ApiError::BadRequest("Usuário não encontrado.".to_string()));
    }

    if state.spaces.get_by_id(payload.space_id).await?.is_none() {
        return Err(ApiError::BadRequest("Espaço não encontrado.".to_string()));
    }

    let microgrid = Microgrid {
        microgrid_id: 0,
        user_id: payload.user_id,
        space_id: payload.space_id,
        name: payload.name,
        photo: payload.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
        required_solar_radiation: payload.required_solar_radiation,
        required_topography: payload.required_topography,
        required_area: payload.required_area,
        required_wind_speed: payload.required_wind_speed,
        energy_source: payload.energy_source,
        funding_goal: payload.funding_goal,
    };

    let stored = state.microgrids.add(microgrid).await?;
    let location = format!("/api/microgrids/{}", stored.microgrid_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success_with_message(
            stored,
            "Microgrid criada com sucesso.",
        )),
    ))
}

/// PUT /api/microgrids/{id}
pub async fn update_microgrid(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MicrogridPayload>,
) -> Result<Json<ApiResponse<Microgrid>>, ApiError> {
    if payload.microgrid_id != id {
        return Err(ApiError::BadRequest(
            "Dados inválidos ou ID não corresponde à microgrid.".to_string(),
        ));
    }

    let existing = state
        .microgrids
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Microgrid não encontrada.".to_string()))?;

    let updated = Microgrid {
        microgrid_id: existing.microgrid_id,
        // Owner and hosting space stay as created.
        user_id: existing.user_id,
        space_id: existing.space_id,
        name: payload.name,
        photo: payload.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
        required_solar_radiation: payload.required_solar_radiation,
        required_topography: payload.required_topography,
        required_area: payload.required_area,
        required_wind_speed: payload.required_wind_speed,
        energy_source: payload.energy_source,
        funding_goal: payload.funding_goal,
    };

    let stored = state.microgrids.update(updated).await?;

    Ok(Json(ApiResponse::success_with_message(
        stored,
        "Microgrid atualizada com sucesso.",
    )))
}

/// DELETE /api/microgrids/{id}
pub async fn delete_microgrid(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let microgrid = state
        .microgrids
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Microgrid não encontrada.".to_string()))?;

    state.microgrids.delete(&microgrid).await?;

    Ok(StatusCode::NO_CONTENT)
}
