//! Space Endpoints
//!
//! CRUD over registered sites. Creation verifies the owner exists before the
//! row is written; ownership is fixed afterwards and updates never reassign
//! it.

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::Deserialize;

use crate::db::{Repository, Space};
use crate::error::ApiError;
use crate::types::ApiResponse;
use crate::AppState;

const DEFAULT_PHOTO: &str = "foto_espaco_padrao.jpg";
const DEFAULT_WIND_DIRECTION: &str = "Vento predominante do norte";

/// Request body for create and update.
#[derive(Debug, Deserialize)]
pub struct SpacePayload {
    #[serde(default)]
    pub space_id: i32,
    pub user_id: i32,
    pub address: String,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub energy_source: String,
    pub solar_orientation: String,
    #[serde(default)]
    pub avg_solar_index: f64,
    pub topography: String,
    #[serde(default)]
    pub total_area: f64,
    #[serde(default)]
    pub wind_direction: Option<String>,
    #[serde(default)]
    pub wind_speed: f64,
}

/// GET /api/spaces/{id}
pub async fn get_space(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Space>>, ApiError> {
    let space = state
        .spaces
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Espaço não encontrado.".to_string()))?;

    Ok(Json(ApiResponse::success(space)))
}

/// GET /api/spaces
pub async fn list_spaces(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Space>>>, ApiError> {
    let spaces = state.spaces.get_all().await?;

    if spaces.is_empty() {
        return Err(ApiError::NotFound("Nenhum espaço encontrado.".to_string()));
    }

    Ok(Json(ApiResponse::success(spaces)))
}

/// POST /api/spaces
///
/// Reference check: the owning user must exist. The caller-supplied id is
/// ignored; the store assigns one.
pub async fn create_space(
    State(state): State<AppState>,
    Json(payload): Json<SpacePayload>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ApiResponse<Space>>), ApiError> {
    if state.users.get_by_id(payload.user_id).await?.is_none() {
        return Err(ApiError::BadRequest("Usuário não encontrado.".to_string()));
    }

    let space = Space {
        space_id: 0,
        user_id: payload.user_id,
        address: payload.address,
        name: payload.name,
        photo: payload.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
        energy_source: payload.energy_source,
        solar_orientation: payload.solar_orientation,
        avg_solar_index: payload.avg_solar_index,
        topography: payload.topography,
        total_area: payload.total_area,
        wind_direction: payload
            .wind_direction
            .unwrap_or_else(|| DEFAULT_WIND_DIRECTION.to_string()),
        wind_speed: payload.wind_speed,
    };

    let stored = state.spaces.add(space).await?;
    let location = format!("/api/spaces/{}", stored.space_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success_with_message(
            stored,
            "Espaço criado com sucesso.",
        )),
    ))
}

/// PUT /api/spaces/{id}
pub async fn update_space(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SpacePayload>,
) -> Result<Json<ApiResponse<Space>>, ApiError> {
    if payload.space_id != id {
        return Err(ApiError::BadRequest(
            "Dados inválidos ou ID não corresponde ao espaço.".to_string(),
        ));
    }

    let existing = state
        .spaces
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Espaço não encontrado.".to_string()))?;

    let updated = Space {
        space_id: existing.space_id,
        // Ownership is not reassignable through update.
        user_id: existing.user_id,
        address: payload.address,
        name: payload.name,
        photo: payload.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
        energy_source: payload.energy_source,
        solar_orientation: payload.solar_orientation,
        avg_solar_index: payload.avg_solar_index,
        topography: payload.topography,
        total_area: payload.total_area,
        wind_direction: payload
            .wind_direction
            .unwrap_or_else(|| DEFAULT_WIND_DIRECTION.to_string()),
        wind_speed: payload.wind_speed,
    };

    let stored = state.spaces.update(updated).await?;

    Ok(Json(ApiResponse::success_with_message(
        stored,
        "Espaço atualizado com sucesso.",
    )))
}

/// DELETE /api/spaces/{id}
pub async fn delete_space(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let space = state
        .spaces
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Espaço não encontrado.".to_string()))?;

    state.spaces.delete(&space).await?;

    Ok(StatusCode::NO_CONTENT)
}
