//! User Endpoints
//!
//! CRUD over user accounts. Passwords enter as plaintext in the payload,
//! leave as nothing: they are hashed before the row is written and the hash
//! is never serialized back.

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::db::{Repository, User};
use crate::error::ApiError;
use crate::services::password;
use crate::types::ApiResponse;
use crate::AppState;

/// Request body for create and update. The id is only meaningful on update,
/// where it must match the path.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub user_id: i32,
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Usuário não encontrado.".to_string()))?;

    Ok(Json(ApiResponse::success(user)))
}

/// GET /api/users
///
/// An empty table answers 404, matching the policy of every other list
/// endpoint on this API.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.users.get_all().await?;

    if users.is_empty() {
        return Err(ApiError::NotFound("Nenhum usuário encontrado.".to_string()));
    }

    Ok(Json(ApiResponse::success(users)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ApiResponse<User>>), ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest("Dados inválidos.".to_string()));
    }

    let user = User {
        user_id: 0,
        email: payload.email,
        password_hash: password::hash(&payload.password)?,
        name: payload.name,
        phone: payload.phone,
        photo: payload.photo.unwrap_or_else(|| "foto_padrao.png".to_string()),
        created_at: Utc::now(),
    };

    let stored = state.users.add(user).await?;
    let location = format!("/api/users/{}", stored.user_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success_with_message(
            stored,
            "Usuário criado com sucesso.",
        )),
    ))
}

/// PUT /api/users/{id}
///
/// Full replace of the mutable fields. The password is re-hashed only when a
/// non-empty one is supplied; the creation date is never touched.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    if payload.user_id != id {
        return Err(ApiError::BadRequest(
            "Dados inválidos ou ID não corresponde ao usuário.".to_string(),
        ));
    }

    let existing = state
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Usuário não encontrado.".to_string()))?;

    let password_hash = if payload.password.is_empty() {
        existing.password_hash
    } else {
        password::hash(&payload.password)?
    };

    let updated = User {
        user_id: existing.user_id,
        email: payload.email,
        password_hash,
        name: payload.name,
        phone: payload.phone,
        photo: payload.photo.unwrap_or_else(|| "foto_padrao.png".to_string()),
        created_at: existing.created_at,
    };

    let stored = state.users.update(updated).await?;

    Ok(Json(ApiResponse::success_with_message(
        stored,
        "Usuário atualizado com sucesso.",
    )))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let user = state
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Usuário não encontrado.".to_string()))?;

    state.users.delete(&user).await?;

    Ok(StatusCode::NO_CONTENT)
}
