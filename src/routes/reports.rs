//! Report Endpoints
//!
//! CRUD over performance reports. Creation validates the target microgrid
//! the same way the other resources validate their references; updates keep
//! the microgrid fixed and replace the readings.

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::Deserialize;

use crate::db::{Report, Repository};
use crate::error::ApiError;
use crate::types::ApiResponse;
use crate::AppState;

/// Request body for create and update.
#[derive(Debug, Deserialize)]
pub struct ReportPayload {
    #[serde(default)]
    pub report_id: i32,
    pub microgrid_id: i32,
    #[serde(default)]
    pub energy_generated: f64,
    #[serde(default)]
    pub panel_temperature: f64,
    #[serde(default)]
    pub profit: f64,
}

/// GET /api/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Report>>, ApiError> {
    let report = state
        .reports
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Relatório não encontrado.".to_string()))?;

    Ok(Json(ApiResponse::success(report)))
}

/// GET /api/reports
pub async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Report>>>, ApiError> {
    let reports = state.reports.get_all().await?;

    if reports.is_empty() {
        return Err(ApiError::NotFound(
            "Nenhum relatório encontrado.".to_string(),
        ));
    }

    Ok(Json(ApiResponse::success(reports)))
}

/// POST /api/reports
pub async fn create_report(
    State(state): State<AppState>,
    Json(payload): Json<ReportPayload>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ApiResponse<Report>>), ApiError> {
    if state
        .microgrids
        .get_by_id(payload.microgrid_id)
        .await?
        .is_none()
    {
        return Err(ApiError::BadRequest("Microgrid não encontrada.".to_string()));
    }

    let report = Report {
        report_id: 0,
        microgrid_id: payload.microgrid_id,
        energy_generated: payload.energy_generated,
        panel_temperature: payload.panel_temperature,
        profit: payload.profit,
    };

    let stored = state.reports.add(report).await?;
    let location = format!("/api/reports/{}", stored.report_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success_with_message(
            stored,
            "Relatório criado com sucesso.",
        )),
    ))
}

/// PUT /api/reports/{id}
pub async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ReportPayload>,
) -> Result<Json<ApiResponse<Report>>, ApiError> {
    if payload.report_id != id {
        return Err(ApiError::BadRequest(
            "Dados inválidos ou ID não corresponde ao relatório.".to_string(),
        ));
    }

    let existing = state
        .reports
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Relatório não encontrado.".to_string()))?;

    let updated = Report {
        report_id: existing.report_id,
        microgrid_id: existing.microgrid_id,
        energy_generated: payload.energy_generated,
        panel_temperature: payload.panel_temperature,
        profit: payload.profit,
    };

    let stored = state.reports.update(updated).await?;

    Ok(Json(ApiResponse::success_with_message(
        stored,
        "Relatório atualizado com sucesso.",
    )))
}

/// DELETE /api/reports/{id}
pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let report = state
        .reports
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Relatório não encontrado.".to_string()))?;

    state.reports.delete(&report).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::testing;

    async fn seeded_microgrid(state: &crate::AppState) -> i32 {
        let owner = testing::seed_user(state, "carlos@example.com", "Carlos").await;
        let space = testing::seed_space(state, owner.user_id, "Espaço Solar").await;
        testing::seed_microgrid(state, owner.user_id, space.space_id)
            .await
            .microgrid_id
    }

    fn payload(microgrid_id: i32) -> ReportPayload {
        ReportPayload {
            report_id: 0,
            microgrid_id,
            energy_generated: 320.0,
            panel_temperature: 41.5,
            profit: 87.3,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let state = testing::state();
        let microgrid_id = seeded_microgrid(&state).await;

        let (status, _, Json(body)) =
            create_report(State(state.clone()), Json(payload(microgrid_id)))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        let created = body.data.unwrap();
        assert_ne!(created.report_id, 0);

        let Json(fetched) = get_report(State(state), Path(created.report_id))
            .await
            .unwrap();
        let fetched = fetched.data.unwrap();
        assert_eq!(fetched.energy_generated, 320.0);
        assert_eq!(fetched.panel_temperature, 41.5);
        assert_eq!(fetched.profit, 87.3);
    }

    #[tokio::test]
    async fn test_create_with_missing_microgrid_writes_nothing() {
        // The reference check holds for reports exactly as it does for the
        // other resources.
        let state = testing::state();

        let err = create_report(State(state.clone()), Json(payload(42)))
            .await
            .unwrap_err();
        match err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "Microgrid não encontrada."),
            other => panic!("expected BadRequest, got {other:?}"),
        }
        assert!(state.reports.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_readings_only() {
        let state = testing::state();
        let microgrid_id = seeded_microgrid(&state).await;
        let (_, _, Json(body)) = create_report(State(state.clone()), Json(payload(microgrid_id)))
            .await
            .unwrap();
        let created = body.data.unwrap();

        let update = ReportPayload {
            report_id: created.report_id,
            microgrid_id: microgrid_id + 10,
            energy_generated: 500.0,
            panel_temperature: 38.0,
            profit: 120.0,
        };

        let Json(resp) = update_report(State(state), Path(created.report_id), Json(update))
            .await
            .unwrap();
        let updated = resp.data.unwrap();
        assert_eq!(updated.energy_generated, 500.0);
        assert_eq!(updated.microgrid_id, microgrid_id);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let state = testing::state();
        let microgrid_id = seeded_microgrid(&state).await;
        let (_, _, Json(body)) = create_report(State(state.clone()), Json(payload(microgrid_id)))
            .await
            .unwrap();
        let id = body.data.unwrap().report_id;

        let make_update = || ReportPayload {
            report_id: id,
            microgrid_id,
            energy_generated: 410.0,
            panel_temperature: 36.0,
            profit: 95.0,
        };

        update_report(State(state.clone()), Path(id), Json(make_update()))
            .await
            .unwrap();
        let first = state.reports.get_by_id(id).await.unwrap().unwrap();

        update_report(State(state.clone()), Path(id), Json(make_update()))
            .await
            .unwrap();
        let second = state.reports.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(first.energy_generated, second.energy_generated);
        assert_eq!(first.panel_temperature, second.panel_temperature);
        assert_eq!(first.profit, second.profit);
    }

    #[tokio::test]
    async fn test_update_id_mismatch_is_rejected() {
        let state = testing::state();
        let mut body = payload(1);
        body.report_id = 2;

        let err = update_report(State(state), Path(1), Json(body))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let state = testing::state();
        let microgrid_id = seeded_microgrid(&state).await;
        let (_, _, Json(body)) = create_report(State(state.clone()), Json(payload(microgrid_id)))
            .await
            .unwrap();
        let id = body.data.unwrap().report_id;

        let status = delete_report(State(state.clone()), Path(id)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = get_report(State(state), Path(id)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_empty_is_404() {
        let state = testing::state();
        let err = list_reports(State(state)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
