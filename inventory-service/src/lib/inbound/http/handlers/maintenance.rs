use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::Principal;
use crate::inbound::http::router::AppState;
use crate::maintenance::models::MaintenanceLog;
use crate::maintenance::models::NewMaintenanceLog;
use crate::workstation::models::WorkstationId;

pub async fn list_maintenance(
    State(state): State<AppState>,
    Path(workstation_id): Path<i32>,
) -> Result<ApiSuccess<Vec<MaintenanceLogResponse>>, ApiError> {
    let logs = state
        .maintenance_service
        .list_for_workstation(WorkstationId(workstation_id))
        .await?;
    Ok(ApiSuccess::new(
        StatusCode::OK,
        logs.iter().map(MaintenanceLogResponse::from).collect(),
    ))
}

pub async fn record_maintenance(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(workstation_id): Path<i32>,
    Json(body): Json<RecordMaintenanceRequest>,
) -> Result<ApiSuccess<MaintenanceLogResponse>, ApiError> {
    let log = NewMaintenanceLog {
        workstation_id: WorkstationId(workstation_id),
        maintenance_type: body.maintenance_type,
        performed_by: Some(principal.id),
        notes: body.notes,
        performed_at: Utc::now(),
    };

    state
        .maintenance_service
        .record(log)
        .await
        .map_err(ApiError::from)
        .map(|ref log| ApiSuccess::new(StatusCode::CREATED, log.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMaintenanceRequest {
    maintenance_type: String,
    notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLogResponse {
    pub id: i32,
    pub workstation_id: i32,
    pub maintenance_type: String,
    pub performed_by: Option<i32>,
    pub notes: Option<String>,
    pub performed_at: DateTime<Utc>,
}

impl From<&MaintenanceLog> for MaintenanceLogResponse {
    fn from(log: &MaintenanceLog) -> Self {
        Self {
            id: log.id.0,
            workstation_id: log.workstation_id.0,
            maintenance_type: log.maintenance_type.clone(),
            performed_by: log.performed_by.map(|id| id.0),
            notes: log.notes.clone(),
            performed_at: log.performed_at,
        }
    }
}
