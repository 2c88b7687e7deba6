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
use crate::identity::models::Role;
use crate::inbound::http::middleware::Principal;
use crate::inbound::http::router::AppState;
use crate::workstation::models::NewWorkstation;
use crate::workstation::models::Workstation;
use crate::workstation::models::WorkstationId;
use crate::workstation::models::WorkstationStatus;

pub async fn list_workstations(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<WorkstationResponse>>, ApiError> {
    let workstations = state.workstation_service.list().await?;
    Ok(ApiSuccess::new(
        StatusCode::OK,
        workstations.iter().map(WorkstationResponse::from).collect(),
    ))
}

pub async fn create_workstation(
    State(state): State<AppState>,
    Json(body): Json<CreateWorkstationRequest>,
) -> Result<ApiSuccess<WorkstationResponse>, ApiError> {
    state
        .workstation_service
        .create(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref workstation| ApiSuccess::new(StatusCode::CREATED, workstation.into()))
}

pub async fn get_workstation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiSuccess<WorkstationResponse>, ApiError> {
    let workstation = state.workstation_service.get(WorkstationId(id)).await?;
    Ok(ApiSuccess::new(StatusCode::OK, (&workstation).into()))
}

pub async fn set_workstation_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<ApiSuccess<WorkstationResponse>, ApiError> {
    let workstation = state
        .workstation_service
        .set_status(WorkstationId(id), body.status)
        .await?;
    Ok(ApiSuccess::new(StatusCode::OK, (&workstation).into()))
}

/// Removing a workstation is an administrative operation.
pub async fn delete_workstation(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    principal.require_role(Role::Admin)?;

    state.workstation_service.delete(WorkstationId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkstationRequest {
    name: String,
    status: Option<WorkstationStatus>,
    #[serde(default)]
    grid_x: i32,
    #[serde(default)]
    grid_y: i32,
}

impl CreateWorkstationRequest {
    fn into_command(self) -> NewWorkstation {
        NewWorkstation {
            name: self.name,
            status: self.status.unwrap_or(WorkstationStatus::Operational),
            grid_x: self.grid_x,
            grid_y: self.grid_y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    status: WorkstationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkstationResponse {
    pub id: i32,
    pub name: String,
    pub status: WorkstationStatus,
    pub grid_x: i32,
    pub grid_y: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Workstation> for WorkstationResponse {
    fn from(workstation: &Workstation) -> Self {
        Self {
            id: workstation.id.0,
            name: workstation.name.clone(),
            status: workstation.status,
            grid_x: workstation.grid_x,
            grid_y: workstation.grid_y,
            created_at: workstation.created_at,
        }
    }
}
