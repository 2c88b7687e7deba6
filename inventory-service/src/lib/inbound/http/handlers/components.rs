use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::component::models::Component;
use crate::component::models::ComponentId;
use crate::component::models::ComponentStatus;
use crate::component::models::NewComponent;
use crate::inbound::http::router::AppState;
use crate::workstation::models::WorkstationId;

pub async fn list_components(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ComponentResponse>>, ApiError> {
    let components = state.component_service.list().await?;
    Ok(ApiSuccess::new(
        StatusCode::OK,
        components.iter().map(ComponentResponse::from).collect(),
    ))
}

pub async fn create_component(
    State(state): State<AppState>,
    Json(body): Json<CreateComponentRequest>,
) -> Result<ApiSuccess<ComponentResponse>, ApiError> {
    state
        .component_service
        .create(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref component| ApiSuccess::new(StatusCode::CREATED, component.into()))
}

pub async fn get_component(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiSuccess<ComponentResponse>, ApiError> {
    let component = state.component_service.get(ComponentId(id)).await?;
    Ok(ApiSuccess::new(StatusCode::OK, (&component).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComponentRequest {
    name: String,
    serial_number: Option<String>,
    category: String,
    status: Option<ComponentStatus>,
    workstation_id: Option<i32>,
    purchase_date: Option<NaiveDate>,
    warranty_expiry: Option<NaiveDate>,
    notes: Option<String>,
}

impl CreateComponentRequest {
    fn into_command(self) -> NewComponent {
        NewComponent {
            name: self.name,
            serial_number: self.serial_number,
            category: self.category,
            status: self.status.unwrap_or(ComponentStatus::InStorage),
            workstation_id: self.workstation_id.map(WorkstationId),
            purchase_date: self.purchase_date,
            warranty_expiry: self.warranty_expiry,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentResponse {
    pub id: i32,
    pub name: String,
    pub serial_number: Option<String>,
    pub category: String,
    pub status: ComponentStatus,
    pub workstation_id: Option<i32>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Component> for ComponentResponse {
    fn from(component: &Component) -> Self {
        Self {
            id: component.id.0,
            name: component.name.clone(),
            serial_number: component.serial_number.clone(),
            category: component.category.clone(),
            status: component.status,
            workstation_id: component.workstation_id.map(|id| id.0),
            purchase_date: component.purchase_date,
            warranty_expiry: component.warranty_expiry,
            notes: component.notes.clone(),
            created_at: component.created_at,
        }
    }
}
