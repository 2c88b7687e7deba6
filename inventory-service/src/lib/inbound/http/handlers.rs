use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::component::errors::ComponentError;
use crate::identity::errors::IdentityError;
use crate::maintenance::errors::MaintenanceError;
use crate::workstation::errors::WorkstationError;

pub mod auth;
pub mod components;
pub mod maintenance;
pub mod workstations;

/// Successful response: a status code and a bare JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Client-facing failure.
///
/// Every variant renders as `{ "error": { "kind", "message" } }` with a
/// coarse kind and nothing else. The authentication variants carry fixed
/// messages: whether a token was absent, malformed, expired, or unsignable
/// is internal detail, and a failed login never says which half of the
/// credentials was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InvalidCredentials,
    Unauthenticated,
    Forbidden,
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    Internal,
}

impl ApiError {
    fn parts(self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "Invalid email or password".to_string(),
            ),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                "Authentication required".to_string(),
            ),
            ApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                "forbidden",
                "Insufficient privileges".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation", msg)
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = self.parts();

        (
            status,
            Json(json!({
                "error": {
                    "kind": kind,
                    "message": message,
                }
            })),
        )
            .into_response()
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::InvalidCredentials => ApiError::InvalidCredentials,
            IdentityError::EmailTaken(_) => ApiError::Conflict("Email already taken".to_string()),
            IdentityError::InvalidEmail(e) => ApiError::UnprocessableEntity(e.to_string()),
            IdentityError::NotFound(email) => {
                ApiError::NotFound(format!("Identity not found: {}", email))
            }
            IdentityError::InvalidRole(_)
            | IdentityError::Password(_)
            | IdentityError::StoreUnavailable(_)
            | IdentityError::Unknown(_) => {
                tracing::error!(error = %err, "Identity operation failed");
                ApiError::Internal
            }
        }
    }
}

impl From<WorkstationError> for ApiError {
    fn from(err: WorkstationError) -> Self {
        match err {
            WorkstationError::NameTaken(_) => ApiError::Conflict(err.to_string()),
            WorkstationError::NotFound(_) => ApiError::NotFound(err.to_string()),
            WorkstationError::InvalidStatus(e) => ApiError::UnprocessableEntity(e.to_string()),
            WorkstationError::StoreUnavailable(_) => {
                tracing::error!(error = %err, "Workstation operation failed");
                ApiError::Internal
            }
        }
    }
}

impl From<ComponentError> for ApiError {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::SerialTaken(_) => ApiError::Conflict(err.to_string()),
            ComponentError::UnknownWorkstation(_) => ApiError::UnprocessableEntity(err.to_string()),
            ComponentError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ComponentError::InvalidStatus(e) => ApiError::UnprocessableEntity(e.to_string()),
            ComponentError::StoreUnavailable(_) => {
                tracing::error!(error = %err, "Component operation failed");
                ApiError::Internal
            }
        }
    }
}

impl From<MaintenanceError> for ApiError {
    fn from(err: MaintenanceError) -> Self {
        match err {
            MaintenanceError::UnknownWorkstation(_) => ApiError::NotFound(err.to_string()),
            MaintenanceError::StoreUnavailable(_) => {
                tracing::error!(error = %err, "Maintenance operation failed");
                ApiError::Internal
            }
        }
    }
}
