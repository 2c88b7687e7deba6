use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::identity::errors::EmailError;
use crate::identity::models::EmailAddress;
use crate::identity::models::Identity;
use crate::identity::models::LoginCommand;
use crate::identity::models::RegisterCommand;
use crate::identity::models::Role;
use crate::inbound::http::middleware::Principal;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<IdentityResponse>, ApiError> {
    state
        .identity_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref identity| ApiSuccess::new(StatusCode::CREATED, identity.into()))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponse>, ApiError> {
    // An unparseable email gets the same answer as an unknown one
    let email =
        EmailAddress::new(body.email).map_err(|_| ApiError::InvalidCredentials)?;

    let token = state
        .identity_service
        .login(LoginCommand {
            email,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, LoginResponse { token }))
}

pub async fn current_user(
    Extension(principal): Extension<Principal>,
) -> ApiSuccess<PrincipalResponse> {
    ApiSuccess::new(StatusCode::OK, PrincipalResponse::from(&principal))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    email: String,
    password: String,
    full_name: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        let email = EmailAddress::new(self.email)?;
        if self.password.is_empty() {
            return Err(ParseRegisterRequestError::EmptyPassword);
        }
        Ok(RegisterCommand::new(email, self.password, self.full_name))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Public view of an identity: no password material, in any form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for IdentityResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.0,
            email: identity.email.to_string(),
            full_name: identity.full_name.clone(),
            role: identity.role,
            created_at: identity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalResponse {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl From<&Principal> for PrincipalResponse {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id.0,
            email: principal.email.to_string(),
            full_name: principal.full_name.clone(),
            role: principal.role,
        }
    }
}
