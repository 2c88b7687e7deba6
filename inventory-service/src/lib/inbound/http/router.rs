use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::current_user;
use super::handlers::auth::login;
use super::handlers::auth::register;
use super::handlers::components::create_component;
use super::handlers::components::get_component;
use super::handlers::components::list_components;
use super::handlers::maintenance::list_maintenance;
use super::handlers::maintenance::record_maintenance;
use super::handlers::workstations::create_workstation;
use super::handlers::workstations::delete_workstation;
use super::handlers::workstations::get_workstation;
use super::handlers::workstations::list_workstations;
use super::handlers::workstations::set_workstation_status;
use super::middleware::authenticate as auth_middleware;
use super::policy::AccessPolicy;
use crate::component::ports::ComponentServicePort;
use crate::identity::ports::IdentityServicePort;
use crate::maintenance::ports::MaintenanceServicePort;
use crate::workstation::ports::WorkstationServicePort;

/// Shared application state.
///
/// Services are held behind their ports so transports and tests can wire in
/// any repository implementation. The authenticator carries the
/// process-wide signing secret, set once at startup.
#[derive(Clone)]
pub struct AppState {
    pub identity_service: Arc<dyn IdentityServicePort>,
    pub workstation_service: Arc<dyn WorkstationServicePort>,
    pub component_service: Arc<dyn ComponentServicePort>,
    pub maintenance_service: Arc<dyn MaintenanceServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub policy: Arc<AccessPolicy>,
}

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/me", get(current_user))
        .route("/api/workstations", get(list_workstations))
        .route("/api/workstations", post(create_workstation))
        .route("/api/workstations/:id", get(get_workstation))
        .route("/api/workstations/:id", delete(delete_workstation))
        .route("/api/workstations/:id/status", patch(set_workstation_status))
        .route("/api/workstations/:id/maintenance", get(list_maintenance))
        .route("/api/workstations/:id/maintenance", post(record_maintenance))
        .route("/api/components", get(list_components))
        .route("/api/components", post(create_component))
        .route("/api/components/:id", get(get_component))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
