use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use inventory_service::component::service::ComponentService;
use inventory_service::config::Config;
use inventory_service::identity::service::IdentityService;
use inventory_service::inbound::http::policy::AccessPolicy;
use inventory_service::inbound::http::router::create_router;
use inventory_service::inbound::http::router::AppState;
use inventory_service::maintenance::service::MaintenanceService;
use inventory_service::repositories::PostgresComponentRepository;
use inventory_service::repositories::PostgresIdentityRepository;
use inventory_service::repositories::PostgresMaintenanceRepository;
use inventory_service::repositories::PostgresWorkstationRepository;
use inventory_service::workstation::service::WorkstationService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "inventory-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // The signing secret is read exactly once, here; the authenticator keeps
    // it private for the lifetime of the process.
    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        Duration::hours(config.jwt.expiration_hours),
    ));

    let identity_repository = Arc::new(PostgresIdentityRepository::new(pg_pool.clone()));
    let workstation_repository = Arc::new(PostgresWorkstationRepository::new(pg_pool.clone()));
    let component_repository = Arc::new(PostgresComponentRepository::new(pg_pool.clone()));
    let maintenance_repository = Arc::new(PostgresMaintenanceRepository::new(pg_pool));

    let state = AppState {
        identity_service: Arc::new(IdentityService::new(
            identity_repository,
            Arc::clone(&authenticator),
        )),
        workstation_service: Arc::new(WorkstationService::new(workstation_repository)),
        component_service: Arc::new(ComponentService::new(component_repository)),
        maintenance_service: Arc::new(MaintenanceService::new(maintenance_repository)),
        authenticator,
        policy: Arc::new(AccessPolicy::new()),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
