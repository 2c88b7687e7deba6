use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum MaintenanceError {
    #[error("Workstation does not exist: {0}")]
    UnknownWorkstation(i32),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}
