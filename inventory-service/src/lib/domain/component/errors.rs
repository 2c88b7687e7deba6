use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComponentStatusError {
    #[error("Unknown component status: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Error)]
pub enum ComponentError {
    #[error("Invalid component status: {0}")]
    InvalidStatus(#[from] ComponentStatusError),

    #[error("Serial number already exists: {0}")]
    SerialTaken(String),

    #[error("Workstation does not exist: {0}")]
    UnknownWorkstation(i32),

    #[error("Component not found: {0}")]
    NotFound(i32),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}
