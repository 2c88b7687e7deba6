use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkstationStatusError {
    #[error("Unknown workstation status: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Error)]
pub enum WorkstationError {
    #[error("Invalid workstation status: {0}")]
    InvalidStatus(#[from] WorkstationStatusError),

    #[error("Workstation name already exists: {0}")]
    NameTaken(String),

    #[error("Workstation not found: {0}")]
    NotFound(i32),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}
