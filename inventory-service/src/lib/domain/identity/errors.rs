use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Top-level error for identity operations.
///
/// `InvalidCredentials` deliberately merges unknown-email and wrong-password
/// failures; callers must not be able to tell which one occurred.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already taken")]
    EmailTaken(String),

    #[error("Identity not found: {0}")]
    NotFound(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
