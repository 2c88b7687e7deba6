use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::identity::errors::EmailError;
use crate::identity::errors::RoleError;

/// Registered user record.
///
/// Created once by registration; the id and creation timestamp are assigned
/// by the store and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: IdentityId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Identity fields known before the store assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub email: EmailAddress,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
}

/// Identity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(pub i32);

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Privilege tier used for route and handler-level authorization.
///
/// `Employee` is the lowest-privilege role and the registration default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    /// Role name as stored and embedded in token claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPLOYEE" => Ok(Role::Employee),
            "ADMIN" => Ok(Role::Admin),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email address type
///
/// Validates format using an RFC 5322 compliant parser; stored and compared
/// case-sensitively, exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new identity with validated fields.
///
/// The plaintext password lives only for the duration of the request and is
/// hashed by the service before anything is persisted.
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
    pub full_name: String,
}

impl RegisterCommand {
    pub fn new(email: EmailAddress, password: String, full_name: String) -> Self {
        Self {
            email,
            password,
            full_name,
        }
    }
}

/// Transient login credentials; discarded after hash comparison.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}
