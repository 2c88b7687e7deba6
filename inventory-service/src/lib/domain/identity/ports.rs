use async_trait::async_trait;

use crate::identity::errors::IdentityError;
use crate::identity::models::EmailAddress;
use crate::identity::models::Identity;
use crate::identity::models::LoginCommand;
use crate::identity::models::NewIdentity;
use crate::identity::models::RegisterCommand;

/// Port for the credential service.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Register a new identity with the lowest-privilege role.
    ///
    /// # Arguments
    /// * `command` - Validated email, plaintext password, and full name
    ///
    /// # Returns
    /// The created identity as persisted (id and created_at assigned)
    ///
    /// # Errors
    /// * `EmailTaken` - An identity with this email already exists
    /// * `Password` - Password hashing failed
    /// * `StoreUnavailable` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Identity, IdentityError>;

    /// Verify credentials and issue a signed access token.
    ///
    /// Mutates no state.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Signed access token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (merged)
    /// * `StoreUnavailable` - Store operation failed
    async fn login(&self, command: LoginCommand) -> Result<String, IdentityError>;

    /// Resolve an identity by email.
    ///
    /// Used once per authenticated request to turn a token subject into a
    /// live principal; a fresh lookup every time, never cached.
    ///
    /// # Errors
    /// * `NotFound` - No identity with this email
    /// * `StoreUnavailable` - Store operation failed
    async fn get_by_email(&self, email: &EmailAddress) -> Result<Identity, IdentityError>;
}

/// Persistence operations for the credential store.
///
/// The store enforces email uniqueness; `create` must raise `EmailTaken`
/// when its uniqueness constraint rejects an insert.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Persist a new identity, assigning id and created_at.
    ///
    /// # Errors
    /// * `EmailTaken` - Uniqueness constraint rejected the email
    /// * `StoreUnavailable` - Store operation failed
    async fn create(&self, identity: NewIdentity) -> Result<Identity, IdentityError>;

    /// Retrieve an identity by email (None if not found).
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError>;

    /// Whether an identity with this email exists.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn exists_by_email(&self, email: &str) -> Result<bool, IdentityError>;
}
