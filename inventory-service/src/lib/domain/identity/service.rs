use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::identity::errors::IdentityError;
use crate::identity::models::EmailAddress;
use crate::identity::models::Identity;
use crate::identity::models::LoginCommand;
use crate::identity::models::NewIdentity;
use crate::identity::models::RegisterCommand;
use crate::identity::models::Role;
use crate::identity::ports::IdentityRepository;
use crate::identity::ports::IdentityServicePort;

/// Credential service: registration and login on top of the credential
/// store and the authenticator.
pub struct IdentityService<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
}

impl<R> IdentityService<R>
where
    R: IdentityRepository,
{
    /// Create a new identity service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Shared password hasher and token codec
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<R> IdentityServicePort for IdentityService<R>
where
    R: IdentityRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Identity, IdentityError> {
        if self
            .repository
            .exists_by_email(command.email.as_str())
            .await?
        {
            return Err(IdentityError::EmailTaken(command.email.to_string()));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        // The store's uniqueness constraint backstops the check above: a
        // concurrent registration surfaces here as EmailTaken from create.
        self.repository
            .create(NewIdentity {
                email: command.email,
                password_hash,
                full_name: command.full_name,
                role: Role::Employee,
            })
            .await
    }

    async fn login(&self, command: LoginCommand) -> Result<String, IdentityError> {
        let identity = self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        self.authenticator
            .authenticate(
                &command.password,
                &identity.password_hash,
                identity.email.as_str(),
                identity.role.as_str(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => IdentityError::InvalidCredentials,
                AuthenticationError::Password(err) => IdentityError::Password(err),
                AuthenticationError::Token(err) => IdentityError::Unknown(err.to_string()),
            })
    }

    async fn get_by_email(&self, email: &EmailAddress) -> Result<Identity, IdentityError> {
        self.repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(IdentityError::NotFound(email.to_string()))
    }
}
