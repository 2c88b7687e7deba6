use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenClaims;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Owns the process-wide signing secret (inside the codec) and the hasher.
/// Stateless between calls: nothing here outlives a single operation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Password does not match the stored hash. Callers surface this with
    /// the same shape as an unknown subject.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Signing secret, loaded once from configuration at startup
    /// * `token_lifetime` - Validity window for every issued token
    pub fn new(secret: &[u8], token_lifetime: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(secret, token_lifetime),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity email to certify in the token
    /// * `role` - Role name to embed in the claims
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash could not be parsed
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        role: &str,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_codec.issue(subject, role)?)
    }

    /// Issue a token without password verification.
    ///
    /// Used where authentication has already been established by other
    /// means (test fixtures, bootstrap accounts).
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed
    pub fn issue_token(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        self.token_codec.issue(subject, role)
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `TokenError` - Structural, signature, or expiry failure
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.token_codec.decode(token)
    }
}
