//! Authentication infrastructure library
//!
//! Provides the building blocks the inventory service authenticates with:
//! - Password hashing (Argon2id)
//! - Signed access-token issuance and validation (HS256)
//! - Authentication coordination
//!
//! The service defines its own domain ports and adapts these implementations;
//! nothing in this crate touches storage or HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = codec.issue("alice@example.com", "EMPLOYEE").unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let token = auth
//!     .authenticate("password123", &hash, "alice@example.com", "EMPLOYEE")
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.role, "EMPLOYEE");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenClaims;
pub use token::TokenCodec;
pub use token::TokenError;
