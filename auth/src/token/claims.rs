use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a signed access token.
///
/// The payload is base64url-encoded JSON: legible to any holder of the
/// token, protected against tampering by the signature only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject: the authenticated identity's email address.
    pub sub: String,

    /// Role name granted at issuance.
    pub role: String,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration (Unix timestamp). The token is valid strictly before it.
    pub exp: i64,
}

impl TokenClaims {
    /// Whether the token is expired at `now` (Unix timestamp).
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}
