use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::TokenError;

/// Codec for signed, time-bounded access tokens.
///
/// Encodes [`TokenClaims`] as a compact three-part
/// `header.payload.signature` string with an HS256 MAC over the process-wide
/// secret. The secret is set once at construction and never leaves the
/// codec.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenCodec {
    /// Create a new codec.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (at least 32 bytes for HS256)
    /// * `lifetime` - Fixed validity window applied to every issued token
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime,
        }
    }

    /// Issue a signed token for a subject and role.
    ///
    /// Sets `iat` to the current time and `exp` to `iat + lifetime`.
    ///
    /// # Arguments
    /// * `subject` - Identity email the token certifies
    /// * `role` - Role name to embed in the claims
    ///
    /// # Returns
    /// Compact token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims serialization or signing failed
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// The signature is verified first; expiry is then checked against the
    /// current clock. A token is valid strictly before `exp`. On success the
    /// claims are returned unchanged; decoding never renews a token.
    ///
    /// # Arguments
    /// * `token` - Compact token string to decode
    ///
    /// # Returns
    /// The decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Structural violation: wrong part count, undecodable
    ///   header or payload
    /// * `BadSignature` - Recomputed MAC does not match the signature part
    /// * `Expired` - Current time is at or past `exp`
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        // Expiry is checked below against TokenClaims::is_expired, so decode
        // classifies signature and structural failures separately.
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::BadSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
