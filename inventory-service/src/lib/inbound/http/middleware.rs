use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::identity::errors::IdentityError;
use crate::identity::models::EmailAddress;
use crate::identity::models::Identity;
use crate::identity::models::IdentityId;
use crate::identity::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::policy::Access;
use crate::inbound::http::router::AppState;

/// Identity resolved for the current in-flight request.
///
/// Lives in the request extensions and is dropped with the request; nothing
/// is shared across requests. The role is the one resolved from the store,
/// not the one the token carried.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: IdentityId,
    pub email: EmailAddress,
    pub full_name: String,
    pub role: Role,
}

impl Principal {
    /// Enforce a handler-level role requirement.
    ///
    /// # Errors
    /// * `Forbidden` - Principal does not hold the required role
    pub fn require_role(&self, required: Role) -> Result<(), ApiError> {
        if self.role == required {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }
}

impl From<&Identity> for Principal {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
            full_name: identity.full_name.clone(),
            role: identity.role,
        }
    }
}

/// Per-request authentication.
///
/// Public routes (per the access policy, including all preflight requests)
/// pass through anonymously. On protected routes the bearer token is
/// decoded and its subject re-resolved against the credential store on
/// every request; that re-resolution is the only revocation mechanism.
/// Every failure mode collapses to the same `Unauthenticated` response;
/// the distinction is logged, never surfaced.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if state.policy.access_for(req.method(), req.uri().path()) == Access::Public {
        return Ok(next.run(req).await);
    }

    let token = bearer_token(&req).ok_or(ApiError::Unauthenticated)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthenticated
    })?;

    let email = EmailAddress::new(claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid email");
        ApiError::Unauthenticated
    })?;

    let identity = state
        .identity_service
        .get_by_email(&email)
        .await
        .map_err(|e| match e {
            IdentityError::NotFound(_) => {
                tracing::warn!("Token subject no longer resolvable");
                ApiError::Unauthenticated
            }
            other => ApiError::from(other),
        })?;

    req.extensions_mut().insert(Principal::from(&identity));

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
