use axum::http::Method;

/// Route-level access requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

/// Static route-to-access table, consulted before any token work happens.
///
/// Public routes skip authentication entirely; everything else requires an
/// authenticated principal. Cross-origin preflight (`OPTIONS`) is public on
/// every route. Handler-level role requirements are a second check, applied
/// after the principal is attached.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    public_prefixes: &'static [&'static str],
}

impl AccessPolicy {
    pub fn new() -> Self {
        Self {
            public_prefixes: &["/api/auth/"],
        }
    }

    /// Access requirement for a request line.
    pub fn access_for(&self, method: &Method, path: &str) -> Access {
        if method == Method::OPTIONS {
            return Access::Public;
        }

        if self
            .public_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix))
        {
            Access::Public
        } else {
            Access::Authenticated
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new()
    }
}
