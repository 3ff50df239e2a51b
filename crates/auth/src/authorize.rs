use subtle::ConstantTimeEq;
use thiserror::Error;

/// Placeholder secret for local development only. Never deploy with it.
pub const DEFAULT_ADMIN_SECRET: &str = "supersecrettoken";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("Access Denied: Invalid admin token")]
    Forbidden,
}

/// Shared secret that unlocks the admin operations.
///
/// - No IO
/// - No expiry, no rate limiting
/// - Fails closed on a missing or empty token
#[derive(Clone)]
pub struct AdminSecret(String);

impl AdminSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Check a presented token against the secret in constant time.
    pub fn verify(&self, presented: Option<&str>) -> Result<(), AuthzError> {
        let presented = presented.filter(|t| !t.is_empty()).ok_or(AuthzError::Forbidden)?;

        if bool::from(presented.as_bytes().ct_eq(self.0.as_bytes())) {
            Ok(())
        } else {
            Err(AuthzError::Forbidden)
        }
    }

    pub fn is_default_placeholder(&self) -> bool {
        self.0 == DEFAULT_ADMIN_SECRET
    }
}

impl Default for AdminSecret {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_SECRET)
    }
}

impl core::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AdminSecret(***)")
    }
}
