use std::fmt::{Debug, Formatter};

use apisign_core::{utils::Redact, SigningCredential};

/// Credential for API-X.
///
/// `api_key` identifies the application and is sent in the clear as a query
/// parameter. `app_key` is the shared secret and never leaves the process.
#[derive(Clone, Default)]
pub struct Credential {
    /// Application identity, sent as `api_key`.
    pub api_key: String,
    /// Application secret, only used to derive `app_session_id`.
    pub app_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(api_key: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            app_key: app_key.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("app_key", &Redact::from(&self.app_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.app_key.is_empty()
    }
}
