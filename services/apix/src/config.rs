use log::warn;

use crate::constants::*;
use apisign_core::Context;

/// What to do when the request body can't be turned into canonical JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyPolicy {
    /// Log a warning and send the request without a body.
    #[default]
    Lenient,
    /// Fail the assembly with an encoding error.
    Strict,
}

/// Config carries the server location and signing options for API-X.
///
/// Credentials are kept apart in [`crate::Credential`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// `scheme` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`API_X_SCHEME`]
    pub scheme: Option<String>,
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`API_X_HOST`]
    pub host: Option<String>,
    /// `port` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`API_X_PORT`]
    pub port: Option<u16>,
    /// Mix a fresh random salt into every signature and send it in the
    /// `salt` header.
    ///
    /// Env value [`API_X_SALT`] turns it on.
    pub salt: bool,
    /// Body serialization failure handling.
    ///
    /// Env value [`API_X_STRICT_BODY`] switches to [`BodyPolicy::Strict`].
    pub body_policy: BodyPolicy,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set scheme
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set or unset port
    pub fn with_port(mut self, port: impl Into<Option<u16>>) -> Self {
        self.port = port.into();
        self
    }

    /// Enable or disable salting
    pub fn with_salt(mut self, salt: bool) -> Self {
        self.salt = salt;
        self
    }

    /// Set body policy
    pub fn with_body_policy(mut self, policy: BodyPolicy) -> Self {
        self.body_policy = policy;
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(API_X_SCHEME) {
            self.scheme.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(API_X_HOST) {
            self.host.get_or_insert(v);
        }
        if self.port.is_none() {
            if let Some(v) = ctx.env_var(API_X_PORT) {
                match v.parse() {
                    Ok(port) => self.port = Some(port),
                    Err(e) => warn!("ignore invalid {API_X_PORT} value {v:?}: {e}"),
                }
            }
        }
        if ctx.env_var(API_X_SALT).is_some_and(|v| is_truthy(&v)) {
            self.salt = true;
        }
        if ctx.env_var(API_X_STRICT_BODY).is_some_and(|v| is_truthy(&v)) {
            self.body_policy = BodyPolicy::Strict;
        }

        self
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}
