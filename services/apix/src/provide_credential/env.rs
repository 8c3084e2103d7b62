use crate::{constants::*, Credential};
use apisign_core::{Context, ProvideCredential, Result};
use async_trait::async_trait;

/// EnvCredentialProvider loads API-X credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `API_X_API_KEY`: The application api key
/// - `API_X_APP_KEY`: The application secret
///
/// Both must be set and non-empty.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let api_key = ctx.env_var(API_X_API_KEY).filter(|v| !v.is_empty());
        let app_key = ctx.env_var(API_X_APP_KEY).filter(|v| !v.is_empty());

        match (api_key, app_key) {
            (Some(api_key), Some(app_key)) => Ok(Some(Credential { api_key, app_key })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apisign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (API_X_API_KEY.to_string(), "test_api_key".to_string()),
            (API_X_APP_KEY.to_string(), "test_app_key".to_string()),
        ]);

        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_some());
        let cred = cred.unwrap();
        assert_eq!(cred.api_key, "test_api_key");
        assert_eq!(cred.app_key, "test_app_key");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_credentials() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (API_X_API_KEY.to_string(), "test_api_key".to_string()),
            (API_X_APP_KEY.to_string(), String::new()),
        ]);

        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
