use crate::Credential;
use apisign_core::{Context, ProvideCredential, Result};
use async_trait::async_trait;

/// StaticCredentialProvider provides static API-X credentials.
///
/// This provider is used when you have the api key and app key directly and
/// want to use them without any dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with api key and app key.
    pub fn new(api_key: &str, app_key: &str) -> Self {
        Self {
            credential: Credential::new(api_key, app_key),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let provider = StaticCredentialProvider::new("K", "A");
        let cred = provider
            .provide_credential(&Context::new())
            .await?
            .expect("static provider must return credential");
        assert_eq!(cred.api_key, "K");
        assert_eq!(cred.app_key, "A");

        Ok(())
    }
}
