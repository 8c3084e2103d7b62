use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by builders as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used to load the credential from the environment.
///
/// Returns `Ok(None)` when this source has nothing to offer, so callers can
/// try the next one.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// ProvideCredentialChain tries a list of providers in order.
///
/// The first provider that returns `Some` wins. Errors are logged and skipped
/// so a broken source doesn't hide the ones behind it.
#[derive(Debug)]
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: SigningCredential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SigningCredential> ProvideCredentialChain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Insert a provider at the front of the chain.
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait::async_trait]
impl<C: SigningCredential> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("credential loaded from {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => continue,
                Err(e) => log::warn!("credential provider {provider:?} failed: {e}"),
            }
        }

        Ok(None)
    }
}
