//! API-X request builder.

use bytes::Bytes;
use http::header::HeaderName;
use http::header::ACCEPT;
use http::header::CONTENT_TYPE;
use http::header::DATE;
use http::HeaderMap;
use http::Method;
use http::Uri;
use log::debug;
use log::warn;
use serde::Serialize;

use crate::body::canonical_json;
use crate::config::{BodyPolicy, Config};
use crate::constants::*;
use crate::credential::Credential;
use crate::sign_request::RequestSigner;
use crate::spec::RequestSpec;
use apisign_core::hash::base64_encode;
use apisign_core::time::format_http_date;
use apisign_core::{Context, Error, ProvideCredential, Result, SigningCredential, SigningRequest};

/// RequestBuilder assembles signed API-X requests.
///
/// The builder is an immutable value: every `with_*` call consumes it and
/// returns an updated copy, and [`RequestBuilder::assemble`] only reads it.
/// Clone it freely and share it across threads.
///
/// ```
/// use apisign_apix::{Credential, RequestBuilder};
/// use serde_json::json;
///
/// # fn example() -> apisign_core::Result<()> {
/// let builder = RequestBuilder::new(Credential::new("api_key", "app_key"))
///     .with_scheme("https")
///     .with_host("api.example.com")
///     .with_port(8443);
///
/// let req = builder.post(
///     Some("/entity"),
///     "/method",
///     &[("param1", "value1")],
///     Some(&json!({"bodyParam1": "value1"})),
/// )?;
/// assert_eq!(req.uri().path(), "/entity/method");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    ctx: Context,
    credential: Credential,
    config: Config,
    signer: RequestSigner,
}

impl RequestBuilder {
    /// Create a builder with the given credential.
    ///
    /// Uses a default [`Context`], the system clock and the OS random source.
    pub fn new(credential: Credential) -> Self {
        Self {
            ctx: Context::new(),
            credential,
            config: Config::default(),
            signer: RequestSigner::new(),
        }
    }

    /// Create a builder with the credential loaded by `provider`.
    pub async fn load(
        ctx: Context,
        provider: &impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let credential = provider
            .provide_credential(&ctx)
            .await?
            .ok_or_else(|| Error::credential_invalid("no credential found"))?;
        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "api key and app key must not be empty",
            ));
        }

        Ok(Self::new(credential).with_context(ctx))
    }

    /// Replace the context.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Replace the whole config.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set scheme, like `https`.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config = self.config.with_scheme(scheme);
        self
    }

    /// Set host, like `api.example.com`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.config = self.config.with_host(host);
        self
    }

    /// Set or unset port.
    pub fn with_port(mut self, port: impl Into<Option<u16>>) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Enable or disable per request salt.
    pub fn with_salt(mut self, salt: bool) -> Self {
        self.config = self.config.with_salt(salt);
        self
    }

    /// Set body policy.
    pub fn with_body_policy(mut self, policy: BodyPolicy) -> Self {
        self.config = self.config.with_body_policy(policy);
        self
    }

    /// Context used by this builder.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Config used by this builder.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Credential used by this builder.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Assemble a signed request.
    ///
    /// Every call reads the clock and, when salting is on, the random source
    /// again, so two calls never share a session id. Assemble a new request
    /// for every attempt, retries included.
    ///
    /// Fails with [`apisign_core::ErrorKind::ConfigInvalid`] when scheme or
    /// host is missing or invalid.
    pub fn assemble<B>(&self, spec: &RequestSpec, body: Option<&B>) -> Result<AssembledRequest>
    where
        B: Serialize + ?Sized,
    {
        if !spec.is_supported_method() {
            return Err(Error::request_invalid(format!(
                "http method {} is not supported by API-X",
                spec.http_method()
            )));
        }

        let scheme = self
            .config
            .scheme
            .as_deref()
            .ok_or_else(|| Error::config_invalid("scheme is not set"))?;
        let host = self
            .config
            .host
            .as_deref()
            .ok_or_else(|| Error::config_invalid("host is not set"))?;
        let mut req =
            SigningRequest::new(spec.http_method().clone(), scheme, host, self.config.port)?;

        let body = match body.map(canonical_json::<B>).transpose() {
            Ok(body) => body,
            Err(e) => match self.config.body_policy {
                BodyPolicy::Strict => return Err(e),
                BodyPolicy::Lenient => {
                    warn!("request body dropped: {e}");
                    None
                }
            },
        };

        let date = format_http_date(self.ctx.now());
        let salt = if self.config.salt {
            Some(self.ctx.random_bytes(SALT_LENGTH)?)
        } else {
            None
        };
        let session_id = self.signer.sign(
            &self.credential.app_key,
            body.as_deref(),
            &date,
            salt.as_deref(),
        );
        let salt = salt.as_deref().map(base64_encode);

        if let Some(entity) = spec.entity() {
            req.path_push_segment(entity);
        }
        req.path_push_segment(spec.method());

        for (k, v) in spec.query() {
            req.query_push(k, v);
        }
        req.query_set(API_KEY, &self.credential.api_key);
        req.query_set(APP_SESSION_ID, &session_id);

        req.header_insert(DATE, &date)?;
        req.header_insert(CONTENT_TYPE, APPLICATION_JSON)?;
        req.header_insert(ACCEPT, APPLICATION_JSON)?;
        if let Some(salt) = &salt {
            req.header_insert(HeaderName::from_static(SALT), salt)?;
        }

        let uri = req.uri()?;
        debug!("assembled {} {}", req.method, req.path);

        Ok(AssembledRequest {
            method: req.method,
            uri,
            headers: req.headers,
            body: body.map(Bytes::from),
            session_id,
            date,
            salt,
        })
    }

    /// Assemble a `GET` request.
    pub fn get(
        &self,
        entity: Option<&str>,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<AssembledRequest> {
        self.assemble::<serde_json::Value>(&spec_of(Method::GET, entity, method, query), None)
    }

    /// Assemble a `POST` request.
    pub fn post<B>(
        &self,
        entity: Option<&str>,
        method: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<AssembledRequest>
    where
        B: Serialize + ?Sized,
    {
        self.assemble(&spec_of(Method::POST, entity, method, query), body)
    }

    /// Assemble a `PUT` request.
    pub fn put<B>(
        &self,
        entity: Option<&str>,
        method: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<AssembledRequest>
    where
        B: Serialize + ?Sized,
    {
        self.assemble(&spec_of(Method::PUT, entity, method, query), body)
    }

    /// Assemble a `DELETE` request.
    pub fn delete(
        &self,
        entity: Option<&str>,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<AssembledRequest> {
        let spec = spec_of(Method::DELETE, entity, method, query);
        self.assemble::<serde_json::Value>(&spec, None)
    }

    /// Assemble a `PATCH` request.
    pub fn patch<B>(
        &self,
        entity: Option<&str>,
        method: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<AssembledRequest>
    where
        B: Serialize + ?Sized,
    {
        self.assemble(&spec_of(Method::PATCH, entity, method, query), body)
    }
}

pub(crate) fn spec_of(
    http_method: Method,
    entity: Option<&str>,
    method: &str,
    query: &[(&str, &str)],
) -> RequestSpec {
    RequestSpec::new(http_method, method)
        .with_entity_opt(entity)
        .with_queries(query.iter().copied())
}

/// AssembledRequest is a signed request ready to be sent as is.
///
/// The server rejects a session id it has already seen, so a request is
/// single use: it can't be cloned, and [`AssembledRequest::into_http_request`]
/// consumes it.
#[derive(Debug)]
pub struct AssembledRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Option<Bytes>,
    session_id: String,
    date: String,
    salt: Option<String>,
}

impl AssembledRequest {
    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Full url, including `api_key` and `app_session_id`.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Headers, including `Date` and `salt` when salted.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Canonical JSON body, `None` when the request has no body.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The `app_session_id` this request was signed with.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The `Date` header value this request was signed with.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The base64 `salt` header value, if salted.
    pub fn salt(&self) -> Option<&str> {
        self.salt.as_deref()
    }

    /// Convert into an [`http::Request`] for any transport.
    ///
    /// A missing body becomes an empty one.
    pub fn into_http_request(self) -> http::Request<Bytes> {
        let mut req = http::Request::new(self.body.unwrap_or_default());
        *req.method_mut() = self.method;
        *req.uri_mut() = self.uri;
        *req.headers_mut() = self.headers;
        req
    }
}
