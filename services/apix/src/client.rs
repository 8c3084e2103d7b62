//! Thin HTTP wrapper around [`RequestBuilder`].

use bytes::Bytes;
use http::Method;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::build::{spec_of, RequestBuilder};
use crate::spec::RequestSpec;
use apisign_core::utils::truncate;
use apisign_core::{Error, Result};

/// Longest part of an error response body kept in error messages.
const ERROR_BODY_LIMIT: usize = 256;

/// Client assembles, sends and decodes API-X calls.
///
/// Every call assembles a fresh request, so a call can simply be repeated to
/// retry it. The client itself never retries.
///
/// ```no_run
/// use apisign_apix::{Client, Credential, RequestBuilder};
/// use apisign_core::Context;
/// use apisign_http_send_reqwest::ReqwestHttpSend;
/// use serde_json::Value;
///
/// # async fn example() -> apisign_core::Result<()> {
/// let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
/// let builder = RequestBuilder::new(Credential::new("api_key", "app_key"))
///     .with_context(ctx)
///     .with_scheme("https")
///     .with_host("api.example.com");
///
/// let client = Client::new(builder);
/// let resp: Value = client.get(Some("/entity"), "/method", &[]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    builder: RequestBuilder,
}

impl Client {
    /// Create a client that sends requests through the builder's context.
    pub fn new(builder: RequestBuilder) -> Self {
        Self { builder }
    }

    /// The builder used to assemble requests.
    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Assemble and send a request, returning the raw response.
    ///
    /// Fails with [`apisign_core::ErrorKind::InvalidData`] if the transport
    /// fails or the status is not `2xx`.
    pub async fn send_raw<B>(
        &self,
        spec: &RequestSpec,
        body: Option<&B>,
    ) -> Result<http::Response<Bytes>>
    where
        B: Serialize + ?Sized,
    {
        let req = self.builder.assemble(spec, body)?;
        let session_id = req.session_id().to_string();

        let resp = self
            .builder
            .context()
            .http_send(req.into_http_request())
            .await
            .map_err(|e| {
                if e.is_transport_error() {
                    e
                } else {
                    Error::invalid_data("send request failed").with_source(e)
                }
            })?;

        let status = resp.status();
        debug!("request with session {session_id} got status {status}");
        if !status.is_success() {
            let body = String::from_utf8_lossy(resp.body());
            return Err(Error::invalid_data(format!(
                "unexpected status {status}: {}",
                truncate(&body, ERROR_BODY_LIMIT)
            )));
        }

        Ok(resp)
    }

    /// Assemble and send a request, decoding the JSON response into `T`.
    ///
    /// Fails with [`apisign_core::ErrorKind::InvalidDataType`] if the response
    /// body doesn't decode into `T`.
    pub async fn send<T, B>(&self, spec: &RequestSpec, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self.send_raw(spec, body).await?;
        serde_json::from_slice(resp.body()).map_err(|e| {
            Error::invalid_data_type(format!(
                "decode response into {} failed",
                std::any::type_name::<T>()
            ))
            .with_source(e)
        })
    }

    /// Send a `GET` request.
    pub async fn get<T: DeserializeOwned>(
        &self,
        entity: Option<&str>,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let spec = spec_of(Method::GET, entity, method, query);
        self.send::<T, serde_json::Value>(&spec, None).await
    }

    /// Send a `POST` request.
    pub async fn post<T, B>(
        &self,
        entity: Option<&str>,
        method: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let spec = spec_of(Method::POST, entity, method, query);
        self.send(&spec, body).await
    }

    /// Send a `PUT` request.
    pub async fn put<T, B>(
        &self,
        entity: Option<&str>,
        method: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let spec = spec_of(Method::PUT, entity, method, query);
        self.send(&spec, body).await
    }
}
