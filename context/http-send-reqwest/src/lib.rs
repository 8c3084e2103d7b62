//! [`HttpSend`] implementation backed by [`reqwest`].

use apisign_core::{Error, HttpSend, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};

/// ReqwestHttpSend sends assembled requests with a [`reqwest::Client`].
///
/// Connection pooling, TLS and timeouts are all configured on the client.
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("convert into reqwest request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::invalid_data("send http request failed").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::invalid_data("read http response body failed").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
