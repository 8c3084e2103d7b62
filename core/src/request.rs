use std::str::FromStr;

use http::header::HeaderName;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

use crate::{Error, Result};

/// AsciiSet for query keys and values.
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for path segments, same as [`QUERY_ENCODE_SET`] but keeps `/`.
pub static PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Request under assembly.
///
/// Holds the parts of an outgoing request while the builder fills them in,
/// then turns into an [`http::Request`].
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, already percent encoded. Always starts with `/`.
    pub path: String,
    /// HTTP query parameters, not encoded yet.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Start a request against `scheme://host[:port]/`.
    ///
    /// Returns a config error if scheme or host can't be parsed.
    pub fn new(method: Method, scheme: &str, host: &str, port: Option<u16>) -> Result<Self> {
        if scheme.is_empty() {
            return Err(Error::config_invalid("scheme is empty"));
        }
        if host.is_empty() {
            return Err(Error::config_invalid("host is empty"));
        }

        let scheme = Scheme::from_str(scheme).map_err(|e| {
            Error::config_invalid(format!("invalid scheme {scheme}")).with_source(e)
        })?;
        let authority = match port {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        let authority = Authority::from_str(&authority)
            .map_err(|e| Error::config_invalid(format!("invalid host {host}")).with_source(e))?;
        // Userinfo is never sent to API-X servers.
        if authority.as_str().contains('@') {
            return Err(Error::config_invalid(format!("invalid host {host}")));
        }

        Ok(SigningRequest {
            method,
            scheme,
            authority,
            path: "/".to_string(),
            query: Vec::new(),
            headers: HeaderMap::new(),
        })
    }

    /// Append a path segment.
    ///
    /// Leading and trailing `/` are stripped and the rest is percent encoded,
    /// so `"/entity"` followed by `"/method"` gives `/entity/method`.
    /// Empty segments are skipped.
    pub fn path_push_segment(&mut self, segment: &str) {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            return;
        }

        if !self.path.ends_with('/') {
            self.path.push('/');
        }
        self.path.extend(utf8_percent_encode(segment, &PATH_ENCODE_SET));
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Set a query pair, dropping every existing pair with the same key.
    pub fn query_set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.query.retain(|(k, _)| k != &key);
        self.query.push((key, value.into()));
    }

    /// Get the first query value for `key`.
    pub fn query_get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert a header, replacing any previous value.
    pub fn header_insert(&mut self, key: HeaderName, value: &str) -> Result<()> {
        self.headers.insert(key, HeaderValue::from_str(value)?);
        Ok(())
    }

    /// Percent encoded query string, without the leading `?`.
    pub fn query_to_string(&self) -> String {
        let mut s = String::new();
        for (i, (k, v)) in self.query.iter().enumerate() {
            if i > 0 {
                s.push('&');
            }
            s.extend(utf8_percent_encode(k, &QUERY_ENCODE_SET));
            s.push('=');
            s.extend(utf8_percent_encode(v, &QUERY_ENCODE_SET));
        }
        s
    }

    /// Build the final uri.
    pub fn uri(&self) -> Result<Uri> {
        let paq = if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_to_string())
        };

        let uri = Uri::builder()
            .scheme(self.scheme.clone())
            .authority(self.authority.clone())
            .path_and_query(PathAndQuery::from_str(&paq)?)
            .build()?;
        Ok(uri)
    }
}
