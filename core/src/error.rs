// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;
use thiserror::Error;

/// The error type for apisign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials are missing or malformed
    CredentialInvalid,

    /// Server location or other configuration can't form a request.
    ///
    /// Retrying with the same inputs will fail again.
    ConfigInvalid,

    /// Request cannot be assembled (unsupported method, bad header, etc.)
    RequestInvalid,

    /// Request body or signing input can't be encoded
    EncodingFailed,

    /// Transport failed or the server answered with a non-success status
    InvalidData,

    /// Response body doesn't decode into the expected type
    InvalidDataType,

    /// Unexpected errors (random source, I/O, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error was raised while building the request.
    ///
    /// Construction errors never reach the network.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::CredentialInvalid
                | ErrorKind::ConfigInvalid
                | ErrorKind::RequestInvalid
                | ErrorKind::EncodingFailed
        )
    }

    /// Check if this error was raised by the transport or the response.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidData | ErrorKind::InvalidDataType
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an encoding failed error
    pub fn encoding_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EncodingFailed, message)
    }

    /// Create an invalid data error
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidData, message)
    }

    /// Create an invalid data type error
    pub fn invalid_data_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDataType, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::EncodingFailed => write!(f, "encoding failed"),
            ErrorKind::InvalidData => write!(f, "invalid data"),
            ErrorKind::InvalidDataType => write!(f, "invalid data type"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::config_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Self::config_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::encoding_failed(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_classification() {
        let cases = vec![
            (Error::credential_invalid("x"), true, false),
            (Error::config_invalid("x"), true, false),
            (Error::request_invalid("x"), true, false),
            (Error::encoding_failed("x"), true, false),
            (Error::invalid_data("x"), false, true),
            (Error::invalid_data_type("x"), false, true),
            (Error::unexpected("x"), false, false),
        ];

        for (err, construction, transport) in cases {
            assert_eq!(err.is_construction_error(), construction, "{err}");
            assert_eq!(err.is_transport_error(), transport, "{err}");
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::config_invalid("host is not set");
        assert_eq!(err.to_string(), "invalid configuration: host is not set");
    }

    #[test]
    fn test_invalid_uri_is_config_error() {
        let err: Error = "http://exa mple.com".parse::<http::Uri>().unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
