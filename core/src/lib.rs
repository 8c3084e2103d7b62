//! Core components for building and signing API-X requests.
//!
//! This crate provides the foundational types and traits for the apisign ecosystem.
//! Service crates build on it to assemble signed requests.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - **Context**: A container that holds the clock, random source, HTTP transport and environment
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and validation (`SigningCredential`)
//! - **SigningRequest**: The request under assembly, turned into an `http::Request` when done
//!
//! ## Example
//!
//! ```
//! use apisign_core::{Context, SigningRequest};
//! use http::Method;
//!
//! # fn example() -> apisign_core::Result<()> {
//! let ctx = Context::new();
//! let mut req = SigningRequest::new(Method::GET, "https", "api.example.com", None)?;
//! req.path_push_segment("/entity");
//! req.path_push_segment("/method");
//! req.query_set("date", apisign_core::time::format_http_date(ctx.now()));
//!
//! assert_eq!(req.path, "/entity/method");
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`Clock`]: For the request timestamp
//! - [`SecureRandom`]: For the per-request salt
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: Hashing and base64 utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Clock;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::OsRandom;
pub use context::SecureRandom;
pub use context::StaticClock;
pub use context::StaticEnv;
pub use context::StaticRandom;
pub use context::SystemClock;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};
mod request;
pub use request::SigningRequest;
pub use request::{PATH_ENCODE_SET, QUERY_ENCODE_SET};
