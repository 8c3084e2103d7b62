//! Request signing and assembly for API-X services.
//!
//! Every API-X request carries the caller's `api_key` and an `app_session_id`
//! derived from the app key, the request body, the `Date` header and an
//! optional random salt. [`RequestBuilder`] assembles such requests and
//! [`Client`] sends them.
//!
//! ```
//! use apisign_apix::{Credential, RequestBuilder, RequestSpec};
//! use serde_json::json;
//!
//! # fn example() -> apisign_core::Result<()> {
//! let builder = RequestBuilder::new(Credential::new("api_key", "app_key"))
//!     .with_scheme("https")
//!     .with_host("api.example.com");
//!
//! let spec = RequestSpec::post("/create").with_entity("/users");
//! let req = builder.assemble(&spec, Some(&json!({"name": "alice"})))?;
//! assert_eq!(req.session_id().len(), 64);
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{API_KEY, APP_SESSION_ID, SALT, SALT_LENGTH};

mod config;
pub use config::{BodyPolicy, Config};

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::{string_to_sign, RequestSigner};

mod body;
pub use body::canonical_json;

mod spec;
pub use spec::RequestSpec;

mod build;
pub use build::{AssembledRequest, RequestBuilder};

mod client;
pub use client::Client;
