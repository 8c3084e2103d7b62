mod freshness;
mod standard;

use apisign_apix::{Credential, RequestBuilder};
use apisign_core::hash::{base64_encode, hex_sha256};
use apisign_core::{Context, StaticClock};
use chrono::{DateTime, TimeZone, Utc};

pub const API_KEY: &str = "K";
pub const APP_KEY: &str = "A";

/// Timestamp every fixed clock test signs with.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 2, 12, 7, 52, 0).unwrap()
}

/// Builder against `https://api.example.com:8443` with a clock stopped at `t`.
pub fn init_builder(t: DateTime<Utc>) -> RequestBuilder {
    let _ = env_logger::builder().is_test(true).try_init();

    RequestBuilder::new(Credential::new(API_KEY, APP_KEY))
        .with_context(Context::new().with_clock(StaticClock(t)))
        .with_scheme("https")
        .with_host("api.example.com")
        .with_port(8443)
}

/// Recompute the session id the way the server does.
pub fn expected_session_id(body: Option<&[u8]>, date: &str, salt: Option<&str>) -> String {
    let mut s = body.map(base64_encode).unwrap_or_default();
    s.push_str(APP_KEY);
    s.push_str(date);
    s.push_str(salt.unwrap_or_default());
    hex_sha256(s.as_bytes())
}
