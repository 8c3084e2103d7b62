use super::{expected_session_id, fixed_time, init_builder, API_KEY};
use anyhow::Result;
use apisign_apix::RequestSpec;
use apisign_core::ErrorKind;
use http::header::{ACCEPT, CONTENT_TYPE, DATE};
use http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_post_with_query_and_body() -> Result<()> {
    let builder = init_builder(fixed_time());

    let req = builder.post(
        Some("/entity"),
        "/method",
        &[("param1", "value1")],
        Some(&json!({"bodyParam1": "value1"})),
    )?;

    assert_eq!(req.method(), &Method::POST);
    assert_eq!(
        req.uri().to_string(),
        "https://api.example.com:8443/entity/method?param1=value1&api_key=K&app_session_id=36eeebddb2a6edeae2185260e299827c98330c50607dc684c71ecdaa8fb036d2"
    );
    assert_eq!(req.headers()[DATE], "Sat, 12 Feb 2022 07:52:00 GMT");
    assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(req.headers()[ACCEPT], "application/json");
    assert!(req.headers().get("salt").is_none());
    assert_eq!(
        req.body().map(|b| &b[..]),
        Some(&br#"{"bodyParam1":"value1"}"#[..])
    );
    assert_eq!(
        req.session_id(),
        expected_session_id(req.body().map(|b| &b[..]), req.date(), None)
    );
    Ok(())
}

#[test]
fn test_body_key_order_does_not_change_session() -> Result<()> {
    let builder = init_builder(fixed_time());

    let a = builder.post(None, "/method", &[], Some(&json!({"b": "2", "a": "1"})))?;
    let b = builder.post(None, "/method", &[], Some(&json!({"a": "1", "b": "2"})))?;

    assert_eq!(a.session_id(), b.session_id());
    assert_eq!(a.body(), b.body());
    Ok(())
}

#[test]
fn test_caller_cannot_override_reserved_query() -> Result<()> {
    let builder = init_builder(fixed_time());

    let spec = RequestSpec::get("/method")
        .with_entity("/entity")
        .with_query("api_key", "spoofed")
        .with_query("app_session_id", "spoofed");
    let req = builder.assemble::<serde_json::Value>(&spec, None)?;

    let query = req.uri().query().unwrap_or_default();
    assert!(!query.contains("spoofed"), "{query}");
    assert_eq!(query.matches("api_key=").count(), 1, "{query}");
    assert_eq!(query.matches("app_session_id=").count(), 1, "{query}");
    assert!(query.contains(&format!("api_key={API_KEY}")), "{query}");
    Ok(())
}

#[test]
fn test_get_without_body() -> Result<()> {
    let builder = init_builder(fixed_time());

    let req = builder.get(None, "/method", &[])?;
    assert!(req.body().is_none());
    assert_eq!(
        req.session_id(),
        "36f144b64f63a94594108ab11b65d950e15ddb0d75e5fee1c6ba43693cdd88c9"
    );

    let http_req = req.into_http_request();
    assert_eq!(http_req.uri().path(), "/method");
    assert!(http_req.body().is_empty());
    Ok(())
}

#[test]
fn test_missing_host() {
    let builder = init_builder(fixed_time()).with_config(Default::default());

    let err = builder.get(Some("/entity"), "/method", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(err.is_construction_error());
}
