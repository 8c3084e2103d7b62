use super::{expected_session_id, fixed_time, init_builder};
use anyhow::Result;
use apisign_core::{Context, OsRandom, StaticClock, SystemClock};
use chrono::Duration;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_different_time_different_session() -> Result<()> {
    let body = json!({"bodyParam1": "value1"});

    let first = init_builder(fixed_time()).post(None, "/method", &[], Some(&body))?;
    let second = init_builder(fixed_time() + Duration::seconds(1)).post(
        None,
        "/method",
        &[],
        Some(&body),
    )?;

    assert_ne!(first.date(), second.date());
    assert_ne!(first.session_id(), second.session_id());
    Ok(())
}

#[test]
fn test_salted_requests_differ_within_one_second() -> Result<()> {
    let builder = init_builder(fixed_time())
        .with_salt(true)
        .with_context(
            Context::new()
                .with_clock(StaticClock(fixed_time()))
                .with_random(OsRandom),
        );

    let first = builder.get(None, "/method", &[])?;
    let second = builder.get(None, "/method", &[])?;

    assert_eq!(first.date(), second.date());
    assert_ne!(first.salt(), second.salt());
    assert_ne!(first.session_id(), second.session_id());

    for req in [&first, &second] {
        let salt = req.salt().expect("salted request must carry a salt");
        assert_eq!(req.headers()["salt"], salt);
        assert_eq!(
            req.session_id(),
            expected_session_id(None, req.date(), Some(salt))
        );
    }
    Ok(())
}

#[test]
fn test_system_clock_date_header() -> Result<()> {
    let builder = init_builder(fixed_time())
        .with_context(Context::new().with_clock(SystemClock));

    let req = builder.get(None, "/method", &[])?;
    let date = apisign_core::time::parse_http_date(req.date())?;
    let drift = (chrono::Utc::now() - date).num_seconds().abs();
    assert!(drift < 60, "date header {} is {drift}s off", req.date());
    Ok(())
}
