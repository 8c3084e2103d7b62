//! Assemble a signed API-X request and print it.
//!
//! Reads `API_X_API_KEY`, `API_X_APP_KEY`, `API_X_SCHEME`, `API_X_HOST` and
//! friends from the environment.

use apisign_apix::{Config, DefaultCredentialProvider, RequestBuilder, RequestSpec};
use apisign_core::{Context, OsEnv};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let ctx = Context::new().with_env(OsEnv);
    let config = Config::new().from_env(&ctx);

    let builder = RequestBuilder::load(ctx, &DefaultCredentialProvider::new())
        .await?
        .with_config(config);

    let spec = RequestSpec::post("/create")
        .with_entity("/users")
        .with_query("dryRun", "true");
    let req = builder.assemble(&spec, Some(&json!({"name": "alice", "age": 30})))?;

    println!("{} {}", req.method(), req.uri());
    for (k, v) in req.headers() {
        println!("{k}: {}", v.to_str().unwrap_or("<binary>"));
    }
    if let Some(body) = req.body() {
        println!();
        println!("{}", String::from_utf8_lossy(body));
    }

    Ok(())
}
