use anyhow::Result;
use apisign_core::Context;
use apisign_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("apisign-example/1.0")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let url = "http://httpbin.org/get";
    println!("GET {url}");

    let req = http::Request::builder()
        .method("GET")
        .uri(url)
        .header("X-Test-Header", "apisign-example")
        .body(Bytes::new())?;

    match ctx.http_send(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            for (name, value) in resp.headers() {
                println!("  {name}: {value:?}");
            }
        }
        Err(e) => eprintln!("Request failed: {e}"),
    }

    Ok(())
}
