use std::time::Duration;

use biliapi::BiliClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = BiliClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let now = client.now().await?;

    println!("unix seconds: {}", now.unix_seconds());

    Ok(())
}
