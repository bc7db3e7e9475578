use std::io;

use biliapi::{ArticleId, BiliClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cvid = std::env::var("BILI_CVID")
        .ok()
        .and_then(|value| value.trim_start_matches("cv").parse::<i64>().ok())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "BILI_CVID environment variable is required (e.g. cv10000)",
            )
        })?;

    let client = BiliClient::new()?;
    let info = client.get_article_view_info(ArticleId::new(cvid)?).await?;

    println!(
        "title: {:?}, author: {:?}, views: {}, likes: {}, pre: {:?}, next: {:?}",
        info.title,
        info.author_name,
        info.stats.view,
        info.stats.like,
        info.pre.map(ArticleId::value),
        info.next.map(ArticleId::value)
    );

    Ok(())
}
