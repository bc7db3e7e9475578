use std::io;

use biliapi::{BiliClient, ShortLinkTarget};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let short_url = std::env::var("BILI_SHORT_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BILI_SHORT_URL environment variable is required",
        )
    })?;

    let client = BiliClient::new()?;
    match client.resolve_short_url(&short_url).await? {
        ShortLinkTarget::Video { bvid } => {
            println!("kind: bvid, bvid: {bvid}, aid: {}", biliapi::bv_to_av(&bvid)?);
        }
        ShortLinkTarget::Live { room_id } => println!("kind: live, room_id: {room_id}"),
    }

    Ok(())
}
