//! Typed Rust client for the Bilibili web API.
//!
//! The crate is split into a domain layer of strong types (including the
//! offline `av`/`bv` id codec), a transport layer for wire-format quirks, and a
//! small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use biliapi::{BiliClient, ShortLinkTarget, bv_to_av};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), biliapi::BiliError> {
//!     let client = BiliClient::new()?;
//!     match client.resolve_short_url("https://b23.tv/xxxxxxx").await? {
//!         ShortLinkTarget::Video { bvid } => println!("av{}", bv_to_av(&bvid)?),
//!         ShortLinkTarget::Live { room_id } => println!("live room {room_id}"),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{BiliClient, BiliClientBuilder, BiliError};
pub use domain::{
    ApiCode, Article, ArticleAuthor, ArticleCategory, ArticleId, ArticleList, ArticleListId,
    ArticleStats, ArticleViewInfo, ArticlesInfo, BVID_LEN, KnownApiCode, MAX_AID, OfficialVerify,
    ServerTime, ShareChannel, ShortLinkTarget, ValidationError, av_to_bv, bv_to_av,
};
