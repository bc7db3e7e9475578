//! Transport layer: JSON envelope, per-endpoint wire formats, and redirect target parsing.

mod article;
mod clock;
mod envelope;
mod short_link;

pub use article::{
    decode_article_view_info_json_response, decode_articles_info_json_response,
    encode_article_list_query, encode_article_query,
};
pub use clock::decode_now_json_response;
pub use envelope::TransportError;
pub use short_link::{DEFAULT_LIVE_HOST, ShortLinkError, ShortLinkPatterns};
