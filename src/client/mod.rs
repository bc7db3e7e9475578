//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, LOCATION, REFERER};
use tracing::debug;
use url::Url;

use crate::domain::{
    ApiCode, ArticleId, ArticleListId, ArticleViewInfo, ArticlesInfo, ServerTime,
    ShortLinkTarget, ValidationError,
};
use crate::transport::{DEFAULT_LIVE_HOST, ShortLinkError, ShortLinkPatterns, TransportError};

const DEFAULT_API_BASE: &str = "https://api.bilibili.com";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const DEFAULT_REFERER: &str = "https://www.bilibili.com";

const NOW_PATH: &str = "/x/report/click/now";
const ARTICLES_INFO_PATH: &str = "/x/article/list/web/articles";
const ARTICLE_VIEW_INFO_PATH: &str = "/x/article/viewinfo";

const HTTP_FOUND: u16 = 302;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    location: Option<String>,
    body: String,
}

/// GET with query parameters. Implementations must not follow redirects.
trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let url = if query.is_empty() {
                Url::parse(url)?
            } else {
                Url::parse_with_params(url, &query)?
            };
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let location = location_header(response.headers());
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                location,
                body,
            })
        })
    }
}

// Kept even when not visible ASCII, so an odd target still shows up in errors.
fn location_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(LOCATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`BiliClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (envelope `code != 0`),
/// - short link failures (no redirect, unknown target),
/// - validation/parse failures.
pub enum BiliError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by an API endpoint.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The API answered with a non-zero envelope `code`.
    #[error("API error: {} {message:?}", .code.as_i64())]
    Api { code: ApiCode, message: String },

    /// A short link answered with something other than `302 Found`.
    #[error("short link did not redirect, status code: {status}")]
    ResolutionFailed { status: u16 },

    /// A short link redirected to a URL that is neither a video nor a live room.
    #[error("cannot classify short link target: {url:?}")]
    UnrecognizedTarget { url: String },

    /// Response body or redirect target could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A builder setting could not be turned into a working client.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<TransportError> for BiliError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Api { code, message } => Self::Api {
                code: ApiCode::new(code),
                message,
            },
            other => Self::Parse(Box::new(other)),
        }
    }
}

impl From<ShortLinkError> for BiliError {
    fn from(err: ShortLinkError) -> Self {
        match err {
            ShortLinkError::UnrecognizedTarget { url } => Self::UnrecognizedTarget { url },
            other => Self::Parse(Box::new(other)),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`BiliClient`].
///
/// Use this when you need to customize the API base URL, the live host, the timeout,
/// or the headers sent with every request.
pub struct BiliClientBuilder {
    api_base: String,
    live_host: String,
    timeout: Option<Duration>,
    user_agent: String,
    referer: String,
}

impl Default for BiliClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BiliClientBuilder {
    /// Create a builder with the public endpoints, a desktop browser user-agent and no timeout.
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            live_host: DEFAULT_LIVE_HOST.to_owned(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            referer: DEFAULT_REFERER.to_owned(),
        }
    }

    /// Override the API base URL (`https://api.bilibili.com`).
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the host whose `live.` subdomain is recognized as a live room
    /// when resolving short links (`bilibili.com`).
    pub fn live_host(mut self, live_host: impl Into<String>) -> Self {
        self.live_host = live_host.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the HTTP `Referer` header.
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    /// Build a [`BiliClient`].
    pub fn build(self) -> Result<BiliClient, BiliError> {
        let patterns = ShortLinkPatterns::new(&self.live_host).map_err(|err| {
            BiliError::InvalidConfig(format!("live host {:?}: {err}", self.live_host))
        })?;

        let referer = HeaderValue::from_str(&self.referer).map_err(|_| {
            BiliError::InvalidConfig(format!("referer {:?} is not a valid header", self.referer))
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, referer);

        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(self.user_agent)
            .default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| BiliError::Transport(Box::new(err)))?;

        Ok(BiliClient {
            api_base: self.api_base,
            patterns,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Bilibili web API client.
///
/// Redirects are never followed, so short links can be inspected. Cloning is
/// cheap and clones share one connection pool.
pub struct BiliClient {
    api_base: String,
    patterns: ShortLinkPatterns,
    http: Arc<dyn HttpTransport>,
}

impl BiliClient {
    /// Create a client with default settings.
    ///
    /// For more customization, use [`BiliClient::builder`].
    pub fn new() -> Result<Self, BiliError> {
        BiliClientBuilder::new().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> BiliClientBuilder {
        BiliClientBuilder::new()
    }

    /// Resolve a short link such as `https://b23.tv/xxxxxxx`.
    ///
    /// Performs exactly one GET and inspects the `Location` of the `302` answer.
    /// A `bvid` anywhere in the target wins over a live room URL.
    ///
    /// Errors:
    /// - [`BiliError::ResolutionFailed`] when the status is not `302`,
    /// - [`BiliError::UnrecognizedTarget`] when the target matches no known pattern
    ///   (a missing `Location` is reported with an empty `url`),
    /// - [`BiliError::Parse`] when the live room id does not fit in `u64`.
    pub async fn resolve_short_url(&self, short_url: &str) -> Result<ShortLinkTarget, BiliError> {
        debug!(url = short_url, "resolving short link");
        let response = self
            .http
            .get(short_url, Vec::new())
            .await
            .map_err(BiliError::Transport)?;

        if response.status != HTTP_FOUND {
            return Err(BiliError::ResolutionFailed {
                status: response.status,
            });
        }

        let target = response.location.unwrap_or_default();
        debug!(url = short_url, target = %target, "short link redirected");
        Ok(self.patterns.classify(&target)?)
    }

    /// Fetch the server clock.
    pub async fn now(&self) -> Result<ServerTime, BiliError> {
        let body = self.get_api(NOW_PATH, Vec::new()).await?;
        Ok(crate::transport::decode_now_json_response(&body)?)
    }

    /// Fetch an article list (`rl<id>`) with its articles and author.
    ///
    /// Errors:
    /// - [`BiliError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`BiliError::Api`] when the envelope `code` is not `0`,
    /// - [`BiliError::Parse`] for malformed payloads.
    pub async fn get_articles_info(&self, id: ArticleListId) -> Result<ArticlesInfo, BiliError> {
        let query = crate::transport::encode_article_list_query(id);
        let body = self.get_api(ARTICLES_INFO_PATH, query).await?;
        Ok(crate::transport::decode_articles_info_json_response(&body)?)
    }

    /// Fetch view details of an article (`cv<id>`).
    ///
    /// Errors are the same as for [`BiliClient::get_articles_info`].
    pub async fn get_article_view_info(
        &self,
        id: ArticleId,
    ) -> Result<ArticleViewInfo, BiliError> {
        let query = crate::transport::encode_article_query(id);
        let body = self.get_api(ARTICLE_VIEW_INFO_PATH, query).await?;
        Ok(crate::transport::decode_article_view_info_json_response(
            &body,
        )?)
    }

    async fn get_api(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<String, BiliError> {
        let url = format!("{}{path}", self.api_base.trim_end_matches('/'));
        debug!(url = %url, ?query, "GET");

        let response = self
            .http
            .get(&url, query)
            .await
            .map_err(BiliError::Transport)?;

        if !(200..=299).contains(&response.status) {
            debug!(url = %url, status = response.status, "unexpected HTTP status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(BiliError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}
