use crate::domain::value::{ArticleId, ArticleListId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Where a short link (`b23.tv/...`) points to.
pub enum ShortLinkTarget {
    /// A video page; `bvid` is the token as it appeared in the target URL.
    Video { bvid: String },
    /// A live room on `live.<host>`.
    Live { room_id: u64 },
}

impl ShortLinkTarget {
    /// Short tag of the target kind: `"bvid"` or `"live"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Video { .. } => "bvid",
            Self::Live { .. } => "live",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleCategory {
    pub id: i64,
    pub parent_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleStats {
    pub view: u64,
    pub favorite: u64,
    pub like: u64,
    pub dislike: u64,
    pub reply: u64,
    pub share: u64,
    pub coin: u64,
    /// Number of reposts as dynamics.
    pub dynamic: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Always `0` in observed responses; meaning undocumented.
    pub state: i64,
    /// Unix seconds.
    pub publish_time: i64,
    pub words: u64,
    pub image_urls: Vec<String>,
    pub category: ArticleCategory,
    pub categories: Vec<ArticleCategory>,
    pub summary: String,
    pub stats: ArticleStats,
    pub like_state: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Overview of an article list.
///
/// `articles_count`, `state`, `reason`, `apply_time` and `check_time` are
/// passed through verbatim; their meaning is undocumented.
pub struct ArticleList {
    pub id: ArticleListId,
    pub mid: i64,
    pub name: String,
    pub image_url: String,
    pub update_time: i64,
    pub ctime: i64,
    pub publish_time: i64,
    pub summary: String,
    pub words: u64,
    pub read: u64,
    pub articles_count: i64,
    pub state: i64,
    pub reason: String,
    pub apply_time: String,
    pub check_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OfficialVerify {
    /// `-1` when the account is not verified.
    pub kind: i64,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleAuthor {
    pub mid: i64,
    pub name: String,
    pub face: String,
    pub official_verify: OfficialVerify,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response of `x/article/list/web/articles`.
pub struct ArticlesInfo {
    pub list: ArticleList,
    pub articles: Vec<Article>,
    pub author: ArticleAuthor,
    pub last: Option<Article>,
    /// Whether the current session follows the list author.
    pub attention: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareChannel {
    pub name: String,
    pub picture: String,
    /// Channel code such as `QQ`, `WEIXIN` or `SINA`.
    pub share_channel: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response of `x/article/viewinfo`.
///
/// `is_author`, `shareable`, `show_later_watch` and `show_small_window` are
/// passed through verbatim; their meaning is undocumented.
pub struct ArticleViewInfo {
    /// `1` if the current session liked the article.
    pub like: i64,
    pub attention: bool,
    pub favorite: bool,
    /// Coins given by the current session.
    pub coin: u64,
    pub stats: ArticleStats,
    pub title: String,
    pub banner_url: String,
    pub mid: i64,
    pub author_name: String,
    pub is_author: bool,
    pub image_urls: Vec<String>,
    pub origin_image_urls: Vec<String>,
    pub shareable: bool,
    pub show_later_watch: bool,
    pub show_small_window: bool,
    pub in_list: bool,
    /// Previous article in the list, if any.
    pub pre: Option<ArticleId>,
    /// Next article in the list, if any.
    pub next: Option<ArticleId>,
    pub share_channels: Vec<ShareChannel>,
}
