use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use crate::domain::{
    Article, ArticleAuthor, ArticleCategory, ArticleId, ArticleList, ArticleListId, ArticleStats,
    ArticleViewInfo, ArticlesInfo, OfficialVerify, ShareChannel,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CategoryJson {
    id: i64,
    parent_id: i64,
    name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct StatsJson {
    view: u64,
    favorite: u64,
    like: u64,
    dislike: u64,
    reply: u64,
    share: u64,
    coin: u64,
    dynamic: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ArticleJson {
    id: i64,
    title: String,
    state: i64,
    publish_time: i64,
    words: u64,
    image_urls: Vec<String>,
    category: CategoryJson,
    categories: Vec<CategoryJson>,
    summary: String,
    stats: StatsJson,
    like_state: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ArticleListJson {
    id: i64,
    mid: i64,
    name: String,
    image_url: String,
    update_time: i64,
    ctime: i64,
    publish_time: i64,
    summary: String,
    words: u64,
    read: u64,
    articles_count: i64,
    state: i64,
    reason: String,
    apply_time: String,
    check_time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OfficialVerifyJson {
    #[serde(rename = "type")]
    kind: i64,
    desc: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct AuthorJson {
    mid: i64,
    name: String,
    face: String,
    official_verify: OfficialVerifyJson,
}

#[derive(Debug, Clone, Deserialize)]
struct ArticlesInfoJsonResponse {
    #[serde(default)]
    list: ArticleListJson,
    #[serde(default)]
    articles: Vec<ArticleJson>,
    #[serde(default)]
    author: AuthorJson,
    #[serde(default)]
    last: Option<ArticleJson>,
    #[serde(default)]
    attention: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ShareChannelJson {
    name: String,
    picture: String,
    share_channel: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ArticleViewInfoJsonResponse {
    like: i64,
    attention: bool,
    favorite: bool,
    coin: u64,
    stats: StatsJson,
    title: String,
    banner_url: String,
    mid: i64,
    author_name: String,
    is_author: bool,
    image_urls: Vec<String>,
    origin_image_urls: Vec<String>,
    shareable: bool,
    show_later_watch: bool,
    show_small_window: bool,
    in_list: bool,
    pre: i64,
    next: i64,
    share_channels: Vec<ShareChannelJson>,
}

impl From<CategoryJson> for ArticleCategory {
    fn from(value: CategoryJson) -> Self {
        Self {
            id: value.id,
            parent_id: value.parent_id,
            name: value.name,
        }
    }
}

impl From<StatsJson> for ArticleStats {
    fn from(value: StatsJson) -> Self {
        Self {
            view: value.view,
            favorite: value.favorite,
            like: value.like,
            dislike: value.dislike,
            reply: value.reply,
            share: value.share,
            coin: value.coin,
            dynamic: value.dynamic,
        }
    }
}

fn map_article_list(value: ArticleListJson) -> Result<ArticleList, TransportError> {
    let id = ArticleListId::new(value.id)
        .map_err(|_| TransportError::InvalidArticleListId { value: value.id })?;
    Ok(ArticleList {
        id,
        mid: value.mid,
        name: value.name,
        image_url: value.image_url,
        update_time: value.update_time,
        ctime: value.ctime,
        publish_time: value.publish_time,
        summary: value.summary,
        words: value.words,
        read: value.read,
        articles_count: value.articles_count,
        state: value.state,
        reason: value.reason,
        apply_time: value.apply_time,
        check_time: value.check_time,
    })
}

impl From<AuthorJson> for ArticleAuthor {
    fn from(value: AuthorJson) -> Self {
        Self {
            mid: value.mid,
            name: value.name,
            face: value.face,
            official_verify: OfficialVerify {
                kind: value.official_verify.kind,
                desc: value.official_verify.desc,
            },
        }
    }
}

impl From<ShareChannelJson> for ShareChannel {
    fn from(value: ShareChannelJson) -> Self {
        Self {
            name: value.name,
            picture: value.picture,
            share_channel: value.share_channel,
        }
    }
}

fn article_id(value: i64) -> Result<ArticleId, TransportError> {
    ArticleId::new(value).map_err(|_| TransportError::InvalidArticleId { value })
}

// `0` marks "no such article" in `pre`/`next`/`last`.
fn optional_article_id(value: i64) -> Result<Option<ArticleId>, TransportError> {
    if value == 0 {
        return Ok(None);
    }
    article_id(value).map(Some)
}

fn map_article(article: ArticleJson) -> Result<Article, TransportError> {
    Ok(Article {
        id: article_id(article.id)?,
        title: article.title,
        state: article.state,
        publish_time: article.publish_time,
        words: article.words,
        image_urls: article.image_urls,
        category: article.category.into(),
        categories: article.categories.into_iter().map(Into::into).collect(),
        summary: article.summary,
        stats: article.stats.into(),
        like_state: article.like_state,
    })
}

pub fn encode_article_query(id: ArticleId) -> Vec<(String, String)> {
    vec![(ArticleId::FIELD.to_owned(), id.value().to_string())]
}

pub fn encode_article_list_query(id: ArticleListId) -> Vec<(String, String)> {
    vec![(ArticleListId::FIELD.to_owned(), id.value().to_string())]
}

pub fn decode_articles_info_json_response(json: &str) -> Result<ArticlesInfo, TransportError> {
    let parsed: ArticlesInfoJsonResponse = decode_envelope(json)?;
    let articles = parsed
        .articles
        .into_iter()
        .map(map_article)
        .collect::<Result<Vec<_>, _>>()?;
    let last = match parsed.last {
        Some(last) if last.id != 0 => Some(map_article(last)?),
        _ => None,
    };

    Ok(ArticlesInfo {
        list: map_article_list(parsed.list)?,
        articles,
        author: parsed.author.into(),
        last,
        attention: parsed.attention,
    })
}

pub fn decode_article_view_info_json_response(
    json: &str,
) -> Result<ArticleViewInfo, TransportError> {
    let parsed: ArticleViewInfoJsonResponse = decode_envelope(json)?;
    Ok(ArticleViewInfo {
        like: parsed.like,
        attention: parsed.attention,
        favorite: parsed.favorite,
        coin: parsed.coin,
        stats: parsed.stats.into(),
        title: parsed.title,
        banner_url: parsed.banner_url,
        mid: parsed.mid,
        author_name: parsed.author_name,
        is_author: parsed.is_author,
        image_urls: parsed.image_urls,
        origin_image_urls: parsed.origin_image_urls,
        shareable: parsed.shareable,
        show_later_watch: parsed.show_later_watch,
        show_small_window: parsed.show_small_window,
        in_list: parsed.in_list,
        pre: optional_article_id(parsed.pre)?,
        next: optional_article_id(parsed.next)?,
        share_channels: parsed.share_channels.into_iter().map(Into::into).collect(),
    })
}
