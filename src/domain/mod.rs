//! Domain layer: strong types, the `av`/`bv` codec, and invariants (no I/O).

pub mod id;
mod response;
mod validation;
mod value;

pub use id::{BVID_LEN, MAX_AID, av_to_bv, bv_to_av};
pub use response::{
    Article, ArticleAuthor, ArticleCategory, ArticleList, ArticleStats, ArticleViewInfo,
    ArticlesInfo, OfficialVerify, ShareChannel, ShortLinkTarget,
};
pub use validation::ValidationError;
pub use value::{ApiCode, ArticleId, ArticleListId, KnownApiCode, ServerTime};

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;

    #[test]
    fn article_ids_reject_non_positive() {
        assert!(matches!(
            ArticleId::new(0),
            Err(ValidationError::NonPositiveId {
                field: ArticleId::FIELD,
                actual: 0
            })
        ));
        assert!(ArticleId::new(-5).is_err());
        assert_eq!(ArticleId::new(10_000).unwrap().value(), 10_000);

        assert!(ArticleListId::new(0).is_err());
        assert_eq!(ArticleListId::new(207_146).unwrap().value(), 207_146);
    }

    #[test]
    fn server_time_converts_to_system_time() {
        let time = ServerTime::new(1_700_000_000);
        assert_eq!(time.unix_seconds(), 1_700_000_000);
        assert_eq!(
            time.to_system_time(),
            UNIX_EPOCH + Duration::from_secs(1_700_000_000)
        );
        assert_eq!(
            ServerTime::new(-60).to_system_time(),
            UNIX_EPOCH - Duration::from_secs(60)
        );
    }

    #[test]
    fn api_code_known_mapping() {
        assert!(ApiCode::new(0).is_success());
        assert_eq!(ApiCode::new(0).known_kind(), Some(KnownApiCode::Success));
        assert_eq!(ApiCode::new(-404).known_kind(), Some(KnownApiCode::NotFound));
        assert_eq!(ApiCode::new(12_345).known_kind(), None);
        assert_eq!(KnownApiCode::RequestIntercepted.code(), -412);
    }

    #[test]
    fn api_code_retry_hint_covers_throttling_codes() {
        assert!(ApiCode::new(-412).is_retryable());
        assert!(ApiCode::new(-509).is_retryable());
        assert!(ApiCode::new(-799).is_retryable());
        assert!(!ApiCode::new(-404).is_retryable());
        assert!(!ApiCode::new(7).is_retryable());
    }

    #[test]
    fn short_link_target_kind_tags() {
        let video = ShortLinkTarget::Video {
            bvid: "BV17x411w7KC".to_owned(),
        };
        assert_eq!(video.kind(), "bvid");
        assert_eq!(ShortLinkTarget::Live { room_id: 1 }.kind(), "live");
    }
}
