use std::num::ParseIntError;

use regex::Regex;

use crate::domain::ShortLinkTarget;

/// Host whose `live.` subdomain serves live rooms.
pub const DEFAULT_LIVE_HOST: &str = "bilibili.com";

#[derive(Debug, thiserror::Error)]
pub enum ShortLinkError {
    #[error("cannot classify short link target: {url:?}")]
    UnrecognizedTarget { url: String },

    #[error("invalid live room id {digits:?}: {source}")]
    InvalidRoomId {
        digits: String,
        #[source]
        source: ParseIntError,
    },
}

/// Patterns used to classify the `Location` a short link redirects to.
#[derive(Debug, Clone)]
pub struct ShortLinkPatterns {
    bvid: Regex,
    live: Regex,
}

impl ShortLinkPatterns {
    pub fn new(live_host: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            bvid: Regex::new(r"(?i-u)bv[0-9a-z]{10}")?,
            live: Regex::new(&format!(
                r"^https://live\.{}/([0-9]+)",
                regex::escape(live_host)
            ))?,
        })
    }

    /// Classify a redirect target.
    ///
    /// A `bvid` anywhere in the URL wins over a live room URL.
    pub fn classify(&self, target: &str) -> Result<ShortLinkTarget, ShortLinkError> {
        if let Some(found) = self.bvid.find(target) {
            return Ok(ShortLinkTarget::Video {
                bvid: found.as_str().to_owned(),
            });
        }

        if let Some(digits) = self.live.captures(target).and_then(|caps| caps.get(1)) {
            let digits = digits.as_str();
            let room_id = digits
                .parse::<u64>()
                .map_err(|source| ShortLinkError::InvalidRoomId {
                    digits: digits.to_owned(),
                    source,
                })?;
            return Ok(ShortLinkTarget::Live { room_id });
        }

        Err(ShortLinkError::UnrecognizedTarget {
            url: target.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> ShortLinkPatterns {
        ShortLinkPatterns::new(DEFAULT_LIVE_HOST).unwrap()
    }

    #[test]
    fn classify_extracts_bvid_anywhere_in_url() {
        let target = patterns()
            .classify("https://www.bilibili.com/video/BV17x411w7KC?p=1&share_source=copy")
            .unwrap();
        assert_eq!(
            target,
            ShortLinkTarget::Video {
                bvid: "BV17x411w7KC".to_owned()
            }
        );
    }

    #[test]
    fn classify_keeps_bvid_case_as_found() {
        let target = patterns()
            .classify("https://m.bilibili.com/video/bv17x411w7KC")
            .unwrap();
        assert_eq!(
            target,
            ShortLinkTarget::Video {
                bvid: "bv17x411w7KC".to_owned()
            }
        );
    }

    #[test]
    fn classify_parses_live_room() {
        let target = patterns()
            .classify("https://live.bilibili.com/21452505?broadcast_type=0")
            .unwrap();
        assert_eq!(target, ShortLinkTarget::Live { room_id: 21_452_505 });
    }

    #[test]
    fn classify_honors_custom_live_host() {
        let patterns = ShortLinkPatterns::new("example.com").unwrap();
        let target = patterns
            .classify("https://live.example.com/12345?ref=x")
            .unwrap();
        assert_eq!(target, ShortLinkTarget::Live { room_id: 12_345 });

        assert!(
            patterns
                .classify("https://live.bilibili.com/12345")
                .is_err()
        );
    }

    #[test]
    fn classify_live_pattern_is_anchored_and_literal() {
        let patterns = patterns();
        assert!(matches!(
            patterns.classify("https://evil.test/?next=https://live.bilibili.com/1"),
            Err(ShortLinkError::UnrecognizedTarget { .. })
        ));
        assert!(matches!(
            patterns.classify("https://liveXbilibili.com/1"),
            Err(ShortLinkError::UnrecognizedTarget { .. })
        ));
        assert!(matches!(
            patterns.classify("http://live.bilibili.com/1"),
            Err(ShortLinkError::UnrecognizedTarget { .. })
        ));
    }

    #[test]
    fn classify_prefers_bvid_over_live() {
        let target = patterns()
            .classify("https://live.bilibili.com/12345?from=BV17x411w7KC")
            .unwrap();
        assert_eq!(target.kind(), "bvid");
    }

    #[test]
    fn classify_room_id_stops_at_non_ascii_digits() {
        let patterns = patterns();
        let target = patterns
            .classify("https://live.bilibili.com/123\u{0664}")
            .unwrap();
        assert_eq!(target, ShortLinkTarget::Live { room_id: 123 });

        let err = patterns
            .classify("https://live.bilibili.com/\u{0661}\u{0662}")
            .unwrap_err();
        assert!(matches!(err, ShortLinkError::UnrecognizedTarget { .. }));
    }

    #[test]
    fn classify_bvid_requires_ascii_alphanumerics() {
        // KELVIN SIGN and LONG S case-fold to `k` and `s` under Unicode rules.
        let patterns = patterns();
        for url in [
            "https://www.bilibili.com/video/BV17x411w7\u{212A}C",
            "https://www.bilibili.com/video/BV1\u{017F}L411x7Y3",
        ] {
            let err = patterns.classify(url).unwrap_err();
            assert!(
                matches!(err, ShortLinkError::UnrecognizedTarget { .. }),
                "{url}"
            );
        }
    }

    #[test]
    fn classify_reports_room_id_overflow() {
        let err = patterns()
            .classify("https://live.bilibili.com/99999999999999999999999")
            .unwrap_err();
        assert!(matches!(err, ShortLinkError::InvalidRoomId { .. }));
    }

    #[test]
    fn classify_rejects_unknown_targets() {
        let err = patterns()
            .classify("https://www.bilibili.com/read/cv10000")
            .unwrap_err();
        match err {
            ShortLinkError::UnrecognizedTarget { url } => {
                assert_eq!(url, "https://www.bilibili.com/read/cv10000");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
