use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Article id (`cvid`), as in `https://www.bilibili.com/read/cv<id>`.
///
/// Invariant: strictly positive.
pub struct ArticleId(u64);

impl ArticleId {
    /// Query parameter name used by the article endpoints (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`ArticleId`].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        positive(Self::FIELD, value).map(Self)
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Article list (collection) id (`rlid`), as in `https://www.bilibili.com/read/readlist/rl<id>`.
///
/// Invariant: strictly positive.
pub struct ArticleListId(u64);

impl ArticleListId {
    /// Query parameter name used by the article list endpoint (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`ArticleListId`].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        positive(Self::FIELD, value).map(Self)
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

fn positive(field: &'static str, value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value)
        .ok()
        .filter(|it| *it > 0)
        .ok_or(ValidationError::NonPositiveId {
            field,
            actual: value,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server clock reading returned by `x/report/click/now`, in Unix seconds.
pub struct ServerTime(i64);

impl ServerTime {
    /// Create a timestamp value (no range validation is performed).
    pub fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Get the underlying timestamp in seconds.
    pub fn unix_seconds(self) -> i64 {
        self.0
    }

    /// Convert to [`SystemTime`]. Negative values map to instants before the epoch.
    pub fn to_system_time(self) -> SystemTime {
        let offset = Duration::from_secs(self.0.unsigned_abs());
        if self.0 >= 0 {
            UNIX_EPOCH + offset
        } else {
            UNIX_EPOCH - offset
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Top-level `code` of the JSON envelope.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ApiCode(i64);

impl ApiCode {
    /// Construct a code from its integer representation.
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    /// Get the integer code as returned by the API.
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Returns `true` for `0`, the only success code.
    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known_kind(self) -> Option<KnownApiCode> {
        KnownApiCode::from_code(self.0)
    }

    /// Returns `true` if the server asked the caller to back off.
    ///
    /// The client itself never retries; this is a hint for callers.
    pub fn is_retryable(self) -> bool {
        matches!(self.known_kind(), Some(kind) if kind.is_retryable())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Generic envelope codes shared by every `api.bilibili.com` endpoint.
pub enum KnownApiCode {
    Success,
    NotLoggedIn,
    RiskControl,
    BadRequest,
    AccessDenied,
    NotFound,
    RequestIntercepted,
    ServerOverloaded,
    TooFrequent,
}

impl KnownApiCode {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::Success,
            -101 => Self::NotLoggedIn,
            -352 => Self::RiskControl,
            -400 => Self::BadRequest,
            -403 => Self::AccessDenied,
            -404 => Self::NotFound,
            -412 => Self::RequestIntercepted,
            -509 => Self::ServerOverloaded,
            -799 => Self::TooFrequent,
            _ => return None,
        })
    }

    /// The integer code for this variant.
    pub fn code(self) -> i64 {
        match self {
            Self::Success => 0,
            Self::NotLoggedIn => -101,
            Self::RiskControl => -352,
            Self::BadRequest => -400,
            Self::AccessDenied => -403,
            Self::NotFound => -404,
            Self::RequestIntercepted => -412,
            Self::ServerOverloaded => -509,
            Self::TooFrequent => -799,
        }
    }

    fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::RequestIntercepted | Self::ServerOverloaded | Self::TooFrequent
        )
    }
}
