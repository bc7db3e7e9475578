use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBvidLength {
        input: String,
        expected: usize,
        actual: usize,
    },
    InvalidBvidCharacter {
        input: String,
        position: usize,
    },
    NonPositiveId {
        field: &'static str,
        actual: i64,
    },
}

impl ValidationError {
    /// Returns `true` for errors raised on a malformed `bvid`.
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            self,
            Self::InvalidBvidLength { .. } | Self::InvalidBvidCharacter { .. }
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBvidLength {
                input,
                expected,
                actual,
            } => write!(
                f,
                "invalid bvid {input:?}: length {actual} (expected {expected})"
            ),
            Self::InvalidBvidCharacter { input, position } => {
                write!(f, "invalid bvid {input:?}: bad character at position {position}")
            }
            Self::NonPositiveId { field, actual } => {
                write!(f, "{field} must be positive, got {actual}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::InvalidBvidLength {
            input: "BV1".to_owned(),
            expected: 12,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid bvid \"BV1\": length 3 (expected 12)"
        );

        let err = ValidationError::InvalidBvidCharacter {
            input: "BV1xx411c7m0".to_owned(),
            position: 11,
        };
        assert_eq!(
            err.to_string(),
            "invalid bvid \"BV1xx411c7m0\": bad character at position 11"
        );

        let err = ValidationError::NonPositiveId {
            field: "id",
            actual: 0,
        };
        assert_eq!(err.to_string(), "id must be positive, got 0");
    }

    #[test]
    fn invalid_format_covers_bvid_errors_only() {
        assert!(
            ValidationError::InvalidBvidLength {
                input: String::new(),
                expected: 12,
                actual: 0,
            }
            .is_invalid_format()
        );
        assert!(
            ValidationError::InvalidBvidCharacter {
                input: String::new(),
                position: 3,
            }
            .is_invalid_format()
        );
        assert!(
            !ValidationError::NonPositiveId {
                field: "id",
                actual: -1,
            }
            .is_invalid_format()
        );
    }
}
