use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("response has no data payload")]
    MissingData,

    #[error("response contains invalid article id: {value}")]
    InvalidArticleId { value: i64 },

    #[error("response contains invalid article list id: {value}")]
    InvalidArticleListId { value: i64 },
}

/// `{"code": 0, "message": "0", "ttl": 1, "data": {...}}`
#[derive(Debug, Deserialize)]
struct EnvelopeJson {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<Box<RawValue>>,
}

/// Unwrap the common response envelope and parse its `data` payload as `T`.
///
/// A non-zero `code` is reported as [`TransportError::Api`] before the payload
/// is looked at, since failed calls usually carry `"data": null`.
pub fn decode_envelope<T>(json: &str) -> Result<T, TransportError>
where
    T: DeserializeOwned,
{
    let envelope: EnvelopeJson = serde_json::from_str(json)?;
    if envelope.code != 0 {
        return Err(TransportError::Api {
            code: envelope.code,
            message: envelope.message,
        });
    }
    let data = envelope.data.ok_or(TransportError::MissingData)?;
    Ok(serde_json::from_str(data.get())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        now: i64,
    }

    #[test]
    fn decode_envelope_returns_payload_on_success() {
        let json = r#"{"code":0,"message":"0","ttl":1,"data":{"now":1700000000}}"#;
        let parsed: Payload = decode_envelope(json).unwrap();
        assert_eq!(parsed.now, 1_700_000_000);
    }

    #[test]
    fn decode_envelope_maps_non_zero_code_to_api_error() {
        let json = r#"{"code":-404,"message":"啥都木有","ttl":1,"data":null}"#;
        let err = decode_envelope::<Payload>(json).unwrap_err();
        match err {
            TransportError::Api { code, message } => {
                assert_eq!(code, -404);
                assert_eq!(message, "啥都木有");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_envelope_requires_data_on_success() {
        let json = r#"{"code":0,"message":"0","data":null}"#;
        let err = decode_envelope::<Payload>(json).unwrap_err();
        assert!(matches!(err, TransportError::MissingData));

        let json = r#"{"code":0,"message":"0"}"#;
        let err = decode_envelope::<Payload>(json).unwrap_err();
        assert!(matches!(err, TransportError::MissingData));
    }

    #[test]
    fn decode_envelope_reports_invalid_json() {
        let err = decode_envelope::<Payload>("<html>").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));

        let json = r#"{"code":0,"data":{"now":"soon"}}"#;
        let err = decode_envelope::<Payload>(json).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
