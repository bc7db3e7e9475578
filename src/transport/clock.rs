use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use crate::domain::ServerTime;

#[derive(Debug, Clone, Deserialize)]
struct NowJsonResponse {
    now: i64,
}

pub fn decode_now_json_response(json: &str) -> Result<ServerTime, TransportError> {
    let parsed: NowJsonResponse = decode_envelope(json)?;
    Ok(ServerTime::new(parsed.now))
}
