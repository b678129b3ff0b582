//! The `{code, data, msg}` wrapper around every Kaiascan response.

use crate::error::{ApiError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A successfully decoded response.
///
/// Only envelopes with `code == 0` are ever handed out; anything else becomes
/// [`Error::Api`](crate::Error::Api).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    pub data: T,
    #[serde(rename = "msg")]
    pub message: String,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiEnvelope<U> {
        ApiEnvelope {
            code: self.code,
            data: f(self.data),
            message: self.message,
        }
    }
}

/// Envelope as it comes off the wire, payload still undecoded.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    code: i64,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(default)]
    msg: String,
}

/// Decodes a response body.
///
/// Failure is two-phase: a body that is not JSON, or lacks an integer `code`,
/// is [`Error::Decode`](crate::Error::Decode); a well-formed envelope with a
/// non-zero `code` is [`Error::Api`](crate::Error::Api) and its `data` is never
/// looked at. Only then is `data` decoded into `T`, which may again fail with
/// [`Error::Decode`](crate::Error::Decode).
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<ApiEnvelope<T>> {
    let raw: RawEnvelope = serde_json::from_slice(body)?;
    log::debug!("envelope code={} msg={:?}", raw.code, raw.msg);

    if raw.code != 0 {
        log::warn!("API error! code: {}, message: {}", raw.code, raw.msg);
        return Err(ApiError {
            code: raw.code,
            message: raw.msg,
        }
        .into());
    }

    let data = serde_json::from_value(raw.data)?;
    Ok(ApiEnvelope {
        code: raw.code,
        data,
        message: raw.msg,
    })
}
