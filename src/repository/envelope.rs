//! Unwrapping of the `{code, data, msg}` envelope every API response uses.

use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::repository::errors::{RepositoryError, RepositoryResult};

const GENERIC_FAILURE: &str = "Request failed";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: i64,
    data: Option<T>,
    #[serde(default)]
    msg: String,
}

/// Turns a raw HTTP status and body into the envelope's `data`.
///
/// Non-2xx statuses fail with the body's `msg`/`message` when present, else
/// with the status code. A non-zero `code` fails with `msg`.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> RepositoryResult<T> {
    match decode_with(status, body)? {
        Some(data) => Ok(data),
        None => Err(RepositoryError::Decode(
            "envelope carries no data".to_string(),
        )),
    }
}

/// Like [`decode_envelope`] for endpoints whose `data` is irrelevant.
pub fn decode_ack(status: u16, body: &[u8]) -> RepositoryResult<()> {
    decode_with::<IgnoredAny>(status, body).map(|_| ())
}

fn decode_with<T: DeserializeOwned>(status: u16, body: &[u8]) -> RepositoryResult<Option<T>> {
    if !(200..300).contains(&status) {
        return Err(RepositoryError::Http {
            status,
            message: http_failure_message(status, body),
        });
    }

    let envelope: Envelope<T> = serde_json::from_slice(body)?;

    if envelope.code != 0 {
        let message = if envelope.msg.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            envelope.msg
        };
        return Err(RepositoryError::Business {
            code: envelope.code,
            message,
        });
    }

    Ok(envelope.data)
}

fn http_failure_message(status: u16, body: &[u8]) -> String {
    let parsed: Option<Value> = serde_json::from_slice(body).ok();
    parsed
        .as_ref()
        .and_then(|body| {
            ["msg", "message"]
                .into_iter()
                .filter_map(|key| body.get(key).and_then(Value::as_str))
                .find(|msg| !msg.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("{GENERIC_FAILURE}: {status}"))
}
