//! Normalization of the response wrappers the API uses inconsistently.
//!
//! Collections arrive as a bare array, as `{ "<resource>": [...] }` or as
//! `{ "data": [...] }`; single resources arrive bare or wrapped the same way.
//! Everything past this module sees the payload only.

use crate::errors::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pull the array payload out of a collection response
pub fn collection<T: DeserializeOwned>(endpoint: &str, body: Value, key: &str) -> ApiResult<Vec<T>> {
    let items = match body {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let inner = map.remove(key).or_else(|| map.remove("data"));
            match inner {
                Some(Value::Array(items)) => items,
                Some(Value::Null) => return Ok(Vec::new()),
                _ => {
                    return Err(ApiError::Envelope {
                        endpoint: endpoint.to_string(),
                        expected: "an array, or an object wrapping one",
                    })
                }
            }
        }
        _ => {
            return Err(ApiError::Envelope {
                endpoint: endpoint.to_string(),
                expected: "an array, or an object wrapping one",
            })
        }
    };

    serde_json::from_value(Value::Array(items)).map_err(|e| ApiError::decode(endpoint, e))
}

/// Pull a single resource out of a detail response
pub fn resource<T: DeserializeOwned>(endpoint: &str, body: Value, key: &str) -> ApiResult<T> {
    let payload = match body {
        Value::Object(mut map) => {
            let wrapper = [key, "data"]
                .into_iter()
                .find(|k| map.get(*k).is_some_and(Value::is_object));
            match wrapper.and_then(|k| map.remove(k)) {
                Some(inner) => inner,
                None => Value::Object(map),
            }
        }
        _ => {
            return Err(ApiError::Envelope {
                endpoint: endpoint.to_string(),
                expected: "an object",
            })
        }
    };

    serde_json::from_value(payload).map_err(|e| ApiError::decode(endpoint, e))
}
