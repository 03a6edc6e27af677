// Response envelope handling.
// Classifies error-shaped bodies and unwraps the `data` wrapper around results.

use serde_json::Value;

use crate::error::{CatalogError, Result};

/// Turn a decoded response body into its payload, or an API error.
///
/// A `message` field always wins, even on a 200 response. Otherwise a `code`
/// other than 200 fails with the body's `status`. Successful payloads nested
/// under `data` are lifted one level.
pub fn classify(body: Value) -> Result<Value> {
    if let Some(message) = body.get("message") {
        return Err(CatalogError::Api(text(message)));
    }

    if let Some(code) = body.get("code").filter(|code| !code.is_null()) {
        if code.as_f64() != Some(200.0) {
            let status = body
                .get("status")
                .map(text)
                .unwrap_or_else(|| format!("request failed with code {}", text(code)));
            return Err(CatalogError::Api(status));
        }
    }

    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            Ok(map.remove("data").unwrap_or(Value::Null))
        }
        other => Ok(other),
    }
}

/// Take the `results` field out of an unwrapped payload.
pub fn results(payload: Value) -> Result<Value> {
    match payload {
        Value::Object(mut map) => map
            .remove("results")
            .ok_or_else(|| CatalogError::Api("response is missing `results`".to_string())),
        _ => Err(CatalogError::Api(
            "response payload is not an object".to_string(),
        )),
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
