// src/services/normalizer.rs
use serde_json::Value;

use crate::message::NormalizedPayload;

/// Coerce a raw upstream body into the canonical `{text, content}`
/// shape. Total: malformed or unexpected output degrades to the raw
/// body as `text`, it never fails the request.
///
/// The upstream output format depends on how the flow graph was
/// authored, so nothing about it is guaranteed.
pub fn normalize(raw: &str) -> NormalizedPayload {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
        // A non-string `text` value counts as absent; we do not invent
        // a coercion for it.
        let text = match map.get("text") {
            Some(Value::String(s)) => s.clone(),
            _ => raw.to_string(),
        };
        let content = map.get("content").cloned().unwrap_or(Value::Null);
        return NormalizedPayload { text, content };
    }

    tracing::debug!("upstream body is not a JSON object, passing it through as text");
    NormalizedPayload {
        text: raw.to_string(),
        content: Value::Null,
    }
}
