// src/services/session.rs
use uuid::Uuid;

/// Resolve the session id for an upstream call.
///
/// A caller-supplied non-empty id passes through untouched so the
/// conversation continues upstream; otherwise a fresh id is minted.
/// The token is opaque here, its durable state lives upstream.
pub fn resolve(session_id: Option<&str>) -> String {
    match session_id {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}
