// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
    /// Falls back to DEFAULT_FLOW_ID when absent.
    pub flow_id: Option<String>,
    /// Falls back to UPSTREAM_API_KEY when absent.
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// JSON-encoded `NormalizedPayload`, kept as a string so clients
    /// expecting a plain text field still work.
    pub response: String,
    pub session_id: String,
}

/// Canonical shape every upstream reply is coerced into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPayload {
    pub text: String,
    pub content: Value,
}

/// One flow as reported by the upstream projects listing. Debug-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSummary {
    pub project: String,
    pub flow_id: String,
    pub flow_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub upstream_reachable: bool,
    pub upstream_url: String,
}
