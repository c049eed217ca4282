// src/routes/debug.rs
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::{AppError, truncate},
    message::FlowSummary,
    services::session,
    state::SharedState,
};

const TEST_MESSAGE: &str = "Hello, this is a test message";
const ECHO_LIMIT: usize = 2000;

#[derive(Deserialize)]
pub struct FlowsQuery {
    pub api_key: Option<String>,
}

#[derive(Deserialize)]
pub struct TestFlowQuery {
    pub flow_id: Option<String>,
    pub api_key: Option<String>,
}

pub async fn flows_handler(
    State(state): State<SharedState>,
    Query(query): Query<FlowsQuery>,
) -> Result<Json<Vec<FlowSummary>>, AppError> {
    let api_key = resolve_api_key(query.api_key.as_deref(), &state)?;
    let flows = state.upstream.list_flows(api_key).await?;
    Ok(Json(flows))
}

/// Run a flow with a canned message and echo what came back, for
/// checking a flow id and credential without a chat client.
pub async fn test_flow_handler(
    State(state): State<SharedState>,
    Query(query): Query<TestFlowQuery>,
) -> Result<Json<Value>, AppError> {
    let flow_id = query
        .flow_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(state.config.default_flow_id.as_deref())
        .ok_or_else(|| {
            AppError::Validation("no flow_id provided and no default configured".to_string())
        })?;
    let api_key = resolve_api_key(query.api_key.as_deref(), &state)?;

    // Throwaway session, this is a one-shot probe.
    let session_id = session::resolve(None);
    let raw = state
        .upstream
        .run_flow(flow_id, TEST_MESSAGE, &session_id, api_key)
        .await?;

    let mut result = json!({
        "flow_id": flow_id,
        "session_id": session_id,
        "response_text": truncate(&raw, ECHO_LIMIT),
    });
    if let Ok(parsed) = serde_json::from_str::<Value>(&raw) {
        result["response_json"] = parsed;
    }
    Ok(Json(result))
}

fn resolve_api_key<'a>(
    supplied: Option<&'a str>,
    state: &'a SharedState,
) -> Result<&'a str, AppError> {
    supplied
        .filter(|s| !s.is_empty())
        .or(state.config.default_api_key.as_deref())
        .ok_or_else(|| {
            AppError::Validation("no api_key provided and no default configured".to_string())
        })
}
