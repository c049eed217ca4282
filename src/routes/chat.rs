// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse},
    services::{normalizer, session},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    // Request values win over the configured fallbacks; both must be
    // resolvable before anything goes upstream.
    let flow_id = payload
        .flow_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(state.config.default_flow_id.as_deref())
        .ok_or_else(|| {
            AppError::Validation("no flow_id in request and no default configured".to_string())
        })?;
    let api_key = payload
        .api_key
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(state.config.default_api_key.as_deref())
        .ok_or_else(|| {
            AppError::Validation("no api_key in request and no default configured".to_string())
        })?;

    let session_id = session::resolve(payload.session_id.as_deref());

    let raw = state
        .upstream
        .run_flow(flow_id, trimmed, &session_id, api_key)
        .await?;
    let normalized = normalizer::normalize(&raw);

    // Serializing a String plus a Value cannot realistically fail, but
    // if it ever does the text alone still answers the caller.
    let response =
        serde_json::to_string(&normalized).unwrap_or_else(|_| normalized.text.clone());

    Ok(Json(ChatResponse {
        response,
        session_id,
    }))
}

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    let upstream_reachable = state.upstream.check_health().await;
    Json(HealthResponse {
        status: "healthy".to_string(),
        upstream_reachable,
        upstream_url: state.config.upstream_base_url.clone(),
    })
}
