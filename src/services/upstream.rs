// src/services/upstream.rs
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::config::{Config, HEALTH_PROBE_TIMEOUT};
use crate::error::AppError;
use crate::message::FlowSummary;

const LIST_FLOWS_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote flow-execution API. Cheap to clone; the inner
/// reqwest client pools connections on its own.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    flow_timeout: Duration,
}

// The projects listing as upstream reports it. Anything that does not
// fit this shape is skipped rather than failed, the schema is owned by
// the upstream service.
#[derive(Debug, Default, Deserialize)]
struct ProjectEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    flows: Vec<FlowEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct FlowEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
            flow_timeout: config.flow_timeout,
        }
    }

    /// Execute a flow once and return the raw response body.
    ///
    /// Exactly one attempt, never retried: a flow run may have side
    /// effects (a live scrape, a browser session) that must not be
    /// duplicated behind the caller's back.
    pub async fn run_flow(
        &self,
        flow_id: &str,
        message: &str,
        session_id: &str,
        api_key: &str,
    ) -> Result<String, AppError> {
        let url = format!("{}/api/v1/run/{}", self.base_url, flow_id);
        let payload = json!({
            "input_value": message,
            "input_type": "chat",
            "output_type": "chat",
            "session_id": session_id,
        });

        tracing::info!(%url, %session_id, "running upstream flow");
        let response = self
            .http
            .post(&url)
            .header("x-api-key", api_key)
            .json(&payload)
            .timeout(self.flow_timeout)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnreachable(e.to_string()))?;

        let body = Self::read_success_body(response).await?;
        tracing::debug!(bytes = body.len(), "upstream flow responded");
        Ok(body)
    }

    /// Flatten the upstream projects listing into flow summaries.
    pub async fn list_flows(&self, api_key: &str) -> Result<Vec<FlowSummary>, AppError> {
        let url = format!("{}/api/v1/projects", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("x-api-key", api_key)
            .timeout(LIST_FLOWS_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnreachable(e.to_string()))?;

        let body = Self::read_success_body(response).await?;
        let projects: Vec<ProjectEntry> = serde_json::from_str(&body).unwrap_or_default();

        let mut summaries = Vec::new();
        for project in projects {
            for flow in project.flows {
                if flow.id.is_empty() {
                    continue;
                }
                summaries.push(FlowSummary {
                    project: project.name.clone(),
                    flow_id: flow.id,
                    flow_name: flow.name,
                });
            }
        }
        Ok(summaries)
    }

    /// Best-effort reachability probe, bounded independently of the
    /// flow timeout so /health never hangs behind a slow flow.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).timeout(HEALTH_PROBE_TIMEOUT).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn read_success_body(response: reqwest::Response) -> Result<String, AppError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::UpstreamUnreachable(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(status = status.as_u16(), "upstream rejected credential");
            return Err(AppError::UpstreamAuth {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "upstream returned an error");
            return Err(AppError::UpstreamExecution {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
