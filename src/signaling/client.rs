use super::error::{SignalingError, SignalingResult};
use super::types::{NegotiationRequest, NegotiationResponse};
use crate::config::OpenAiConfig;
use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

/// Model used when the client does not pick one
pub const DEFAULT_REALTIME_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";

/// OpenAI realtime negotiation endpoint
pub const OPENAI_REALTIME_URL: &str = "https://api.openai.com/v1/realtime";

/// Negotiation is a single round trip; the timeout bounds the whole call
const NEGOTIATE_TIMEOUT: Duration = Duration::from_secs(30);

/// Proxy client that forwards SDP offers to the OpenAI realtime API
pub struct SignalingClient {
    http: reqwest::Client,
    realtime_url: String,
    default_model: String,
    api_key: Option<String>,
}

impl SignalingClient {
    pub fn new(cfg: &OpenAiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(NEGOTIATE_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            realtime_url: cfg.realtime_url.clone(),
            default_model: cfg.default_model.clone(),
            api_key: cfg.api_key.clone(),
        })
    }

    /// Whether a usable credential is configured
    pub fn has_credential(&self) -> bool {
        matches!(self.api_key.as_deref(), Some(key) if !key.is_empty())
    }

    /// Forward an SDP offer to the realtime API and return its answer
    ///
    /// The credential is checked before any outbound traffic. Upstream
    /// failures keep their status code and body so the caller sees exactly
    /// what the provider said.
    pub async fn negotiate(
        &self,
        request: NegotiationRequest,
    ) -> SignalingResult<NegotiationResponse> {
        if !self.has_credential() {
            return Err(SignalingError::MissingCredential);
        }
        let api_key = self.api_key.as_deref().unwrap_or_default();

        let NegotiationRequest {
            sdp,
            session_params,
        } = request;

        let sdp_offer = match sdp {
            Some(sdp) if !sdp.is_empty() => sdp,
            _ => return Err(SignalingError::MissingOffer),
        };

        let model = session_params
            .get("model")
            .and_then(Value::as_str)
            .unwrap_or(&self.default_model);

        let mut query: Vec<(&str, String)> = vec![("model", model.to_string())];
        if let Some(speed) = session_params.get("speed") {
            query.push(("speed", render_query_value(speed)));
        }

        info!("Negotiating realtime session (model: {})", model);

        let response = self
            .http
            .post(&self.realtime_url)
            .query(&query)
            .bearer_auth(api_key)
            .header(CONTENT_TYPE, "application/sdp")
            .header("OpenAI-Beta", "realtime=v1")
            .body(sdp_offer)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Realtime API returned {}: {}", status, body);

            // Keep the provider's body as structured detail when it parses
            let detail = serde_json::from_str(&body).unwrap_or(Value::String(body));
            return Err(SignalingError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let sdp_answer = response.text().await?;

        info!(
            "Realtime session negotiated ({} byte answer)",
            sdp_answer.len()
        );

        Ok(NegotiationResponse {
            sdp: sdp_answer,
            session_data: session_params,
        })
    }
}

/// Render a passthrough parameter the way it reads in JSON, minus quoting
fn render_query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
