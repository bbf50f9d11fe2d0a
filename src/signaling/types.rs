use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Session negotiation request posted by the browser client
#[derive(Debug, Clone, Deserialize)]
pub struct NegotiationRequest {
    /// SDP offer blob produced by the browser's RTCPeerConnection
    pub sdp: Option<String>,

    /// Passthrough session configuration; `model` and `speed` are recognized
    #[serde(default)]
    pub session_params: Map<String, Value>,
}

/// Negotiation result relayed back to the browser client
#[derive(Debug, Clone, Serialize)]
pub struct NegotiationResponse {
    /// SDP answer returned by the realtime API, verbatim
    pub sdp: String,

    /// The request's `session_params`, echoed unchanged
    pub session_data: Map<String, Value>,
}
