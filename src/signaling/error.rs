use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalingError {
    #[error("OpenAI API key not configured")]
    MissingCredential,

    #[error("SDP offer not provided in request body")]
    MissingOffer,

    /// Non-success status from the realtime API; carries whatever the
    /// provider sent back so the caller keeps the diagnostic detail
    #[error("OpenAI API error (status {status})")]
    Upstream { status: u16, detail: Value },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type SignalingResult<T> = Result<T, SignalingError>;
