use super::error::ApiError;
use super::state::AppState;
use crate::signaling::{NegotiationRequest, SignalingError};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /webrtc-signal
/// Forward an SDP offer to the realtime API and relay the answer
pub async fn webrtc_signal(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    // Credential misconfiguration wins over any problem with the body
    if !state.signaling.has_credential() {
        return Err(SignalingError::MissingCredential.into());
    }

    let request: NegotiationRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidRequestBody)?;

    let response = state.signaling.negotiate(request).await?;
    Ok(Json(response))
}

/// POST /save-standup-data
/// Save the posted JSON under today's date, overwriting any earlier save
pub async fn save_standup_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let record: Value = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidPayload)?;

    let saved = state.store.save_today(&record)?;

    info!("Standup data saved for {}", saved.date());

    Ok(Json(SaveResponse {
        success: true,
        message: format!("Standup data saved for {}", saved.date()),
        file_path: saved.file_path.display().to_string(),
    }))
}

/// GET /get-previous-day-data
/// Yesterday's record, or an empty array when none was saved
pub async fn get_previous_day_data(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state.store.previous_day()?;
    Ok(Json(data))
}

/// GET /get-specific-day-data?year=&month=&day=
/// Record for the given date; components are used verbatim (no zero-padding)
pub async fn get_specific_day_data(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (year, month, day) = match (
        query.year.filter(|s| !s.is_empty()),
        query.month.filter(|s| !s.is_empty()),
        query.day.filter(|s| !s.is_empty()),
    ) {
        (Some(year), Some(month), Some(day)) => (year, month, day),
        _ => return Err(ApiError::MissingParameters),
    };

    let data = state.store.day(&year, &month, &day)?;
    Ok(Json(data))
}

/// Fallback for wrong methods on the API routes
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
