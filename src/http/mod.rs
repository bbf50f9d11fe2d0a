//! HTTP API server for the standup voice assistant
//!
//! This module provides the web surface of the application:
//! - GET / - client page
//! - POST /webrtc-signal - proxy an SDP offer to the realtime API
//! - POST /save-standup-data - save today's standup record
//! - GET /get-previous-day-data - fetch yesterday's record
//! - GET /get-specific-day-data - fetch a record by date query params
//! - GET /health - health check

mod error;
mod handlers;
mod routes;
mod state;

pub use error::{ApiError, ErrorBody};
pub use routes::create_router;
pub use state::AppState;
