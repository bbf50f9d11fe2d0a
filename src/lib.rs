pub mod config;
pub mod http;
pub mod signaling;
pub mod standup;

pub use config::Config;
pub use http::{create_router, ApiError, AppState, ErrorBody};
pub use signaling::{
    NegotiationRequest, NegotiationResponse, SignalingClient, SignalingError, SignalingResult,
};
pub use standup::{SavedRecord, StandupStore, StoreError, StoreResult};
