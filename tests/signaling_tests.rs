// Integration tests for the WebRTC signaling proxy
//
// A local axum listener stands in for the realtime API so the proxy's
// request construction and error passthrough can be observed end to end.

use anyhow::Result;
use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde_json::{json, Value};
use standup_voice::config::OpenAiConfig;
use standup_voice::signaling::DEFAULT_REALTIME_MODEL;
use standup_voice::{NegotiationRequest, SignalingClient, SignalingError};
use std::sync::{Arc, Mutex};

/// What the fake upstream saw for the last request
#[derive(Clone, Default)]
struct Captured {
    inner: Arc<Mutex<Option<(String, HeaderMap, String)>>>,
}

impl Captured {
    fn take(&self) -> Option<(String, HeaderMap, String)> {
        self.inner.lock().unwrap().take()
    }
}

async fn capture_and_answer(
    State(captured): State<Captured>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: String,
) -> &'static str {
    *captured.inner.lock().unwrap() = Some((query.unwrap_or_default(), headers, body));
    "v=0\r\nfake-sdp-answer"
}

/// Bind a fake upstream on an ephemeral port and return its base URL
async fn spawn_upstream(router: Router) -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    Ok(format!("http://{}", addr))
}

fn client_config(realtime_url: &str, api_key: Option<&str>) -> OpenAiConfig {
    OpenAiConfig {
        api_key: api_key.map(String::from),
        realtime_url: realtime_url.to_string(),
        default_model: DEFAULT_REALTIME_MODEL.to_string(),
    }
}

fn request(sdp: Option<&str>, session_params: Value) -> NegotiationRequest {
    NegotiationRequest {
        sdp: sdp.map(String::from),
        session_params: session_params.as_object().cloned().unwrap_or_default(),
    }
}

#[tokio::test]
async fn test_negotiate_forwards_offer_and_echoes_params() -> Result<()> {
    let captured = Captured::default();
    let upstream = Router::new()
        .route("/", post(capture_and_answer))
        .with_state(captured.clone());
    let url = spawn_upstream(upstream).await?;

    let client = SignalingClient::new(&client_config(&url, Some("test-key")))?;
    let params = json!({"model": "custom-realtime-model", "speed": 1.2});
    let response = client
        .negotiate(request(Some("v=0\r\ntest-offer"), params.clone()))
        .await?;

    // Upstream body is relayed verbatim; session params are echoed deep-equal
    assert_eq!(response.sdp, "v=0\r\nfake-sdp-answer");
    assert_eq!(Value::Object(response.session_data), params);

    // The upstream saw the raw SDP offer with credential and marker headers
    let (query, headers, body) = captured.take().expect("upstream should have been called");
    assert_eq!(body, "v=0\r\ntest-offer");
    assert!(query.contains("model=custom-realtime-model"), "query: {query}");
    assert!(query.contains("speed=1.2"), "query: {query}");
    assert_eq!(headers["authorization"], "Bearer test-key");
    assert_eq!(headers["content-type"], "application/sdp");
    assert_eq!(headers["openai-beta"], "realtime=v1");

    Ok(())
}

#[tokio::test]
async fn test_negotiate_defaults_model_and_omits_speed() -> Result<()> {
    let captured = Captured::default();
    let upstream = Router::new()
        .route("/", post(capture_and_answer))
        .with_state(captured.clone());
    let url = spawn_upstream(upstream).await?;

    let client = SignalingClient::new(&client_config(&url, Some("test-key")))?;
    client.negotiate(request(Some("v=0"), json!({}))).await?;

    let (query, _, _) = captured.take().expect("upstream should have been called");
    assert_eq!(query, format!("model={}", DEFAULT_REALTIME_MODEL));

    Ok(())
}

#[tokio::test]
async fn test_negotiate_without_credential_never_calls_upstream() -> Result<()> {
    let captured = Captured::default();
    let upstream = Router::new()
        .route("/", post(capture_and_answer))
        .with_state(captured.clone());
    let url = spawn_upstream(upstream).await?;

    let client = SignalingClient::new(&client_config(&url, None))?;
    let result = client.negotiate(request(Some("v=0"), json!({}))).await;

    assert!(matches!(result, Err(SignalingError::MissingCredential)));
    assert!(captured.take().is_none(), "No outbound call should be made");

    // An empty credential counts as missing, and wins over a bad offer too
    let client = SignalingClient::new(&client_config(&url, Some("")))?;
    let result = client.negotiate(request(None, json!({}))).await;
    assert!(matches!(result, Err(SignalingError::MissingCredential)));

    Ok(())
}

#[tokio::test]
async fn test_negotiate_rejects_missing_or_empty_offer() -> Result<()> {
    // Unreachable URL on purpose: the offer check fails before any send
    let client = SignalingClient::new(&client_config("http://127.0.0.1:9", Some("test-key")))?;

    let result = client.negotiate(request(None, json!({}))).await;
    assert!(matches!(result, Err(SignalingError::MissingOffer)));

    let result = client.negotiate(request(Some(""), json!({}))).await;
    assert!(matches!(result, Err(SignalingError::MissingOffer)));

    Ok(())
}

#[tokio::test]
async fn test_negotiate_passes_through_upstream_error() -> Result<()> {
    let upstream = Router::new().route(
        "/",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                r#"{"error":"rate_limited"}"#,
            )
        }),
    );
    let url = spawn_upstream(upstream).await?;

    let client = SignalingClient::new(&client_config(&url, Some("test-key")))?;
    let result = client.negotiate(request(Some("v=0"), json!({}))).await;

    match result {
        Err(SignalingError::Upstream { status, detail }) => {
            assert_eq!(status, 429);
            assert_eq!(detail, json!({"error": "rate_limited"}));
        }
        other => panic!("Expected Upstream error, got: {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_negotiate_keeps_non_json_error_body_as_text() -> Result<()> {
    let upstream = Router::new().route(
        "/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let url = spawn_upstream(upstream).await?;

    let client = SignalingClient::new(&client_config(&url, Some("test-key")))?;
    let result = client.negotiate(request(Some("v=0"), json!({}))).await;

    match result {
        Err(SignalingError::Upstream { status, detail }) => {
            assert_eq!(status, 500);
            assert_eq!(detail, Value::String("upstream exploded".to_string()));
        }
        other => panic!("Expected Upstream error, got: {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_negotiate_transport_failure_is_classified() -> Result<()> {
    // Nothing listens here; the connect fails
    let client = SignalingClient::new(&client_config("http://127.0.0.1:9", Some("test-key")))?;
    let result = client.negotiate(request(Some("v=0"), json!({}))).await;

    assert!(matches!(result, Err(SignalingError::Transport(_))));

    Ok(())
}
