#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use maize_advisor_server::core::models::UpstreamConfig;
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "sk-or-test-key";

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Text content of the user message (string content or the text part).
    pub fn user_text(&self) -> String {
        let user = self.body["messages"]
            .as_array()
            .and_then(|msgs| msgs.iter().find(|m| m["role"] == "user"))
            .cloned()
            .unwrap_or(Value::Null);
        match &user["content"] {
            Value::String(s) => s.clone(),
            Value::Array(parts) => parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            _ => String::new(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Chat completions endpoint on a random loopback port answering with a canned response.
pub struct MockUpstream {
    pub url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.into(),
            captured: captured.clone(),
        };

        let app = Router::new()
            .route("/api/v1/chat/completions", post(mock_completions))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/api/v1/chat/completions", addr),
            captured,
        }
    }

    pub async fn replying(content: &str) -> Self {
        let body = serde_json::json!({
            "id": "gen-123",
            "model": "openai/gpt-4o",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        });
        Self::start(StatusCode::OK, body.to_string()).await
    }

    pub fn config(&self) -> UpstreamConfig {
        UpstreamConfig {
            api_key: Some(TEST_API_KEY.to_string()),
            base_url: self.url.clone(),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn mock_completions(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let body_json = serde_json::from_str(&body).unwrap_or(Value::String(body));
    state.captured.lock().unwrap().push(CapturedRequest {
        headers,
        body: body_json,
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
