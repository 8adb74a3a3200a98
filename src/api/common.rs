use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn health_check() -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
    .into_response()
}

pub async fn request_logger(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = uuid::Uuid::new_v4().simple().to_string();
    let start = std::time::Instant::now();
    let mut response = next.run(req).await;
    let duration = start.elapsed();
    tracing::info!(
        "[{}] {} {} - status: {}, latency: {}ms",
        request_id,
        method,
        uri,
        response.status(),
        duration.as_millis()
    );
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
