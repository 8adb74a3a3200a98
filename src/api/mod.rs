use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub mod common;
pub mod form;
mod maize;
mod weather;

pub use maize::{ChatbotResponse, ImageResponse};
pub use weather::WeatherInsightsResponse;

pub fn build_routes(state: Arc<AppState>) -> Router {
    let body_limit = state.max_upload_bytes;

    Router::new()
        // Maize
        .route("/analyze-maize-plant", post(maize::analyze_maize_plant))
        .route("/maize-chatbot", post(maize::maize_chatbot))
        // Weather
        .route(
            "/overall-recommendation",
            post(weather::overall_recommendation),
        )
        .route("/temperature-insights", post(weather::temperature_insights))
        .route("/humidity-insights", post(weather::humidity_insights))
        .route("/windspeed-insights", post(weather::windspeed_insights))
        .route("/pressure-insights", post(weather::pressure_insights))
        // Health
        .route("/healthz", get(common::health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
