use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use super::form::FormFields;
use crate::core::{prompts, upload};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub suggestions: String,
}

#[derive(Debug, Serialize)]
pub struct ChatbotResponse {
    pub response: String,
}

pub async fn analyze_maize_plant(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<ImageResponse>, ApiError> {
    let file = form.file("file")?;
    tracing::info!(
        "Analyzing upload '{}' ({} bytes, declared type: {})",
        file.file_name,
        file.bytes.len(),
        file.content_type.as_deref().unwrap_or("none")
    );

    let data_url = upload::image_data_url(&file.bytes);
    let suggestions = state
        .upstream
        .complete(prompts::maize_analysis_messages(&data_url))
        .await?;

    Ok(Json(ImageResponse { suggestions }))
}

pub async fn maize_chatbot(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<ChatbotResponse>, ApiError> {
    let query = form.text("query")?;
    let response = state
        .upstream
        .complete(prompts::maize_chatbot_messages(query))
        .await?;

    Ok(Json(ChatbotResponse { response }))
}
