use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use super::form::FormFields;
use crate::core::prompts::{self, WeatherFactor, WeatherReading};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WeatherInsightsResponse {
    pub insights: String,
}

pub async fn overall_recommendation(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<WeatherInsightsResponse>, ApiError> {
    let reading = WeatherReading {
        temperature: form.float("temperature")?,
        humidity: form.float("humidity")?,
        windspeed: form.float("windspeed")?,
        pressure: form.float("pressure")?,
    };

    let insights = state
        .upstream
        .complete(prompts::overall_recommendation_messages(&reading))
        .await?;

    Ok(Json(WeatherInsightsResponse { insights }))
}

async fn factor_insights(
    state: &AppState,
    form: &FormFields,
    factor: WeatherFactor,
) -> Result<Json<WeatherInsightsResponse>, ApiError> {
    let value = form.float(factor.field())?;
    let insights = state.upstream.complete(factor.messages(value)).await?;
    Ok(Json(WeatherInsightsResponse { insights }))
}

pub async fn temperature_insights(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<WeatherInsightsResponse>, ApiError> {
    factor_insights(&state, &form, WeatherFactor::Temperature).await
}

pub async fn humidity_insights(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<WeatherInsightsResponse>, ApiError> {
    factor_insights(&state, &form, WeatherFactor::Humidity).await
}

pub async fn windspeed_insights(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<WeatherInsightsResponse>, ApiError> {
    factor_insights(&state, &form, WeatherFactor::WindSpeed).await
}

pub async fn pressure_insights(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<WeatherInsightsResponse>, ApiError> {
    factor_insights(&state, &form, WeatherFactor::Pressure).await
}
