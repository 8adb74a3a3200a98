use crate::core::models::UpstreamConfig;
use crate::error::UpstreamError;
use crate::proxy::UpstreamClient;

/// Default cap on request bodies (image uploads)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Web 应用状态
pub struct AppState {
    pub upstream: UpstreamClient,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        Self::with_upload_limit(config, DEFAULT_MAX_UPLOAD_BYTES)
    }

    pub fn with_upload_limit(
        config: UpstreamConfig,
        max_upload_bytes: usize,
    ) -> Result<Self, UpstreamError> {
        if config.api_key.as_deref().map_or(true, str::is_empty) {
            tracing::warn!(
                "OPENROUTER_API_KEY is not set; upstream calls will be sent with an empty bearer token"
            );
        }
        Ok(Self {
            upstream: UpstreamClient::new(config)?,
            max_upload_bytes,
        })
    }
}
