// 上游客户端 - OpenRouter chat completions
use reqwest::{header, Client, StatusCode};

use crate::core::models::UpstreamConfig;
use crate::error::UpstreamError;
use crate::proxy::mappers::error_classifier::classify_transport_error;
use crate::proxy::mappers::openai::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, DEFAULT_TEMPERATURE,
};

pub struct UpstreamClient {
    http: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();

        if let Some(proxy_url) = config.proxy_url.as_deref().filter(|u| !u.is_empty()) {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| UpstreamError::ClientBuild(format!("invalid proxy url: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Upstream requests routed through proxy {}", proxy_url);
        } else {
            // Only the configured proxy is used, never HTTP(S)_PROXY from the environment
            builder = builder.no_proxy();
        }

        let http = builder
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Same as [`chat_completion`](Self::chat_completion) at temperature 0.
    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, UpstreamError> {
        self.chat_completion(messages, DEFAULT_TEMPERATURE).await
    }

    /// Sends one chat completion request and returns the first choice's text.
    ///
    /// Anything other than `200 OK` is an [`UpstreamError::Status`] carrying the raw body.
    /// No retries.
    pub async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
    ) -> Result<String, UpstreamError> {
        let payload = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature,
        };

        tracing::debug!(
            "Forwarding {} message(s) to {} (model: {})",
            payload.messages.len(),
            self.config.base_url,
            payload.model
        );

        let response = self
            .http
            .post(&self.config.base_url)
            .bearer_auth(self.config.bearer_token())
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Failed to read upstream error body: {}", e);
                    format!("<unreadable error body: {}>", e)
                }
            };
            tracing::warn!("Upstream returned {}: {}", status, body);
            return Err(UpstreamError::Status { status, body });
        }

        let body = response.text().await.map_err(transport_error)?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| UpstreamError::MalformedResponse(format!("{}: {}", e, body)))?;

        parsed
            .into_first_content()
            .ok_or_else(|| UpstreamError::MalformedResponse(format!("no choice content: {}", body)))
    }
}

fn transport_error(source: reqwest::Error) -> UpstreamError {
    let kind = classify_transport_error(&source);
    tracing::error!("Upstream transport failure ({}): {}", kind.as_str(), source);
    UpstreamError::Transport { kind, source }
}
