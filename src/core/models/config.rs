//! 上游配置模型

use url::Url;

pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o";
pub const DEFAULT_REFERER: &str = "http://localhost:8000";
pub const DEFAULT_APP_TITLE: &str = "Maize Disease Detection API";

/// Everything the forwarder needs to talk to the provider.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Bearer credential. `None` still sends requests with an empty token.
    pub api_key: Option<String>,

    /// Chat completions endpoint
    pub base_url: String,

    pub model: String,

    /// Sent as `HTTP-Referer`
    pub referer: String,

    /// Sent as `X-Title`
    pub app_title: String,

    /// 上游代理地址 (http://, https://, socks5://)
    pub proxy_url: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENROUTER_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            proxy_url: None,
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid upstream URL '{}': {}", self.base_url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "Upstream URL must be http(s), got '{}'",
                url.scheme()
            ));
        }
        if self.model.trim().is_empty() {
            return Err("Model identifier must not be empty".to_string());
        }
        if let Some(proxy) = &self.proxy_url {
            Url::parse(proxy).map_err(|e| format!("Invalid proxy URL '{}': {}", proxy, e))?;
        }
        Ok(())
    }

    /// Token placed after `Bearer `; empty when no key was configured.
    pub fn bearer_token(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}
