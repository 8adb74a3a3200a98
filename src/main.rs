use anyhow::Context;
use clap::Parser;
use maize_advisor_server::core::models::{
    UpstreamConfig, DEFAULT_APP_TITLE, DEFAULT_MODEL, DEFAULT_OPENROUTER_URL, DEFAULT_REFERER,
};
use maize_advisor_server::state::{AppState, DEFAULT_MAX_UPLOAD_BYTES};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    port: u16,

    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    bind: String,

    /// OpenRouter API key
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "OPENROUTER_URL", default_value = DEFAULT_OPENROUTER_URL)]
    base_url: String,

    #[arg(long, env = "OPENROUTER_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Value of the HTTP-Referer header sent upstream
    #[arg(long, env = "OPENROUTER_REFERER", default_value = DEFAULT_REFERER)]
    referer: String,

    /// Value of the X-Title header sent upstream
    #[arg(long, env = "OPENROUTER_TITLE", default_value = DEFAULT_APP_TITLE)]
    app_title: String,

    /// Outbound proxy for upstream calls (http://, https://, socks5://)
    #[arg(long, env = "UPSTREAM_PROXY")]
    upstream_proxy: Option<String>,

    /// Maximum request body size in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,
}

impl Args {
    fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            referer: self.referer.clone(),
            app_title: self.app_title.clone(),
            proxy_url: self.upstream_proxy.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenv {
        tracing::info!("Loaded environment from {:?}", path);
    }

    let args = Args::parse();

    let config = args.upstream_config();
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid upstream configuration")?;
    tracing::info!("Forwarding to {} with model {}", config.base_url, config.model);

    let state = AppState::with_upload_limit(config, args.max_upload_bytes)
        .context("Failed to init state")?;
    let app = maize_advisor_server::build_app(Arc::new(state));

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", args.bind, args.port))?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
