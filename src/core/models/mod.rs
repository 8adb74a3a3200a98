//! 核心数据模型

mod config;

pub use config::{
    UpstreamConfig, DEFAULT_APP_TITLE, DEFAULT_MODEL, DEFAULT_OPENROUTER_URL, DEFAULT_REFERER,
};
