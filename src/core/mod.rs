//! 核心模块
//! 配置模型、提示词模板与上传编码

pub mod models;
pub mod prompts;
pub mod upload;
