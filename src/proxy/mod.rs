// proxy 模块 - OpenRouter 转发

pub mod mappers; // 协议数据模型
pub mod upstream; // 上游客户端

pub use upstream::client::UpstreamClient;
