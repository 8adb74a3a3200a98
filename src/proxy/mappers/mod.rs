pub mod error_classifier;
pub mod openai;
