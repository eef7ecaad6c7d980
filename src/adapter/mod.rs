//! Adapter Layer
//!
//! 外部システム（MongoDB, Hugging Face, スプレッドシート, SMTP）との統合

pub mod config;
pub mod huggingface;
pub mod repositories;
