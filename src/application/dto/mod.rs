//! # DTO
//!
//! ユースケースに渡す実行時設定

pub mod summarize_config;
