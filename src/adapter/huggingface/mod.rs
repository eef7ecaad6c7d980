//! Hugging Face Inference API との統合
//!
//! - **client**: HTTPクライアントの抽象化とリトライ付き呼び出し
//! - **models**: リクエスト/レスポンスの形
//! - **retry**: リトライロジックとエラー分類

pub mod client;
pub mod models;
pub mod retry;
