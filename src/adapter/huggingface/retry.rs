//! Hugging Face Retry Logic and Error Classification
//!
//! リトライロジックとエラー分類
//!
//! Inference APIはコールドスタート時に「model is loading」の503を
//! 返すため、これを一時的エラーとして扱う。

/// 既定の最大リトライ回数（設定で上書き可能）
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const INITIAL_RETRY_DELAY_MS: u64 = 2000; // 2 seconds, doubling per attempt
pub const MAX_RETRY_DELAY_MS: u64 = 32000; // 32 seconds max

/// Calculate retry delay with exponential backoff
///
/// 指数は上限遅延に達する段数で打ち止めにする（シフト溢れ防止）
pub fn calculate_retry_delay(retry_count: u32) -> u64 {
    let exponent = retry_count.saturating_sub(1).min(5);
    std::cmp::min(INITIAL_RETRY_DELAY_MS << exponent, MAX_RETRY_DELAY_MS)
}

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &anyhow::Error) -> String {
    let mut messages = Vec::new();
    for cause in e.chain() {
        messages.push(cause.to_string());
    }
    messages.join(" | ")
}

/// Check if an error is a network-level failure
pub fn is_connection_error(error_msg: &str) -> bool {
    error_msg.contains("Connection reset")
        || error_msg.contains("connection reset")
        || error_msg.contains("Connection refused")
        || error_msg.contains("connection refused")
        || error_msg.contains("connection error")
        || error_msg.contains("Broken pipe")
        || error_msg.contains("broken pipe")
        || error_msg.contains("unexpected end of file")
}

/// Check if an error is transient on the API side
pub fn is_transient_error(error_msg: &str) -> bool {
    error_msg.contains("503")
        || error_msg.contains("500")
        || error_msg.contains("502")
        || error_msg.contains("429")
        || error_msg.contains("rate")
        || error_msg.contains("loading")
        || error_msg.contains("timeout")
        || error_msg.contains("Timeout")
        || error_msg.contains("timed out")
}

/// Check if an error message indicates a retryable error
pub fn is_retryable_error(error_msg: &str) -> bool {
    is_connection_error(error_msg) || is_transient_error(error_msg)
}
