//! Hugging Face Client Abstractions
//!
//! クライアントの抽象化と実装
//!
//! HTTPの継ぎ目をtraitにしておくことで、テストではモック、
//! 本番ではreqwestクライアントを使う。

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::warn;
use tokio::time::sleep;

#[cfg(test)]
use mockall::automock;

use super::models::SummarizeRequest;
use super::retry::{calculate_retry_delay, error_chain_to_string, is_retryable_error};
use crate::domain::error::PipelineError;

/// Trait for a single summarization API call
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferenceApi: Send + Sync {
    /// Send one summarization request and return the raw JSON response
    async fn summarize_once(&self, request: &SummarizeRequest) -> Result<serde_json::Value>;
}

/// reqwestベースの本番実装
pub struct HttpInferenceApi {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HttpInferenceApi {
    /// 新しいクライアントを作成
    ///
    /// # Arguments
    ///
    /// * `api_url` - 推論エンドポイントのURL
    /// * `api_key` - Bearerトークン
    /// * `timeout` - リクエスト全体のタイムアウト
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl InferenceApi for HttpInferenceApi {
    async fn summarize_once(&self, request: &SummarizeRequest) -> Result<serde_json::Value> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .context("Summarization request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Summarization API returned {}: {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to decode summarization response")
    }
}

/// リトライ付きで要約APIを呼ぶ
///
/// 一時的エラー（503, 429, タイムアウト等）は指数バックオフで
/// `max_retries` 回まで再試行する。リトライ枯渇または恒久的エラーは
/// `PipelineError::RemoteService` として返す。
pub async fn summarize_with_retry<A: InferenceApi + ?Sized>(
    api: &A,
    request: &SummarizeRequest,
    max_retries: u32,
) -> Result<serde_json::Value> {
    let mut attempt = 0;

    loop {
        attempt += 1;
        match api.summarize_once(request).await {
            Ok(response) => return Ok(response),
            Err(e) => {
                let error_msg = error_chain_to_string(&e);

                if is_retryable_error(&error_msg) && attempt <= max_retries {
                    let delay_ms = calculate_retry_delay(attempt);
                    warn!(
                        "Summarization attempt {}/{} failed ({}), retrying in {}ms",
                        attempt,
                        max_retries + 1,
                        error_msg,
                        delay_ms
                    );
                    sleep(Duration::from_millis(delay_ms)).await;
                    continue;
                }

                return Err(PipelineError::RemoteService(error_msg).into());
            }
        }
    }
}
