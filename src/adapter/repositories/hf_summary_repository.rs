//! Hugging Face Summary Repository Implementation
//!
//! SummaryRepositoryのHugging Face実装
//!
//! リトライはクライアント層（summarize_with_retry）が担当し、
//! ここではレスポンスからの要約テキスト抽出までを行う。

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::adapter::huggingface::client::{summarize_with_retry, InferenceApi};
use crate::adapter::huggingface::models::{extract_summary, SummarizeRequest};
use crate::domain::error::PipelineError;
use crate::domain::repositories::summary_repository::SummaryRepository;

/// Hugging Face Inference APIベースの要約リポジトリ
pub struct HfSummaryRepository<A: InferenceApi> {
    api: Arc<A>,
    max_retries: u32,
}

impl<A: InferenceApi> HfSummaryRepository<A> {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<A>, max_retries: u32) -> Self {
        Self { api, max_retries }
    }
}

#[async_trait]
impl<A: InferenceApi> SummaryRepository for HfSummaryRepository<A> {
    async fn summarize(&self, text: &str) -> Result<String> {
        let request = SummarizeRequest::new(text);
        let response = summarize_with_retry(self.api.as_ref(), &request, self.max_retries).await?;

        extract_summary(&response).ok_or_else(|| {
            PipelineError::RemoteService(format!(
                "response carried no summary text: {}",
                response
            ))
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::huggingface::client::MockInferenceApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_summarize_extracts_summary_text() {
        let mut mock = MockInferenceApi::new();
        mock.expect_summarize_once()
            .times(1)
            .returning(|_| Ok(json!([{"summary_text": "The team shipped it."}])));

        let repo = HfSummaryRepository::new(Arc::new(mock), 3);

        let summary = repo.summarize("long input text").await.unwrap();
        assert_eq!(summary, "The team shipped it.");
    }

    #[tokio::test]
    async fn test_summarize_unusable_response_is_remote_service_error() {
        let mut mock = MockInferenceApi::new();
        mock.expect_summarize_once()
            .times(1)
            .returning(|_| Ok(json!({"error": "unexpected shape"})));

        let repo = HfSummaryRepository::new(Arc::new(mock), 3);

        let err = repo.summarize("long input text").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::RemoteService(_))
        ));
    }
}
