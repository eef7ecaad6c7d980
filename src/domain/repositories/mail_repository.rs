//! # Mail Repository Trait
//!
//! レポートメールの送信を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::report::ReportEmail;

/// メールリポジトリ
///
/// 組み立て済みメールの送信を担当するリポジトリ
#[async_trait]
pub trait MailRepository: Send + Sync {
    /// メールを送信する
    ///
    /// # Arguments
    ///
    /// * `email` - 組み立て済みのレポートメール
    ///
    /// # Errors
    ///
    /// 認証拒否は `PipelineError::Authentication`、それ以外の配送失敗は
    /// `PipelineError::Delivery` を返す
    async fn send(&self, email: &ReportEmail) -> Result<()>;
}
