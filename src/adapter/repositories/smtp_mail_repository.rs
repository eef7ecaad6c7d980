//! SMTP Mail Repository Implementation
//!
//! MailRepositoryのlettre実装
//!
//! STARTTLSで接続し、LOGIN認証のうえマルチパートメール
//! （平文フォールバック + HTML本文 + xlsx添付）を送る。
//! リトライはしない。次のスケジュール実行が唯一の回復手段。

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::info;

use crate::domain::entities::report::ReportEmail;
use crate::domain::error::PipelineError;
use crate::domain::repositories::mail_repository::MailRepository;

/// xlsx添付のMIMEタイプ
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// lettreベースのメールリポジトリ
pub struct SmtpMailRepository {
    server: String,
    port: u16,
    sender: String,
    password: String,
    recipients: Vec<String>,
}

impl SmtpMailRepository {
    /// 新しいリポジトリを作成
    pub fn new(
        server: String,
        port: u16,
        sender: String,
        password: String,
        recipients: Vec<String>,
    ) -> Self {
        Self {
            server,
            port,
            sender,
            password,
            recipients,
        }
    }

    fn build_message(&self, email: &ReportEmail, attachment_bytes: Vec<u8>) -> Result<Message> {
        let mut builder = Message::builder()
            .from(self.sender.parse().context("Invalid sender address")?)
            .subject(email.subject.as_str());
        for recipient in &self.recipients {
            builder = builder.to(recipient
                .parse()
                .with_context(|| format!("Invalid recipient address: {}", recipient))?);
        }

        let content_type =
            ContentType::parse(XLSX_MIME).context("Invalid attachment content type")?;

        builder
            .multipart(
                MultiPart::mixed()
                    .multipart(MultiPart::alternative_plain_html(
                        email.plain_body.clone(),
                        email.html_body.clone(),
                    ))
                    .singlepart(
                        Attachment::new(email.attachment_filename())
                            .body(attachment_bytes, content_type),
                    ),
            )
            .context("Failed to build email message")
    }
}

#[async_trait]
impl MailRepository for SmtpMailRepository {
    async fn send(&self, email: &ReportEmail) -> Result<()> {
        let attachment_bytes = tokio::fs::read(&email.attachment_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to read report attachment: {}",
                    email.attachment_path.display()
                )
            })?;
        info!(
            "Attaching {} ({} bytes)",
            email.attachment_filename(),
            attachment_bytes.len()
        );

        let message = self.build_message(email, attachment_bytes)?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.server)
            .map_err(|e| PipelineError::Delivery(e.to_string()))?
            .port(self.port)
            .credentials(Credentials::new(self.sender.clone(), self.password.clone()))
            .build();

        mailer
            .send(message)
            .await
            .map_err(|e| classify_smtp_error(&e.to_string()))?;

        info!("Report email sent to {} recipients", self.recipients.len());

        Ok(())
    }
}

/// SMTPエラーを認証拒否と配送失敗に分類する
///
/// 認証拒否は535応答または資格情報に言及するメッセージで判定する
fn classify_smtp_error(error_msg: &str) -> PipelineError {
    let lowered = error_msg.to_lowercase();
    if error_msg.contains("535")
        || lowered.contains("authentication")
        || lowered.contains("credentials")
        || lowered.contains("username and password not accepted")
    {
        PipelineError::Authentication(error_msg.to_string())
    } else {
        PipelineError::Delivery(error_msg.to_string())
    }
}
