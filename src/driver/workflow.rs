//! Workflow Orchestration
//!
//! パイプライン全体のオーケストレーション
//!
//! 取得 → 要約 → レポート生成 → 送信 を厳密に逐次実行する。
//! どのステージの失敗も実行全体を打ち切り、部分レポートは送らない。

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};

use crate::adapter::config::{Config, Secrets};
use crate::adapter::huggingface::client::HttpInferenceApi;
use crate::adapter::repositories::csv_export;
use crate::adapter::repositories::hf_summary_repository::HfSummaryRepository;
use crate::adapter::repositories::mongo_entry_repository::MongoEntryRepository;
use crate::adapter::repositories::smtp_mail_repository::SmtpMailRepository;
use crate::adapter::repositories::xlsx_report_repository::XlsxReportRepository;
use crate::application::dto::summarize_config::SummarizeConfig;
use crate::application::use_cases::build_report::BuildReportUseCase;
use crate::application::use_cases::fetch_entries::FetchEntriesUseCase;
use crate::application::use_cases::send_report::SendReportUseCase;
use crate::application::use_cases::summarize_teams::{bulletize_teams, SummarizeTeamsUseCase};
use crate::domain::entities::report::DailyReport;
use crate::domain::entities::work_entry::WorkEntry;
use crate::domain::repositories::entry_repository::EntryRepository;
use crate::domain::repositories::mail_repository::MailRepository;
use crate::domain::repositories::report_repository::ReportRepository;
use crate::domain::repositories::summary_repository::SummaryRepository;

use super::cli::Args;

/// チルダ展開してPathBufにする
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Daily Report Workflow
///
/// リポジトリはトレイトオブジェクトとして注入する。要約リポジトリが
/// `None` なら逐語箇条書き、メールリポジトリが `None` ならdry-run。
pub struct DailyReportWorkflow {
    config: Config,
    entry_repository: Arc<dyn EntryRepository>,
    summary_repository: Option<Arc<dyn SummaryRepository>>,
    report_repository: Arc<dyn ReportRepository>,
    mail_repository: Option<Arc<dyn MailRepository>>,
}

impl std::fmt::Debug for DailyReportWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DailyReportWorkflow")
            .field("config", &self.config)
            .field("summary_repository", &self.summary_repository.is_some())
            .field("mail_repository", &self.mail_repository.is_some())
            .finish_non_exhaustive()
    }
}

impl DailyReportWorkflow {
    /// Create a new workflow instance with injected repositories
    pub fn new(
        config: Config,
        entry_repository: Arc<dyn EntryRepository>,
        summary_repository: Option<Arc<dyn SummaryRepository>>,
        report_repository: Arc<dyn ReportRepository>,
        mail_repository: Option<Arc<dyn MailRepository>>,
    ) -> Self {
        Self {
            config,
            entry_repository,
            summary_repository,
            report_repository,
            mail_repository,
        }
    }

    /// 本番アダプタでワークフローを組み立てる
    ///
    /// 実行に必要なシークレットは接続前にまとめて検証する。
    /// 欠けていれば最初のステージが走る前にエラーになる
    /// （dry-runはSMTPシークレット不要、要約スキップはAPIキー不要）。
    pub async fn assemble(config: Config, secrets: &Secrets, args: &Args) -> Result<Self> {
        let mongo_uri = secrets.mongo_uri()?.to_string();
        let hf_api_key = if args.skip_summarizer {
            None
        } else {
            Some(secrets.hf_api_key()?.to_string())
        };
        let smtp_credentials = if args.dry_run {
            None
        } else {
            Some((
                secrets.smtp_email()?.to_string(),
                secrets.smtp_password()?.to_string(),
            ))
        };

        let entry_repository: Arc<dyn EntryRepository> = Arc::new(
            MongoEntryRepository::connect(&mongo_uri, &config.database, &config.collection)
                .await?,
        );

        let summary_repository: Option<Arc<dyn SummaryRepository>> = match hf_api_key {
            Some(api_key) => {
                let api = Arc::new(HttpInferenceApi::new(
                    config.summarizer_api_url(),
                    api_key,
                    Duration::from_secs(config.summarizer_timeout_secs),
                )?);
                Some(Arc::new(HfSummaryRepository::new(
                    api,
                    config.summarizer_max_retries,
                )))
            }
            None => None,
        };

        let report_repository: Arc<dyn ReportRepository> = Arc::new(XlsxReportRepository::new(
            expand_path(&config.template_path),
            expand_path(&config.output_path),
        ));

        let mail_repository: Option<Arc<dyn MailRepository>> =
            smtp_credentials.map(|(email, password)| {
                Arc::new(SmtpMailRepository::new(
                    config.smtp_server.clone(),
                    config.smtp_port,
                    email,
                    password,
                    config.recipients.clone(),
                )) as Arc<dyn MailRepository>
            });

        Ok(Self::new(
            config,
            entry_repository,
            summary_repository,
            report_repository,
            mail_repository,
        ))
    }

    /// Execute the report pipeline
    pub async fn execute(&self, date: NaiveDate) -> Result<()> {
        info!("Starting daily report pipeline...");
        info!("Dry run: {}", self.mail_repository.is_none());

        println!("✓ Using configuration:");
        println!("  Database: {}/{}", self.config.database, self.config.collection);
        println!("  Template: {}", self.config.template_path);
        println!("  Report date: {}", date);

        // Stage 1: fetch work-log entries
        let entries = FetchEntriesUseCase::new(self.entry_repository.clone())
            .execute(date)
            .await?;
        println!("✓ Fetched {} work-log entries for {}", entries.len(), date);

        // Raw-data CSV export (audit side product, never terminal)
        if self.config.enable_csv_export {
            self.export_csv(&entries, date).await;
        }

        // Stage 2: summarize per team
        let summaries = match &self.summary_repository {
            None => {
                println!("✓ Summarizer skipped (verbatim bullets)");
                bulletize_teams(&entries, self.config.max_bullet_points)
            }
            Some(summary_repo) => {
                let summarize_config = SummarizeConfig::new(
                    self.config.max_bullet_points,
                    self.config.allow_bullet_fallback,
                );
                SummarizeTeamsUseCase::new(summary_repo.clone())
                    .execute(&entries, &summarize_config)
                    .await?
            }
        };
        println!("✓ Summarized {} teams", summaries.len());

        // Stage 3: build the report file
        let report = DailyReport::new(date, summaries);
        let report_path = BuildReportUseCase::new(self.report_repository.clone())
            .execute(&report)
            .await?;
        println!("✓ Report written to {}", report_path.display());

        // Stage 4: send the report email
        let Some(mail_repo) = &self.mail_repository else {
            println!("✓ Dry-run mode (not sending email)");
            println!("  Would send to {} recipients:", self.config.recipients.len());
            for recipient in &self.config.recipients {
                println!("    - {}", recipient);
            }
            return Ok(());
        };

        SendReportUseCase::new(mail_repo.clone())
            .execute(&report, &entries, &report_path)
            .await?;
        println!("✓ Report email sent to {} recipients", self.config.recipients.len());

        println!("✓ Daily report complete!");

        Ok(())
    }

    /// CSVエクスポート（失敗は警告のみ）
    async fn export_csv(&self, entries: &[WorkEntry], date: NaiveDate) {
        let entries = entries.to_vec();
        let result = tokio::task::spawn_blocking(move || {
            csv_export::export_entries(&entries, date, Path::new("."))
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))
        .and_then(|r| r);

        match result {
            Ok(Some(path)) => println!("✓ Raw entries exported to {}", path.display()),
            Ok(None) => {}
            Err(e) => warn!("CSV export failed (continuing): {:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(
            expand_path("templates/tasks_template.xlsx"),
            PathBuf::from("templates/tasks_template.xlsx")
        );
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/reports/out.xlsx");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("reports/out.xlsx"));
    }
}
