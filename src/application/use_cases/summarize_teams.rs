//! # Summarize Teams Use Case
//!
//! チーム単位の要約ユースケース
//!
//! チームごとのタスク量に応じて戦略を切り替える：
//!
//! - 少量（既定で6タスク以下かつ結合1200文字未満）は単一呼び出し
//! - それ以上はチャンク分割 → チャンク要約 → 結合再要約
//! - API失敗時は設定により逐語箇条書きへ退避、または実行打ち切り

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::application::dto::summarize_config::SummarizeConfig;
use crate::domain::entities::report::TeamSummary;
use crate::domain::entities::work_entry::WorkEntry;
use crate::domain::repositories::summary_repository::SummaryRepository;
use crate::domain::services::bullets::BulletService;
use crate::domain::services::grouping::GroupingService;

/// 失敗したチャンクの生テキストを要約の代わりに使うときの上限文字数
const RAW_CHUNK_MAX_CHARS: usize = 1000;

/// チーム要約ユースケース
pub struct SummarizeTeamsUseCase<S: SummaryRepository + ?Sized> {
    summary_repository: Arc<S>,
}

impl<S: SummaryRepository + ?Sized> SummarizeTeamsUseCase<S> {
    /// 新しいユースケースを作成
    pub fn new(summary_repository: Arc<S>) -> Self {
        Self { summary_repository }
    }

    /// 全チームを要約する
    ///
    /// チーム名の辞書順に処理する（出力の決定性のため）
    ///
    /// # Errors
    ///
    /// `allow_bullet_fallback` が無効の場合、要約APIの失敗は
    /// そのままエラーとして返る
    pub async fn execute(
        &self,
        entries: &[WorkEntry],
        config: &SummarizeConfig,
    ) -> Result<Vec<TeamSummary>> {
        let team_tasks = GroupingService::team_tasks(entries);
        let mut summaries = Vec::with_capacity(team_tasks.len());

        for (team, tasks) in team_tasks {
            info!("Summarizing team '{}' with {} tasks", team, tasks.len());
            let bullets = self
                .summarize_tasks(&tasks, config)
                .await
                .with_context(|| format!("Failed to summarize team '{}'", team))?;
            summaries.push(TeamSummary::new(team, bullets));
        }

        Ok(summaries)
    }

    /// 1チーム分のタスクを箇条書きに要約する
    ///
    /// タスクはGroupingServiceで重複排除済み
    async fn summarize_tasks(
        &self,
        tasks: &[String],
        config: &SummarizeConfig,
    ) -> Result<Vec<String>> {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let joined_len: usize = tasks.iter().map(|t| t.len()).sum();
        let single_call =
            tasks.len() <= config.single_call_max_tasks && joined_len < config.single_call_max_chars;

        if single_call {
            let text = tasks.join(" . ");
            match self.summary_repository.summarize(&text).await {
                Ok(summary) => {
                    let points = BulletService::split_to_bullets(&summary, config.max_bullet_points);
                    if !points.is_empty() {
                        return Ok(points);
                    }
                    // 要約から1点も残らなかった場合は逐語箇条書きへ
                }
                Err(e) if config.allow_bullet_fallback => {
                    warn!(
                        "Single-call summarization failed, using verbatim bullets: {:#}",
                        e
                    );
                }
                Err(e) => return Err(e),
            }
        } else {
            match self.summarize_chunked(tasks, config).await {
                Ok(points) if !points.is_empty() => return Ok(points),
                Ok(_) => {}
                Err(e) if config.allow_bullet_fallback => {
                    warn!(
                        "Chunked summarization failed, using verbatim bullets: {:#}",
                        e
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(BulletService::bulletify(tasks, config.max_bullet_points))
    }

    /// チャンク分割要約：チャンクごとに要約してから結合を再要約する
    async fn summarize_chunked(
        &self,
        tasks: &[String],
        config: &SummarizeConfig,
    ) -> Result<Vec<String>> {
        let mut chunk_summaries = Vec::new();

        for (i, chunk) in tasks.chunks(config.chunk_size).enumerate() {
            let chunk_text = chunk.join(" . ");
            match self.summary_repository.summarize(&chunk_text).await {
                Ok(summary) => chunk_summaries.push(summary),
                Err(e) if config.allow_bullet_fallback => {
                    // 失敗したチャンクは生テキストで代用して続行
                    warn!("Chunk {} summarization failed, keeping raw text: {:#}", i, e);
                    chunk_summaries.push(truncate_chars(&chunk_text, RAW_CHUNK_MAX_CHARS));
                }
                Err(e) => return Err(e),
            }
        }

        let combined = chunk_summaries.join(" ");
        let final_summary = self.summary_repository.summarize(&combined).await?;

        Ok(BulletService::split_to_bullets(
            &final_summary,
            config.max_bullet_points,
        ))
    }
}

/// 要約APIを使わずに全チームを逐語箇条書きにする
///
/// `--skip-summarizer` 用。リモート呼び出しは一切発生しない。
pub fn bulletize_teams(entries: &[WorkEntry], max_points: usize) -> Vec<TeamSummary> {
    GroupingService::team_tasks(entries)
        .into_iter()
        .map(|(team, tasks)| TeamSummary::new(team, BulletService::bulletify(&tasks, max_points)))
        .collect()
}

/// 文字境界を壊さずに先頭 `max` 文字へ切り詰める
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
