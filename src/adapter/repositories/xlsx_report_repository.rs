//! XLSX Report Repository Implementation
//!
//! ReportRepositoryのスプレッドシート実装
//!
//! テンプレートのレイアウト規約（元のテンプレートファイルに準拠）：
//!
//! - `B4`: タイトルセル。`DD|MM|YYYY` プレースホルダを日付で置換
//! - `B6` 以降: チーム名の行。対応する `G` 列に要約を書き込む
//!
//! ファイルI/Oはブロッキングなので `spawn_blocking` でラップする。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use umya_spreadsheet::{reader, writer, HorizontalAlignmentValues, VerticalAlignmentValues};

use crate::domain::entities::report::DailyReport;
use crate::domain::error::PipelineError;
use crate::domain::repositories::report_repository::ReportRepository;

/// タイトルセルの座標と日付プレースホルダ
const TITLE_CELL: &str = "B4";
const DATE_PLACEHOLDER: &str = "DD|MM|YYYY";

/// チーム行の開始行とカラム
const FIRST_TEAM_ROW: u32 = 6;
const TEAM_COLUMN: char = 'B';
const SUMMARY_COLUMN: char = 'G';

/// 行の高さ： 1行あたり16pt、20〜300ptにクランプ
const ROW_HEIGHT_PER_LINE: f64 = 16.0;
const ROW_HEIGHT_MIN: f64 = 20.0;
const ROW_HEIGHT_MAX: f64 = 300.0;

/// xlsxテンプレートベースのレポートリポジトリ
pub struct XlsxReportRepository {
    template_path: PathBuf,
    output_path: PathBuf,
}

impl XlsxReportRepository {
    /// 新しいリポジトリを作成
    pub fn new(template_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            template_path,
            output_path,
        }
    }

    /// テンプレートを読み、要約を書き込み、出力パスへ保存する（内部実装）
    fn render_blocking(
        template_path: &Path,
        output_path: &Path,
        report: &DailyReport,
    ) -> Result<PathBuf> {
        let mut book = reader::xlsx::read(template_path).map_err(|e| {
            PipelineError::Template(format!("{}: {}", template_path.display(), e))
        })?;
        let sheet = book.get_active_sheet_mut();

        // タイトルセルの日付プレースホルダ置換
        let title = sheet.get_value(TITLE_CELL);
        if title.contains(DATE_PLACEHOLDER) {
            let replaced = title.replace(DATE_PLACEHOLDER, &report.title_date());
            sheet.get_cell_mut(TITLE_CELL).set_value(replaced);
        }

        // チーム行を走査して要約を書き込む
        let mut rows_written = 0;
        let highest_row = sheet.get_highest_row();
        for row in FIRST_TEAM_ROW..=highest_row {
            let team_coord = format!("{}{}", TEAM_COLUMN, row);
            let team = sheet.get_value(team_coord.as_str()).trim().to_string();
            if team.is_empty() {
                continue;
            }

            let Some(cell_text) = report.cell_text_for(&team) else {
                continue;
            };

            let summary_coord = format!("{}{}", SUMMARY_COLUMN, row);
            sheet
                .get_cell_mut(summary_coord.as_str())
                .set_value(cell_text.as_str());

            let alignment = sheet
                .get_style_mut(summary_coord.as_str())
                .get_alignment_mut();
            alignment.set_wrap_text(true);
            alignment.set_horizontal(HorizontalAlignmentValues::Left);
            alignment.set_vertical(VerticalAlignmentValues::Center);

            let lines = cell_text.lines().count() as f64;
            sheet
                .get_row_dimension_mut(&row)
                .set_height((lines * ROW_HEIGHT_PER_LINE).clamp(ROW_HEIGHT_MIN, ROW_HEIGHT_MAX));

            rows_written += 1;
        }

        writer::xlsx::write(&book, output_path)
            .with_context(|| format!("Failed to save report to {}", output_path.display()))?;

        info!(
            "Report generated: {} ({} team rows filled)",
            output_path.display(),
            rows_written
        );

        Ok(output_path.to_path_buf())
    }
}

#[async_trait]
impl ReportRepository for XlsxReportRepository {
    async fn render(&self, report: &DailyReport) -> Result<PathBuf> {
        let template_path = self.template_path.clone();
        let output_path = self.output_path.clone();
        let report = report.clone();

        tokio::task::spawn_blocking(move || {
            Self::render_blocking(&template_path, &output_path, &report)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}
