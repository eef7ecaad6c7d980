//! # Report Entities
//!
//! 日次レポートのドメインエンティティ
//!
//! DailyReportは「1回の実行につき最大1つのレポートファイル」という
//! 不変条件の元になる集約。セルに書くテキストとメール本文はここで
//! 組み立て、Adapter層はファイル形式と配送だけを扱う。

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::services::grouping::ReportingStats;

/// タスクが1件も報告されなかった行に書く明示マーカー
pub const NO_TASKS_MARKER: &str = "- No tasks reported.";

/// 1チーム分の要約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub team: String,
    /// 接頭辞なしの箇条書き（最大5点程度）
    pub bullets: Vec<String>,
}

impl TeamSummary {
    pub fn new(team: String, bullets: Vec<String>) -> Self {
        Self { team, bullets }
    }

    /// スプレッドシートのセルに書くテキスト
    ///
    /// 箇条書きが空なら明示マーカーを返す
    pub fn as_cell_text(&self) -> String {
        if self.bullets.is_empty() {
            return NO_TASKS_MARKER.to_string();
        }
        self.bullets
            .iter()
            .map(|b| format!("- {}", b))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 日次レポートの集約
///
/// チーム名の辞書順にソートして保持する（出力の決定性のため）
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub summaries: Vec<TeamSummary>,
}

impl DailyReport {
    pub fn new(date: NaiveDate, mut summaries: Vec<TeamSummary>) -> Self {
        summaries.sort_by(|a, b| a.team.cmp(&b.team));
        Self { date, summaries }
    }

    /// タイトルセルに埋め込む日付表記（例: `15-Jan-2025`）
    pub fn title_date(&self) -> String {
        self.date.format("%d-%b-%Y").to_string()
    }

    pub fn summary_for(&self, team: &str) -> Option<&TeamSummary> {
        self.summaries.iter().find(|s| s.team == team)
    }

    /// テンプレートの1行（チーム名）に対して書くセルテキスト
    ///
    /// 要約のないチームは `None`（セルは触らない）。ただしレポート全体が
    /// 空の場合は全チーム行に明示マーカーを書く。
    pub fn cell_text_for(&self, team: &str) -> Option<String> {
        match self.summary_for(team) {
            Some(summary) => Some(summary.as_cell_text()),
            None if self.summaries.is_empty() => Some(NO_TASKS_MARKER.to_string()),
            None => None,
        }
    }
}

/// 送信直前にだけ存在するメールの組み立て結果
#[derive(Debug, Clone)]
pub struct ReportEmail {
    pub subject: String,
    pub plain_body: String,
    pub html_body: String,
    pub attachment_path: PathBuf,
}

impl ReportEmail {
    /// レポートと報告統計からメールを組み立てる
    ///
    /// 本文は部署・チーム別の報告数を示すHTMLテーブル＋平文フォールバック
    pub fn compose(date: NaiveDate, stats: &ReportingStats, attachment: &Path) -> Self {
        let subject = format!("Daily Work Report Summary - {}", date.format("%d %B %Y"));

        let mut rows = String::new();
        for ((dept, team), stat) in stats {
            rows.push_str(&format!(
                "<tr>\
                 <td style=\"border:1px solid #ccc; padding:6px; text-align:center;\">{}</td>\
                 <td style=\"border:1px solid #ccc; padding:6px; text-align:center;\">{}</td>\
                 <td style=\"border:1px solid #ccc; padding:6px; text-align:center;\">{}</td>\
                 </tr>",
                html_escape(dept),
                html_escape(team),
                stat.reported.len()
            ));
        }

        let html_body = format!(
            "<html><body>\
             <p>Please find attached the daily summarized work report.</p>\
             <p><b>Department &amp; Team reporting summary ({})</b></p>\
             <table style=\"border-collapse:collapse; width:90%;\">\
             <thead><tr style=\"background:#f2f2f2;\">\
             <th style=\"border:1px solid #ccc; padding:6px; text-align:center;\">Department</th>\
             <th style=\"border:1px solid #ccc; padding:6px; text-align:center;\">Team</th>\
             <th style=\"border:1px solid #ccc; padding:6px; text-align:center;\">Tasks Reported</th>\
             </tr></thead>\
             <tbody>{}</tbody>\
             </table>\
             </body></html>",
            date.format("%d-%b-%Y"),
            rows
        );

        let plain_body = format!(
            "Daily work report for {} is attached. This email has an HTML version.",
            date.format("%d %B %Y")
        );

        Self {
            subject,
            plain_body,
            html_body,
            attachment_path: attachment.to_path_buf(),
        }
    }

    /// 添付ファイル名（パスの終端要素）
    pub fn attachment_filename(&self) -> String {
        self.attachment_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "report.xlsx".to_string())
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::grouping::ReportingStat;
    use std::collections::BTreeMap;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_as_cell_text_bullets() {
        let summary = TeamSummary::new(
            "Analytics".to_string(),
            vec!["built dashboard".to_string(), "wrote docs".to_string()],
        );

        assert_eq!(summary.as_cell_text(), "- built dashboard\n- wrote docs");
    }

    #[test]
    fn test_as_cell_text_empty_uses_marker() {
        let summary = TeamSummary::new("Analytics".to_string(), vec![]);
        assert_eq!(summary.as_cell_text(), NO_TASKS_MARKER);
    }

    #[test]
    fn test_report_sorts_summaries_by_team() {
        let report = DailyReport::new(
            date(),
            vec![
                TeamSummary::new("Zulu".to_string(), vec![]),
                TeamSummary::new("Alpha".to_string(), vec![]),
            ],
        );

        assert_eq!(report.summaries[0].team, "Alpha");
        assert_eq!(report.summaries[1].team, "Zulu");
    }

    #[test]
    fn test_cell_text_for_known_team() {
        let report = DailyReport::new(
            date(),
            vec![TeamSummary::new(
                "Platform".to_string(),
                vec!["rotated keys".to_string()],
            )],
        );

        assert_eq!(
            report.cell_text_for("Platform"),
            Some("- rotated keys".to_string())
        );
        assert_eq!(report.cell_text_for("Analytics"), None);
    }

    #[test]
    fn test_cell_text_for_empty_report_marks_every_row() {
        let report = DailyReport::new(date(), vec![]);

        assert_eq!(
            report.cell_text_for("Analytics"),
            Some(NO_TASKS_MARKER.to_string())
        );
        assert_eq!(
            report.cell_text_for("Platform"),
            Some(NO_TASKS_MARKER.to_string())
        );
    }

    #[test]
    fn test_title_date_format() {
        let report = DailyReport::new(date(), vec![]);
        assert_eq!(report.title_date(), "15-Jan-2025");
    }

    #[test]
    fn test_compose_email_subject_and_table() {
        let mut stats: ReportingStats = BTreeMap::new();
        let mut stat = ReportingStat::default();
        stat.employees.insert("Asha".to_string());
        stat.reported.insert("Asha".to_string());
        stats.insert(("Data".to_string(), "Analytics".to_string()), stat);

        let email = ReportEmail::compose(date(), &stats, Path::new("/tmp/Daily_Work_Report.xlsx"));

        assert_eq!(email.subject, "Daily Work Report Summary - 15 January 2025");
        assert!(email.html_body.contains("<td style=\"border:1px solid #ccc; padding:6px; text-align:center;\">Analytics</td>"));
        assert!(email.html_body.contains("15-Jan-2025"));
        assert_eq!(email.attachment_filename(), "Daily_Work_Report.xlsx");
    }

    #[test]
    fn test_compose_email_escapes_html() {
        let mut stats: ReportingStats = BTreeMap::new();
        stats.insert(
            ("R&D".to_string(), "<script>".to_string()),
            ReportingStat::default(),
        );

        let email = ReportEmail::compose(date(), &stats, Path::new("r.xlsx"));

        assert!(email.html_body.contains("R&amp;D"));
        assert!(email.html_body.contains("&lt;script&gt;"));
    }
}
