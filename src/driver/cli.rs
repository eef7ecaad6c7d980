//! CLI Argument Parsing
//!
//! CLIの引数解析

use chrono::{Local, NaiveDate};
use clap::Parser;

/// 日次作業レポートを生成してメール送信するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "worksum")]
#[command(about = "Summarize daily work logs into a mailed spreadsheet report", long_about = None)]
pub struct Args {
    /// Dry run mode - build the report but don't send email
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the summarization API and use verbatim task bullets
    #[arg(long)]
    pub skip_summarizer: bool,

    /// Report date override (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Config file path
    #[arg(short, long, default_value = "./worksum.json")]
    pub config: String,
}

impl Args {
    /// レポート対象日（指定がなければ今日）
    pub fn report_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["worksum"]);
        assert_eq!(args.config, "./worksum.json");
        assert!(!args.dry_run);
        assert!(!args.skip_summarizer);
        assert!(args.date.is_none());
    }

    #[test]
    fn test_args_dry_run() {
        let args = Args::parse_from(["worksum", "--dry-run"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_date_override() {
        let args = Args::parse_from(["worksum", "--date", "2025-01-15"]);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(args.report_date(), NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_args_invalid_date_rejected() {
        let result = Args::try_parse_from(["worksum", "--date", "15/01/2025"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["worksum", "-c", "/custom/worksum.json"]);
        assert_eq!(args.config, "/custom/worksum.json");
    }

    #[test]
    fn test_args_combined() {
        let args = Args::parse_from(["worksum", "--dry-run", "--skip-summarizer"]);
        assert!(args.dry_run);
        assert!(args.skip_summarizer);
    }

    #[test]
    fn test_report_date_defaults_to_today() {
        let args = Args::parse_from(["worksum"]);
        assert_eq!(args.report_date(), Local::now().date_naive());
    }
}
