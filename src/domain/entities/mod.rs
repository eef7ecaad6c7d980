//! # Domain Entities
//!
//! ビジネスエンティティの定義
//!
//! - **work_entry**: 作業ログエントリ（WorkEntry, Task）
//! - **report**: 日次レポート（TeamSummary, DailyReport, ReportEmail）

pub mod report;
pub mod work_entry;
