//! # Grouping Service
//!
//! エントリをチーム単位に集計するサービス
//!
//! レポートの決定性（同一入力から同一出力）を守るため、集計結果は
//! すべて `BTreeMap` に載せてチーム名の辞書順で反復する。

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::work_entry::WorkEntry;
use crate::domain::services::bullets::BulletService;

/// 部署・チーム単位の報告統計
///
/// メール本文のHTMLテーブルに使う
#[derive(Debug, Clone, Default)]
pub struct ReportingStat {
    /// その組に属する従業員
    pub employees: BTreeSet<String>,
    /// 1件以上のタスクを報告した従業員
    pub reported: BTreeSet<String>,
}

/// (部署, チーム) → 報告統計
pub type ReportingStats = BTreeMap<(String, String), ReportingStat>;

/// チーム集計サービス
pub struct GroupingService;

impl GroupingService {
    /// チーム名 → タスク内容のリスト
    ///
    /// 空のタスクは捨て、チーム内の重複は先勝ちで排除する。
    /// チーム名が空のエントリは集計対象外。
    pub fn team_tasks(entries: &[WorkEntry]) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for entry in entries {
            let team = entry.team.trim();
            if team.is_empty() {
                continue;
            }
            grouped
                .entry(team.to_string())
                .or_default()
                .extend(entry.task_details());
        }

        grouped
            .into_iter()
            .map(|(team, tasks)| (team, BulletService::dedup_tasks(&tasks)))
            .collect()
    }

    /// (部署, チーム) ごとの報告統計を集計する
    ///
    /// 部署・チームが欠けているエントリは "Unknown" に振り分ける
    pub fn reporting_stats(entries: &[WorkEntry]) -> ReportingStats {
        let mut stats: ReportingStats = BTreeMap::new();

        for entry in entries {
            let employee = entry.employee_name.trim();
            if employee.is_empty() {
                continue;
            }

            let dept = non_empty_or(&entry.department, "Unknown");
            let team = non_empty_or(&entry.team, "Unknown");
            let stat = stats.entry((dept, team)).or_default();

            stat.employees.insert(employee.to_string());
            if entry.has_reported() {
                stat.reported.insert(employee.to_string());
            }
        }

        stats
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
