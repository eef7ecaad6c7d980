//! CSV Export
//!
//! 取得した生エントリのCSVエクスポート
//!
//! レポート生成とは独立した監査用の副産物。失敗しても実行は
//! 打ち切らない（呼び出し側が警告ログで済ませる）。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;

use crate::domain::entities::work_entry::WorkEntry;

/// エントリをCSVへ書き出す
///
/// # Arguments
///
/// * `entries` - 書き出すエントリ。空なら何も書かず `None` を返す
/// * `date` - 対象日（ファイル名 `mongo_export_YYYYMMDD.csv` に使う）
/// * `dir` - 出力先ディレクトリ
///
/// # Returns
///
/// 書き出したファイルのパス（エントリが空なら `None`）
pub fn export_entries(
    entries: &[WorkEntry],
    date: NaiveDate,
    dir: &Path,
) -> Result<Option<PathBuf>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let path = dir.join(format!("mongo_export_{}.csv", date.format("%Y%m%d")));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create CSV export at {}", path.display()))?;

    writer.write_record(["employee_name", "department", "team", "date", "tasks"])?;
    for entry in entries {
        writer.write_record([
            entry.employee_name.as_str(),
            entry.department.as_str(),
            entry.team.as_str(),
            entry.date.as_str(),
            &entry.task_details().join("; "),
        ])?;
    }
    writer.flush().context("Failed to flush CSV export")?;

    info!("Exported {} entries to {}", entries.len(), path.display());

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::work_entry::Task;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let entries = vec![WorkEntry {
            employee_name: "Asha Rao".to_string(),
            department: "Data".to_string(),
            team: "Analytics".to_string(),
            date: "2025-01-15".to_string(),
            tasks: vec![
                Task::Plain("built dashboard".to_string()),
                Task::Plain("wrote docs".to_string()),
            ],
        }];

        let path = export_entries(&entries, date(), dir.path()).unwrap().unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "mongo_export_20250115.csv"
        );
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "employee_name,department,team,date,tasks"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Asha Rao,Data,Analytics,2025-01-15,built dashboard; wrote docs"
        );
    }

    #[test]
    fn test_export_empty_entries_is_noop() {
        let dir = TempDir::new().unwrap();

        let result = export_entries(&[], date(), dir.path()).unwrap();

        assert!(result.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_unwritable_dir_errors() {
        let result = export_entries(
            &[WorkEntry {
                employee_name: "Asha".to_string(),
                ..Default::default()
            }],
            date(),
            Path::new("/nonexistent/dir"),
        );

        assert!(result.is_err());
    }
}
