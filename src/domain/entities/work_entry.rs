//! # WorkEntry Entity
//!
//! 作業ログのドメインエンティティ
//!
//! MongoDBのドキュメントをそのままデシリアライズする。コレクションには
//! `tasks` がオブジェクト形式（`{"details": "..."}）と素の文字列の
//! 両方の形で保存されているため、untagged enumで両対応する。

use serde::Deserialize;

/// 1件のタスク
///
/// 構造化された形式と素の文字列の両方を受け付ける
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Task {
    /// `{"details": "..."}` 形式
    Structured {
        #[serde(default)]
        details: String,
    },
    /// 素の文字列
    Plain(String),
}

impl Task {
    /// タスクの内容テキストを取り出す（前後の空白は除去）
    pub fn details(&self) -> &str {
        match self {
            Task::Structured { details } => details.trim(),
            Task::Plain(text) => text.trim(),
        }
    }
}

/// 作業ログエントリのドメインエンティティ
///
/// 1人の従業員がある日に報告した作業の単位。取得後は読み取り専用。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub team: String,
    /// 保存形式は `YYYY-MM-DD` の文字列
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl WorkEntry {
    /// 空でないタスク内容のリストを返す
    pub fn task_details(&self) -> Vec<String> {
        self.tasks
            .iter()
            .map(|t| t.details().to_string())
            .filter(|d| !d.is_empty())
            .collect()
    }

    /// 1件以上のタスクを報告しているか
    pub fn has_reported(&self) -> bool {
        !self.task_details().is_empty()
    }
}
