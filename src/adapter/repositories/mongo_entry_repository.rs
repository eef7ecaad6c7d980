//! MongoDB Entry Repository Implementation
//!
//! EntryRepositoryのMongoDB実装
//!
//! エントリの `date` フィールドは `YYYY-MM-DD` の文字列として
//! 保存されているため、対象日も同じ形式の文字列で照合する。

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::info;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use crate::domain::entities::work_entry::WorkEntry;
use crate::domain::error::PipelineError;
use crate::domain::repositories::entry_repository::EntryRepository;

/// MongoDBベースの作業ログリポジトリ
pub struct MongoEntryRepository {
    collection: Collection<WorkEntry>,
}

impl MongoEntryRepository {
    /// 接続URIからリポジトリを作成
    ///
    /// 実際の接続はドライバが遅延して張るため、到達性の問題は
    /// 最初のクエリで `PipelineError::Connection` として現れる
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| PipelineError::Connection(e.to_string()))?;

        Ok(Self {
            collection: client.database(database).collection(collection),
        })
    }
}

#[async_trait]
impl EntryRepository for MongoEntryRepository {
    async fn fetch_entries(&self, date: NaiveDate) -> Result<Vec<WorkEntry>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let filter = doc! { "date": &date_str };

        let mut cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| PipelineError::Connection(e.to_string()))?;

        let mut entries = Vec::new();
        while cursor
            .advance()
            .await
            .map_err(|e| PipelineError::Connection(e.to_string()))?
        {
            let entry = cursor
                .deserialize_current()
                .context("Malformed work-log document")?;
            entries.push(entry);
        }

        info!("Fetched {} documents for date {}", entries.len(), date_str);

        Ok(entries)
    }
}
