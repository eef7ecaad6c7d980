//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - フレームワークに依存しない
//! - MongoDBや要約APIについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（WorkEntry, DailyReportなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（箇条書き整形・チーム集計）
//! - **error**: パイプラインのエラー分類

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
