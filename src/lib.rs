//! # Worksum
//!
//! 日次作業レポートの生成・送信ツール
//!
//! MongoDBから当日分の作業ログを取得し、Hugging Face Inference APIで
//! チーム単位に要約し、xlsxテンプレートに書き込んで、SMTPでメール送信する。
//! 外部スケジューラ（cron等）から1日1回起動される前提。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: ビジネスの核心的なルールとエンティティ（外部依存なし）
//! - **Application層**: アプリケーション固有のビジネスフロー（ユースケース）
//! - **Adapter層**: 外部システムとの統合（MongoDB, Hugging Face, SMTP等）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
