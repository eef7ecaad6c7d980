//! # Configuration
//!
//! JSON設定ファイルと環境変数シークレットの読み込み
//!
//! 接続文字列やAPIキーなどのシークレットは設定ファイルに置かず、
//! 環境変数からのみ読む。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// 実行設定（シークレットを含まない）
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// MongoDBのデータベース名
    pub database: String,
    /// 作業ログのコレクション名
    pub collection: String,
    /// レポートテンプレート（xlsx）のパス
    pub template_path: String,
    /// 生成するレポートファイルのパス
    pub output_path: String,
    /// 要約モデル名（例: "facebook/bart-large-cnn"）
    pub summarizer_model: String,
    /// 要約APIのリクエストタイムアウト（秒）
    #[serde(default = "default_timeout_secs")]
    pub summarizer_timeout_secs: u64,
    /// 要約APIの最大リトライ回数
    #[serde(default = "default_max_retries")]
    pub summarizer_max_retries: u32,
    /// 要約失敗時に逐語箇条書きへ退避するか
    #[serde(default = "default_true")]
    pub allow_bullet_fallback: bool,
    /// 1チームあたりの最大箇条書き点数
    #[serde(default = "default_max_bullets")]
    pub max_bullet_points: usize,
    /// 取得した生データのCSVエクスポートを行うか
    #[serde(default = "default_true")]
    pub enable_csv_export: bool,
    /// SMTPサーバーのホスト名
    pub smtp_server: String,
    /// SMTPポート（STARTTLS）
    pub smtp_port: u16,
    /// レポートの宛先
    pub recipients: Vec<String>,
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_retries() -> u32 {
    crate::adapter::huggingface::retry::DEFAULT_MAX_RETRIES
}

fn default_max_bullets() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Config {
    /// 設定ファイルを読み込む
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// 要約APIのエンドポイントURL
    pub fn summarizer_api_url(&self) -> String {
        format!(
            "https://api-inference.huggingface.co/models/{}",
            self.summarizer_model
        )
    }
}

/// 環境変数から読むシークレット
///
/// 実行形態によって必要なものが変わる（dry-runはSMTP不要など）ため、
/// ワークフロー組み立て時に必要な分だけまとめて検証する。
#[derive(Debug, Clone)]
pub struct Secrets {
    mongo_uri: Option<String>,
    hf_api_key: Option<String>,
    smtp_email: Option<String>,
    smtp_password: Option<String>,
}

impl Secrets {
    /// 環境変数からシークレットを読む（この時点では未検証）
    pub fn from_env() -> Self {
        Self {
            mongo_uri: std::env::var("MONGO_URI").ok(),
            hf_api_key: std::env::var("HF_API_KEY").ok(),
            smtp_email: std::env::var("SMTP_EMAIL").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        }
    }

    /// テスト用コンストラクタ
    pub fn new(
        mongo_uri: Option<String>,
        hf_api_key: Option<String>,
        smtp_email: Option<String>,
        smtp_password: Option<String>,
    ) -> Self {
        Self {
            mongo_uri,
            hf_api_key,
            smtp_email,
            smtp_password,
        }
    }

    pub fn mongo_uri(&self) -> Result<&str> {
        require(&self.mongo_uri, "MONGO_URI")
    }

    pub fn hf_api_key(&self) -> Result<&str> {
        require(&self.hf_api_key, "HF_API_KEY")
    }

    pub fn smtp_email(&self) -> Result<&str> {
        require(&self.smtp_email, "SMTP_EMAIL")
    }

    pub fn smtp_password(&self) -> Result<&str> {
        require(&self.smtp_password, "SMTP_PASSWORD")
    }
}

fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value
        .as_deref()
        .with_context(|| format!("Environment variable {} is not set", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn full_config_json() -> &'static str {
        r#"{
            "database": "showtime_reports",
            "collection": "work_reports",
            "template_path": "templates/tasks_template.xlsx",
            "output_path": "Daily_Work_Report.xlsx",
            "summarizer_model": "facebook/bart-large-cnn",
            "summarizer_timeout_secs": 60,
            "summarizer_max_retries": 2,
            "allow_bullet_fallback": false,
            "max_bullet_points": 4,
            "enable_csv_export": false,
            "smtp_server": "smtp.gmail.com",
            "smtp_port": 587,
            "recipients": ["reports@example.com"]
        }"#
    }

    #[test]
    fn test_config_load_full() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(full_config_json().as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.database, "showtime_reports");
        assert_eq!(config.collection, "work_reports");
        assert_eq!(config.summarizer_timeout_secs, 60);
        assert_eq!(config.summarizer_max_retries, 2);
        assert!(!config.allow_bullet_fallback);
        assert_eq!(config.max_bullet_points, 4);
        assert!(!config.enable_csv_export);
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.recipients, vec!["reports@example.com"]);
    }

    #[test]
    fn test_config_defaults_for_tunables() {
        let json = r#"{
            "database": "db",
            "collection": "coll",
            "template_path": "t.xlsx",
            "output_path": "o.xlsx",
            "summarizer_model": "facebook/bart-large-cnn",
            "smtp_server": "smtp.example.com",
            "smtp_port": 587,
            "recipients": []
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.summarizer_timeout_secs, 120);
        assert_eq!(config.summarizer_max_retries, 3);
        assert!(config.allow_bullet_fallback);
        assert_eq!(config.max_bullet_points, 5);
        assert!(config.enable_csv_export);
    }

    #[test]
    fn test_config_missing_file() {
        let result = Config::load("/nonexistent/worksum.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let result = Config::load(file.path().to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_summarizer_api_url() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(full_config_json().as_bytes()).unwrap();
        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(
            config.summarizer_api_url(),
            "https://api-inference.huggingface.co/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn test_secrets_require_names_the_variable() {
        let secrets = Secrets::new(Some("mongodb://localhost".to_string()), None, None, None);

        assert_eq!(secrets.mongo_uri().unwrap(), "mongodb://localhost");

        let err = secrets.hf_api_key().unwrap_err();
        assert!(err.to_string().contains("HF_API_KEY"));

        let err = secrets.smtp_password().unwrap_err();
        assert!(err.to_string().contains("SMTP_PASSWORD"));
    }
}
