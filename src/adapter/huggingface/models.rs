//! Hugging Face Inference API のリクエスト/レスポンス形
//!
//! レスポンスはモデルやデプロイ形態によって「オブジェクトの配列」
//! 「単一オブジェクト」「素の文字列」のいずれかで返るため、
//! 抽出は `serde_json::Value` ベースで寛容に行う。

use serde::Serialize;

/// 要約テキストが入り得るレスポンスキー（優先順）
const SUMMARY_KEYS: [&str; 3] = ["summary_text", "generated_text", "text"];

/// 要約リクエストのパラメータ
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for SummarizeParameters {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 30,
            do_sample: false,
        }
    }
}

/// 要約リクエスト
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    pub inputs: String,
    pub parameters: SummarizeParameters,
}

impl SummarizeRequest {
    /// 既定パラメータで新しいリクエストを作成
    pub fn new(text: &str) -> Self {
        Self {
            inputs: text.to_string(),
            parameters: SummarizeParameters::default(),
        }
    }
}

/// レスポンスから要約テキストを取り出す
///
/// 配列・オブジェクト・文字列のどの形でも、最初に見つかった
/// 要約キーの文字列値を返す。見つからなければ `None`。
pub fn extract_summary(response: &serde_json::Value) -> Option<String> {
    match response {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(items) => items.first().and_then(extract_summary),
        serde_json::Value::Object(map) => SUMMARY_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .map(|s| s.to_string()),
        _ => None,
    }
}
