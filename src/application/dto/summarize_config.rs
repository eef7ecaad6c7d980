//! # Summarize Configuration DTO
//!
//! 要約ステージの実行時設定のData Transfer Object
//!
//! リトライや部分失敗の扱いは推測ではなく明示的な設定項目とする。

/// 要約設定
#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    /// 1チームあたりの最大箇条書き点数
    pub max_bullet_points: usize,
    /// 要約API失敗時にタスクの逐語箇条書きへ退避するか
    ///
    /// `false` の場合、要約の失敗は実行全体を打ち切る
    pub allow_bullet_fallback: bool,
    /// このタスク数以下なら単一呼び出しで要約する
    pub single_call_max_tasks: usize,
    /// 単一呼び出しに使う結合テキストの最大文字数
    pub single_call_max_chars: usize,
    /// 分割要約時の1チャンクあたりのタスク数
    pub chunk_size: usize,
}

impl SummarizeConfig {
    /// 新しい要約設定を作成
    ///
    /// 分割戦略のしきい値は既定値（6タスク/1200文字/チャンク10件）を使う
    pub fn new(max_bullet_points: usize, allow_bullet_fallback: bool) -> Self {
        Self {
            max_bullet_points,
            allow_bullet_fallback,
            single_call_max_tasks: 6,
            single_call_max_chars: 1200,
            chunk_size: 10,
        }
    }
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self::new(5, true)
    }
}
