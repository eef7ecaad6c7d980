//! # Bullet Service
//!
//! 要約テキストを箇条書きに整形するサービス
//!
//! 要約APIの出力は平文の段落なので、文単位に分割して最大N点の
//! 箇条書きへ変換する。APIが使えない場合のフォールバックとして、
//! タスクをそのまま箇条書きにする経路も提供する。

/// 箇条書きに採用する文の最小長
///
/// これより短い断片はノイズとして捨てる
const MIN_FRAGMENT_LEN: usize = 11;

/// 箇条書き整形サービス
pub struct BulletService;

impl BulletService {
    /// 要約テキストを最大 `max_points` 点の箇条書きに分割する
    ///
    /// # Arguments
    ///
    /// * `text` - 要約APIが返した平文
    /// * `max_points` - 採用する最大点数
    ///
    /// # Returns
    ///
    /// 整形済みの箇条書き（接頭辞なし）。文分割で何も残らなければ
    /// 改行・セミコロン区切りで再分割する。
    pub fn split_to_bullets(text: &str, max_points: usize) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let mut clean: Vec<String> = split_sentences(text)
            .into_iter()
            .map(|s| s.trim().trim_end_matches(['.', '!', '?']).to_string())
            .filter(|s| s.len() >= MIN_FRAGMENT_LEN)
            .collect();

        if clean.is_empty() {
            clean = text
                .split(['\n', ';'])
                .map(|p| p.trim().to_string())
                .filter(|p| p.len() >= MIN_FRAGMENT_LEN)
                .collect();
        }

        clean.truncate(max_points);
        clean
    }

    /// タスクの重複を（先勝ちで）排除する
    ///
    /// 空文字列は除外。順序は最初の出現順を保つ。
    pub fn dedup_tasks(tasks: &[String]) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        tasks
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect()
    }

    /// タスクをそのまま箇条書きにするフォールバック
    ///
    /// 重複排除後、先頭から最大 `max_bullets` 件を採用する
    pub fn bulletify(tasks: &[String], max_bullets: usize) -> Vec<String> {
        let mut deduped = Self::dedup_tasks(tasks);
        deduped.truncate(max_bullets);
        deduped
    }
}

/// `.` `!` `?` の直後に空白が続く位置で文分割する
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_none_or(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            if !current.trim().is_empty() {
                sentences.push(current.trim().to_string());
            }
            current.clear();
        }
    }

    if !current.trim().is_empty() {
        sentences.push(current.trim().to_string());
    }

    sentences
}
