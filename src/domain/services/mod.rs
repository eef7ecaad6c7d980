//! # Domain Services
//!
//! 状態を持たない純粋なビジネスルール
//!
//! - **bullets**: 要約テキストの箇条書き整形とタスクの重複排除
//! - **grouping**: チーム単位のタスク集計と部署・チーム別の報告統計

pub mod bullets;
pub mod grouping;
