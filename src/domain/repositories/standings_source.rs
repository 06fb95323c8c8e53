//! # Standings Source Trait
//!
//! 順位表データの取得元を抽象化

use async_trait::async_trait;
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::FetchError;

/// 順位表データソース
///
/// 外部 HTTP API から順位表のレスポンスを1回だけ取得する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StandingsSource: Send + Sync {
    /// 順位表を取得する
    ///
    /// # Arguments
    ///
    /// * `league` - リーグID（プレミアリーグは 39）
    /// * `season` - シーズン（開始年）
    ///
    /// # Returns
    ///
    /// パース済みのレスポンスボディ全体（`response` 配列が空でないもの）
    ///
    /// # Errors
    ///
    /// 2xx 以外のステータス、空のペイロード、通信やデコードの失敗
    async fn fetch_standings(&self, league: u32, season: u16) -> Result<Value, FetchError>;
}
