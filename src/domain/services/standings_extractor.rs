//! # Standings Extractor Service
//!
//! API レスポンスから順位表レコードを取り出すサービス

use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::standing_record::StandingRecord;

/// レスポンスの形が想定と異なる
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("response array is missing")]
    MissingResponse,
    #[error("response array is empty")]
    EmptyResponse,
    #[error("league object is missing")]
    MissingLeague,
    #[error("standings are missing or empty")]
    MissingStandings,
    #[error("first standings group is not a list")]
    MalformedGroup,
}

/// 順位表抽出サービス
///
/// `response[0].league.standings[0]` を取り出す純粋関数
pub struct StandingsExtractor;

impl StandingsExtractor {
    /// 最初の順位表グループを取り出す
    ///
    /// # Arguments
    ///
    /// * `body` - API レスポンスボディ全体
    ///
    /// # Returns
    ///
    /// グループ内のレコード（順序・内容はそのまま）
    ///
    /// # Errors
    ///
    /// ネストが欠けている、または形が崩れている場合に `ShapeError`
    pub fn try_extract(body: &Value) -> Result<Vec<StandingRecord>, ShapeError> {
        let response = body
            .get("response")
            .and_then(Value::as_array)
            .ok_or(ShapeError::MissingResponse)?;

        let first = response.first().ok_or(ShapeError::EmptyResponse)?;

        let league = first
            .get("league")
            .filter(|league| league.is_object())
            .ok_or(ShapeError::MissingLeague)?;

        let standings = league
            .get("standings")
            .and_then(Value::as_array)
            .filter(|standings| !standings.is_empty())
            .ok_or(ShapeError::MissingStandings)?;

        let group = standings[0].as_array().ok_or(ShapeError::MalformedGroup)?;

        Ok(group.iter().cloned().map(StandingRecord::new).collect())
    }

    /// 最初の順位表グループを取り出す（形が崩れていれば空）
    pub fn extract(body: &Value) -> Vec<StandingRecord> {
        Self::try_extract(body).unwrap_or_default()
    }
}
