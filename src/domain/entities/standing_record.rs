//! # StandingRecord Entity
//!
//! リーグ順位表の1チーム分のレコード

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 順位表レコード
///
/// API-Football の `standings` 配列の1要素をそのまま保持する。
/// フィールドの順序と未知のフィールドを保つため、型付き構造体には変換しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandingRecord(Value);

impl StandingRecord {
    /// JSON値からレコードを作成
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// 元のJSON値への参照を返す
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// 元のJSON値の所有権を移動して返す
    pub fn into_value(self) -> Value {
        self.0
    }

    /// オブジェクトとしてのフィールドを返す（オブジェクトでない場合は `None`）
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// 順位
    pub fn rank(&self) -> Option<i64> {
        self.0.get("rank").and_then(Value::as_i64)
    }

    /// 勝ち点
    pub fn points(&self) -> Option<i64> {
        self.0.get("points").and_then(Value::as_i64)
    }

    /// 得失点差
    pub fn goals_diff(&self) -> Option<i64> {
        self.0.get("goalsDiff").and_then(Value::as_i64)
    }

    /// チーム名
    pub fn team_name(&self) -> Option<&str> {
        self.0
            .get("team")
            .and_then(|team| team.get("name"))
            .and_then(Value::as_str)
    }

    /// 全試合の試合数
    pub fn played(&self) -> Option<i64> {
        self.0
            .get("all")
            .and_then(|all| all.get("played"))
            .and_then(Value::as_i64)
    }
}

impl From<Value> for StandingRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<StandingRecord> for Value {
    fn from(record: StandingRecord) -> Self {
        record.into_value()
    }
}
