//! # Schema Drift Service
//!
//! 書き込むレコードとカタログスキーマのずれを検出する

use std::collections::BTreeSet;

use crate::domain::entities::standing_record::StandingRecord;
use crate::domain::entities::table_schema::TableSchema;

/// スキーマのずれ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDrift {
    /// スキーマにないレコードのキー（クエリから見えない）
    pub unknown_keys: BTreeSet<String>,
    /// どのレコードにも現れないカラム（クエリで常に null）
    pub missing_columns: BTreeSet<String>,
}

impl SchemaDrift {
    pub fn is_empty(&self) -> bool {
        self.unknown_keys.is_empty() && self.missing_columns.is_empty()
    }
}

/// スキーマ整合性チェックサービス
pub struct SchemaDriftService;

impl SchemaDriftService {
    /// レコードのトップレベルキーとカラムを比較する
    ///
    /// オブジェクトでないレコードは無視する。レコードが空の場合はずれなし。
    pub fn detect(schema: &TableSchema, records: &[StandingRecord]) -> SchemaDrift {
        if records.is_empty() {
            return SchemaDrift::default();
        }

        let seen: BTreeSet<&str> = records
            .iter()
            .filter_map(StandingRecord::fields)
            .flat_map(|fields| fields.keys().map(String::as_str))
            .collect();

        let unknown_keys = seen
            .iter()
            .filter(|key| !schema.contains(key))
            .map(|key| key.to_string())
            .collect();

        let missing_columns = schema
            .column_names()
            .filter(|name| !seen.contains(name))
            .map(str::to_string)
            .collect();

        SchemaDrift {
            unknown_keys,
            missing_columns,
        }
    }
}
