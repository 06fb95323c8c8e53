//! # Domain Services
//!
//! エンティティにまたがる純粋なビジネスロジック
//!
//! - **StandingsExtractor**: API レスポンスから順位表を取り出す
//! - **NdjsonEncoder**: 改行区切り JSON への変換
//! - **SchemaDriftService**: レコードとカタログスキーマのずれの検出

pub mod ndjson;
pub mod schema_drift;
pub mod standings_extractor;
