//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **StandingRecord**: 順位表の1チーム分のレコード
//! - **TableSchema / TableDefinition**: カタログテーブルのバリューオブジェクト

pub mod standing_record;
pub mod table_schema;
