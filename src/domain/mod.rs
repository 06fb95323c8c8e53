//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - クラウドSDKやHTTPクライアントについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（StandingRecord, TableSchemaなど）
//! - **errors**: 型付きのドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（抽出・シリアライズ・スキーマ検査）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
