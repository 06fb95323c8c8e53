//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ProvisionStorageUseCase**: S3バケットの作成と準備完了の確認
//! - **ProvisionCatalogUseCase**: Glueデータベースとテーブルの登録
//! - **PrepareStandingsUseCase**: 順位表の取得・抽出・NDJSON変換
//! - **UploadStandingsUseCase**: 順位表のアップロード
//! - **ConfigureQueryServiceUseCase**: Athena出力先の設定

pub mod configure_query_service;
pub mod prepare_standings;
pub mod provision_catalog;
pub mod provision_storage;
pub mod upload_standings;
