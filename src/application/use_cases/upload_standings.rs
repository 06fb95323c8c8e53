//! # Upload Standings Use Case
//!
//! NDJSON本文を固定キーに書き込む

use log::{error, info};
use std::sync::Arc;

use crate::application::dto::pipeline_config::PipelineConfig;
use crate::application::dto::step_outcome::StepOutcome;
use crate::domain::repositories::object_store::ObjectStore;

use super::prepare_standings::PreparedStandings;

/// 順位表アップロードユースケース
///
/// 既存のオブジェクトは丸ごと置き換える
pub struct UploadStandingsUseCase<S: ObjectStore + ?Sized> {
    object_store: Arc<S>,
}

impl<S: ObjectStore + ?Sized> UploadStandingsUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `object_store` - オブジェクトストア
    pub fn new(object_store: Arc<S>) -> Self {
        Self { object_store }
    }

    /// 準備済みの順位表をアップロードする
    ///
    /// 本文がない場合はアップロードせず `Skipped` を返す
    pub async fn execute(&self, config: &PipelineConfig, prepared: &PreparedStandings) -> StepOutcome {
        let Some(payload) = prepared.payload.as_ref() else {
            info!("No standings records to upload");
            return StepOutcome::skipped("No standings records to upload");
        };

        match self
            .object_store
            .put_object(&config.bucket, &config.data_key, payload.clone())
            .await
        {
            Ok(()) => {
                info!("Uploaded data to S3: {}", config.data_key);
                StepOutcome::succeeded(format!(
                    "Uploaded {} records to {}",
                    prepared.records.len(),
                    config.data_uri()
                ))
            }
            Err(e) => {
                error!("Error uploading data to S3: {:#}", e);
                StepOutcome::failed(format!("Error uploading data to S3: {:#}", e))
            }
        }
    }
}
