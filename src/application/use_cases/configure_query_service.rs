//! # Configure Query Service Use Case
//!
//! Athenaのクエリ結果出力先の設定

use log::{error, info};
use std::sync::Arc;

use crate::application::dto::pipeline_config::PipelineConfig;
use crate::application::dto::step_outcome::StepOutcome;
use crate::domain::repositories::query_service::QueryService;

/// クエリサービス設定ユースケース
///
/// 出力先を指定してクエリを1回実行し、Athenaに出力先を認識させる
pub struct ConfigureQueryServiceUseCase<Q: QueryService + ?Sized> {
    query_service: Arc<Q>,
}

impl<Q: QueryService + ?Sized> ConfigureQueryServiceUseCase<Q> {
    pub fn new(query_service: Arc<Q>) -> Self {
        Self { query_service }
    }

    pub async fn execute(&self, config: &PipelineConfig) -> StepOutcome {
        match self
            .query_service
            .start_query(
                &config.athena_query,
                &config.database,
                &config.athena_output_location,
            )
            .await
        {
            Ok(execution_id) => {
                info!(
                    "Athena output location configured: {} (query execution {})",
                    config.athena_output_location, execution_id
                );
                StepOutcome::succeeded(format!(
                    "Athena output location set to {}",
                    config.athena_output_location
                ))
            }
            Err(e) => {
                error!("Error configuring Athena: {:#}", e);
                StepOutcome::failed(format!("Error configuring Athena: {:#}", e))
            }
        }
    }
}
