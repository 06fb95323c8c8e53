//! # Prepare Standings Use Case
//!
//! 順位表の取得・抽出・NDJSON変換

use log::{error, info, warn};
use std::sync::Arc;

use crate::application::dto::pipeline_config::PipelineConfig;
use crate::application::dto::step_outcome::StepOutcome;
use crate::domain::entities::standing_record::StandingRecord;
use crate::domain::entities::table_schema::TableSchema;
use crate::domain::repositories::standings_source::StandingsSource;
use crate::domain::services::ndjson::NdjsonEncoder;
use crate::domain::services::schema_drift::SchemaDriftService;
use crate::domain::services::standings_extractor::StandingsExtractor;

/// アップロード前の順位表データ
#[derive(Debug, Clone)]
pub struct PreparedStandings {
    /// 取得ステップの結果
    pub fetch: StepOutcome,
    /// 抽出ステップの結果
    pub extract: StepOutcome,
    /// 抽出されたレコード
    pub records: Vec<StandingRecord>,
    /// NDJSON本文（アップロードするものがない場合は `None`）
    pub payload: Option<String>,
}

impl PreparedStandings {
    fn without_payload(fetch: StepOutcome, extract: StepOutcome, records: Vec<StandingRecord>) -> Self {
        Self {
            fetch,
            extract,
            records,
            payload: None,
        }
    }
}

/// 順位表準備ユースケース
pub struct PrepareStandingsUseCase<F: StandingsSource + ?Sized> {
    source: Arc<F>,
}

impl<F: StandingsSource + ?Sized> PrepareStandingsUseCase<F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `source` - 順位表データソース
    pub fn new(source: Arc<F>) -> Self {
        Self { source }
    }

    /// 順位表を取得し、最初のグループを NDJSON にする
    ///
    /// 失敗はすべて結果に記録し、呼び出し側には返さない
    pub async fn execute(&self, config: &PipelineConfig) -> PreparedStandings {
        let body = match self
            .source
            .fetch_standings(config.league, config.season)
            .await
        {
            Ok(body) => body,
            Err(e) => {
                error!("{}", e);
                return PreparedStandings::without_payload(
                    StepOutcome::failed(e.to_string()),
                    StepOutcome::skipped("No API response to extract from"),
                    Vec::new(),
                );
            }
        };

        info!("Standings data fetched successfully");
        let fetch = StepOutcome::succeeded(format!(
            "Standings fetched (league {}, season {})",
            config.league, config.season
        ));

        let records = match StandingsExtractor::try_extract(&body) {
            Ok(records) => records,
            Err(shape) => {
                warn!(
                    "Standings data is missing or malformed in API response: {}",
                    shape
                );
                return PreparedStandings::without_payload(
                    fetch,
                    StepOutcome::failed(format!(
                        "Standings data is missing or malformed in API response: {}",
                        shape
                    )),
                    Vec::new(),
                );
            }
        };

        info!("Standings data extracted successfully: {} records", records.len());

        let drift = SchemaDriftService::detect(&TableSchema::standings(), &records);
        if !drift.unknown_keys.is_empty() {
            warn!(
                "Fields not in the catalog schema will not be queryable: {:?}",
                drift.unknown_keys
            );
        }
        if !drift.missing_columns.is_empty() {
            info!(
                "Catalog columns absent from fetched records: {:?}",
                drift.missing_columns
            );
        }

        if records.is_empty() {
            return PreparedStandings::without_payload(
                fetch,
                StepOutcome::succeeded("Extracted 0 standings records"),
                records,
            );
        }

        info!("Converting data to line-delimited JSON format...");
        match NdjsonEncoder::encode(&records) {
            Ok(payload) => PreparedStandings {
                fetch,
                extract: StepOutcome::succeeded(format!(
                    "Extracted {} standings records",
                    records.len()
                )),
                records,
                payload: Some(payload),
            },
            Err(e) => {
                error!("Error converting standings to line-delimited JSON: {:#}", e);
                PreparedStandings::without_payload(
                    fetch,
                    StepOutcome::failed(format!(
                        "Error converting standings to line-delimited JSON: {:#}",
                        e
                    )),
                    records,
                )
            }
        }
    }
}
