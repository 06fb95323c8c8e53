//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::adapter::aws::AwsClients;
use crate::adapter::config::Config;
use crate::adapter::http::ApiFootballClient;
use crate::application::dto::pipeline_config::PipelineConfig;
use crate::application::dto::step_outcome::{RunReport, Step, StepOutcome};
use crate::application::use_cases::configure_query_service::ConfigureQueryServiceUseCase;
use crate::application::use_cases::prepare_standings::{PrepareStandingsUseCase, PreparedStandings};
use crate::application::use_cases::provision_catalog::ProvisionCatalogUseCase;
use crate::application::use_cases::provision_storage::ProvisionStorageUseCase;
use crate::application::use_cases::upload_standings::UploadStandingsUseCase;
use crate::domain::repositories::catalog_repository::CatalogRepository;
use crate::domain::repositories::object_store::ObjectStore;
use crate::domain::repositories::query_service::QueryService;
use crate::domain::repositories::standings_source::StandingsSource;

use super::cli::Args;

/// ステップの結果を表示してレポートに記録する
fn record(report: &mut RunReport, step: Step, outcome: StepOutcome) {
    println!("{} {}: {}", outcome.symbol(), step, outcome.message());
    report.record(step, outcome);
}

/// Data Lake Setup Workflow
///
/// バケット → データベース → 取得・アップロード → テーブル → Athena の順に1回ずつ実行する。
/// どのステップが失敗しても後続のステップは実行する。
pub struct DataLakeWorkflow {
    config: PipelineConfig,
    storage_use_case: ProvisionStorageUseCase<dyn ObjectStore>,
    catalog_use_case: ProvisionCatalogUseCase<dyn CatalogRepository>,
    prepare_use_case: PrepareStandingsUseCase<dyn StandingsSource>,
    upload_use_case: UploadStandingsUseCase<dyn ObjectStore>,
    query_use_case: ConfigureQueryServiceUseCase<dyn QueryService>,
}

impl DataLakeWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(
        config: PipelineConfig,
        source: Arc<dyn StandingsSource>,
        object_store: Arc<dyn ObjectStore>,
        catalog: Arc<dyn CatalogRepository>,
        query_service: Arc<dyn QueryService>,
    ) -> Self {
        Self {
            config,
            storage_use_case: ProvisionStorageUseCase::new(object_store.clone()),
            catalog_use_case: ProvisionCatalogUseCase::new(catalog),
            prepare_use_case: PrepareStandingsUseCase::new(source),
            upload_use_case: UploadStandingsUseCase::new(object_store),
            query_use_case: ConfigureQueryServiceUseCase::new(query_service),
        }
    }

    /// Wire the workflow to the real AWS and API-Football adapters
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn from_config(config: &Config) -> Self {
        let clients = AwsClients::load(&config.region).await;
        Self::new(
            config.to_pipeline_config(),
            Arc::new(ApiFootballClient::from_config(config)),
            Arc::new(clients.object_store),
            Arc::new(clients.catalog),
            Arc::new(clients.query_service),
        )
    }

    /// Execute the setup workflow
    pub async fn execute(&self) -> RunReport {
        let mut report = RunReport::new();

        let outcome = self.storage_use_case.create_bucket(&self.config).await;
        record(&mut report, Step::CreateBucket, outcome);

        let outcome = self.storage_use_case.wait_until_ready(&self.config).await;
        record(&mut report, Step::WaitForBucket, outcome);

        let outcome = self.catalog_use_case.create_database(&self.config).await;
        record(&mut report, Step::CreateDatabase, outcome);

        let prepared = self.prepare_use_case.execute(&self.config).await;
        record(&mut report, Step::FetchStandings, prepared.fetch.clone());
        record(&mut report, Step::ExtractStandings, prepared.extract.clone());

        let outcome = self.upload_use_case.execute(&self.config, &prepared).await;
        record(&mut report, Step::UploadStandings, outcome);

        let outcome = self.catalog_use_case.create_table(&self.config).await;
        record(&mut report, Step::CreateTable, outcome);

        let outcome = self.query_use_case.execute(&self.config).await;
        record(&mut report, Step::ConfigureQueryOutput, outcome);

        report
    }
}

/// 取得と変換だけを行い、AWSには触れない
pub async fn preview_standings(
    config: &PipelineConfig,
    source: Arc<dyn StandingsSource>,
) -> PreparedStandings {
    let prepared = PrepareStandingsUseCase::new(source).execute(config).await;

    let mut report = RunReport::new();
    record(&mut report, Step::FetchStandings, prepared.fetch.clone());
    record(&mut report, Step::ExtractStandings, prepared.extract.clone());

    if !prepared.records.is_empty() {
        println!("  Would upload {} records to {}:", prepared.records.len(), config.data_uri());
        for standing in &prepared.records {
            println!(
                "    {:>2}. {:<28} {:>3} pts  GD {:>4}",
                standing.rank().unwrap_or_default(),
                standing.team_name().unwrap_or("?"),
                standing.points().unwrap_or_default(),
                standing.goals_diff().unwrap_or_default()
            );
        }
    }

    prepared
}

fn load_env_file(path: &str) {
    let expanded = shellexpand::tilde(path).to_string();
    match dotenvy::from_path(&expanded) {
        Ok(()) => info!("Loaded environment from {}", path),
        Err(e) if e.not_found() => info!("No env file at {}, using process environment", path),
        Err(e) => warn!("Failed to load env file {}: {}", path, e),
    }
}

/// CLI entry point: load configuration and run the workflow
///
/// Only startup failures (config file, missing API key) return `Err`.
pub async fn run(args: Args) -> Result<()> {
    load_env_file(&args.env_file);
    let config = Config::load(args.config.as_deref())?;

    let run_id = uuid::Uuid::new_v4();
    let started_at = Utc::now();
    info!("Run {} started at {}", run_id, started_at.to_rfc3339());

    println!("✓ Using configuration:");
    println!("  Region: {}", config.region);
    println!("  Bucket: {}", config.bucket_name);
    println!("  Glue database: {}", config.glue_database_name);
    println!("  Data source: {}", config.api_base_url());
    println!("  League: {} / Season: {}", config.league_id, config.season);

    if args.dry_run {
        println!("✓ Dry-run mode (no AWS calls)");
        let source = Arc::new(ApiFootballClient::from_config(&config));
        preview_standings(&config.to_pipeline_config(), source).await;
        return Ok(());
    }

    println!("Setting up data lake for Premier League analytics...");
    let workflow = DataLakeWorkflow::from_config(&config).await;
    let report = workflow.execute().await;

    let elapsed = Utc::now() - started_at;
    info!("Run {} finished in {} ms", run_id, elapsed.num_milliseconds());

    println!(
        "Data lake setup complete. ({} succeeded, {} failed, {} skipped)",
        report.succeeded_count(),
        report.failed_count(),
        report.skipped_count()
    );

    Ok(())
}
