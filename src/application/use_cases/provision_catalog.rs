//! # Provision Catalog Use Case
//!
//! Glueデータベースとテーブルの登録

use log::{error, info, warn};
use std::sync::Arc;

use crate::application::dto::pipeline_config::PipelineConfig;
use crate::application::dto::step_outcome::StepOutcome;
use crate::domain::entities::table_schema::{TableDefinition, TableSchema};
use crate::domain::errors::AlreadyExists;
use crate::domain::repositories::catalog_repository::CatalogRepository;

/// カタログ登録ユースケース
pub struct ProvisionCatalogUseCase<C: CatalogRepository + ?Sized> {
    catalog: Arc<C>,
}

impl<C: CatalogRepository + ?Sized> ProvisionCatalogUseCase<C> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `catalog` - カタログリポジトリ
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// 順位表テーブルの定義を組み立てる
    pub fn table_definition(config: &PipelineConfig) -> TableDefinition {
        TableDefinition::json_lines(
            config.table.clone(),
            TableSchema::standings(),
            config.table_location(),
        )
    }

    /// データベースを作成する
    pub async fn create_database(&self, config: &PipelineConfig) -> StepOutcome {
        match self
            .catalog
            .create_database(&config.database, &config.database_description)
            .await
        {
            Ok(()) => {
                info!("Glue database '{}' created successfully", config.database);
                StepOutcome::succeeded(format!("Glue database '{}' created", config.database))
            }
            Err(e) => Self::report_failure("Error creating Glue database", &e),
        }
    }

    /// テーブルを作成する
    pub async fn create_table(&self, config: &PipelineConfig) -> StepOutcome {
        let definition = Self::table_definition(config);

        match self
            .catalog
            .create_table(&config.database, &definition)
            .await
        {
            Ok(()) => {
                info!(
                    "Glue table '{}' created successfully ({} columns, location {})",
                    definition.name,
                    definition.schema.columns().len(),
                    definition.location
                );
                StepOutcome::succeeded(format!("Glue table '{}' created", definition.name))
            }
            Err(e) => Self::report_failure("Error creating Glue table", &e),
        }
    }

    fn report_failure(what: &str, e: &anyhow::Error) -> StepOutcome {
        if AlreadyExists::is_in(e) {
            warn!("{}: {:#}", what, e);
        } else {
            error!("{}: {:#}", what, e);
        }
        StepOutcome::failed(format!("{}: {:#}", what, e))
    }
}
