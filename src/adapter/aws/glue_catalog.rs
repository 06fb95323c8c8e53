//! Glue Catalog Repository
//!
//! `CatalogRepository` backed by `aws-sdk-glue`.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_sdk_glue::error::DisplayErrorContext;
use aws_sdk_glue::types::{
    Column as GlueColumn, DatabaseInput, SerDeInfo, StorageDescriptor, TableInput,
};
use aws_sdk_glue::Client;

use crate::domain::entities::table_schema::TableDefinition;
use crate::domain::errors::AlreadyExists;
use crate::domain::repositories::catalog_repository::CatalogRepository;

/// Builds the `DatabaseInput` for `create_database`
pub fn database_input(name: &str, description: &str) -> Result<DatabaseInput> {
    DatabaseInput::builder()
        .name(name)
        .description(description)
        .build()
        .context("Invalid Glue database input")
}

/// Builds the `TableInput` for `create_table`
pub fn table_input(table: &TableDefinition) -> Result<TableInput> {
    let columns = table
        .schema
        .columns()
        .iter()
        .map(|column| {
            GlueColumn::builder()
                .name(&column.name)
                .r#type(&column.data_type)
                .build()
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Invalid Glue column")?;

    let storage = StorageDescriptor::builder()
        .set_columns(Some(columns))
        .location(&table.location)
        .input_format(&table.input_format)
        .output_format(&table.output_format)
        .serde_info(
            SerDeInfo::builder()
                .serialization_library(&table.serialization_library)
                .build(),
        )
        .build();

    TableInput::builder()
        .name(&table.name)
        .storage_descriptor(storage)
        .table_type(&table.table_type)
        .build()
        .context("Invalid Glue table input")
}

pub struct GlueCatalogRepository {
    client: Client,
}

impl GlueCatalogRepository {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl CatalogRepository for GlueCatalogRepository {
    async fn create_database(&self, name: &str, description: &str) -> Result<()> {
        let input = database_input(name, description)?;

        match self.client.create_database().database_input(input).send().await {
            Ok(_) => Ok(()),
            Err(e) if e
                .as_service_error()
                .is_some_and(|se| se.is_already_exists_exception()) =>
            {
                Err(AlreadyExists::new("Glue database", name).into())
            }
            Err(e) => Err(anyhow!("{}", DisplayErrorContext(&e))),
        }
    }

    async fn create_table(&self, database: &str, table: &TableDefinition) -> Result<()> {
        let input = table_input(table)?;

        match self
            .client
            .create_table()
            .database_name(database)
            .table_input(input)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if e
                .as_service_error()
                .is_some_and(|se| se.is_already_exists_exception()) =>
            {
                Err(AlreadyExists::new("Glue table", table.name.as_str()).into())
            }
            Err(e) => Err(anyhow!("{}", DisplayErrorContext(&e))),
        }
    }
}
