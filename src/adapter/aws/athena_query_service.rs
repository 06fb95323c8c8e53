//! Athena Query Service
//!
//! `QueryService` backed by `aws-sdk-athena`.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_sdk_athena::error::DisplayErrorContext;
use aws_sdk_athena::types::{QueryExecutionContext, ResultConfiguration};
use aws_sdk_athena::Client;

use crate::domain::repositories::query_service::QueryService;

pub struct AthenaQueryService {
    client: Client,
}

impl AthenaQueryService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl QueryService for AthenaQueryService {
    async fn start_query(&self, query: &str, database: &str, output_location: &str) -> Result<String> {
        let output = self
            .client
            .start_query_execution()
            .query_string(query)
            .query_execution_context(QueryExecutionContext::builder().database(database).build())
            .result_configuration(
                ResultConfiguration::builder()
                    .output_location(output_location)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

        Ok(output.query_execution_id().unwrap_or_default().to_string())
    }
}
