//! AWS Client Construction
//!
//! Credentials come from the default provider chain (env, profile, IMDS).

use aws_config::{BehaviorVersion, Region, SdkConfig};

use super::athena_query_service::AthenaQueryService;
use super::glue_catalog::GlueCatalogRepository;
use super::s3_object_store::S3ObjectStore;

/// Loads the shared SDK configuration for `region`
#[cfg_attr(coverage_nightly, coverage(off))]
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

/// S3, Glue and Athena adapters sharing one SDK configuration
pub struct AwsClients {
    pub object_store: S3ObjectStore,
    pub catalog: GlueCatalogRepository,
    pub query_service: AthenaQueryService,
}

impl AwsClients {
    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
        Self {
            object_store: S3ObjectStore::new(aws_sdk_s3::Client::new(sdk_config)),
            catalog: GlueCatalogRepository::new(aws_sdk_glue::Client::new(sdk_config)),
            query_service: AthenaQueryService::new(aws_sdk_athena::Client::new(sdk_config)),
        }
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn load(region: &str) -> Self {
        let sdk_config = load_sdk_config(region).await;
        Self::from_sdk_config(&sdk_config)
    }
}
