//! S3 Object Store
//!
//! `ObjectStore` backed by `aws-sdk-s3`.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;

use crate::domain::errors::AlreadyExists;
use crate::domain::repositories::object_store::ObjectStore;

pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// us-east-1 rejects an explicit location constraint; every other region needs one
pub fn requires_location_constraint(region: &str) -> bool {
    region != "us-east-1"
}

pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()> {
        let mut request = self.client.create_bucket().bucket(bucket);
        if requires_location_constraint(region) {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region))
                    .build(),
            );
        }

        match request.send().await {
            Ok(_) => Ok(()),
            Err(e) => {
                let exists = e.as_service_error().is_some_and(|se| {
                    se.is_bucket_already_exists() || se.is_bucket_already_owned_by_you()
                });
                if exists {
                    Err(AlreadyExists::new("S3 bucket", bucket).into())
                } else {
                    Err(anyhow!("{}", DisplayErrorContext(&e)))
                }
            }
        }
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) if e.as_service_error().is_some_and(|se| se.is_not_found()) => Ok(false),
            Err(e) => Err(anyhow!("{}", DisplayErrorContext(&e))),
        }
    }

    async fn put_object(&self, bucket: &str, key: &str, body: String) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(NDJSON_CONTENT_TYPE)
            .body(ByteStream::from(body.into_bytes()))
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;
        Ok(())
    }
}
