//! # Provision Storage Use Case
//!
//! S3バケットの作成と準備完了の確認

use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::application::dto::pipeline_config::PipelineConfig;
use crate::application::dto::step_outcome::StepOutcome;
use crate::domain::errors::AlreadyExists;
use crate::domain::repositories::object_store::ObjectStore;

/// ストレージ準備ユースケース
pub struct ProvisionStorageUseCase<S: ObjectStore + ?Sized> {
    object_store: Arc<S>,
}

impl<S: ObjectStore + ?Sized> ProvisionStorageUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `object_store` - オブジェクトストア
    pub fn new(object_store: Arc<S>) -> Self {
        Self { object_store }
    }

    /// バケットを作成する
    ///
    /// 既に存在する場合も含め、失敗はログに残して結果として返す
    pub async fn create_bucket(&self, config: &PipelineConfig) -> StepOutcome {
        match self
            .object_store
            .create_bucket(&config.bucket, &config.region)
            .await
        {
            Ok(()) => {
                info!("S3 bucket '{}' created successfully", config.bucket);
                StepOutcome::succeeded(format!("S3 bucket '{}' created", config.bucket))
            }
            Err(e) => {
                if AlreadyExists::is_in(&e) {
                    warn!("Error creating S3 bucket: {:#}", e);
                } else {
                    error!("Error creating S3 bucket: {:#}", e);
                }
                StepOutcome::failed(format!("Error creating S3 bucket: {:#}", e))
            }
        }
    }

    /// バケットが参照可能になるまで待つ
    ///
    /// `ReadinessPolicy` の回数だけ確認し、間は指数バックオフで待つ
    pub async fn wait_until_ready(&self, config: &PipelineConfig) -> StepOutcome {
        let policy = config.readiness;

        for attempt in 1..=policy.max_attempts {
            match self.object_store.bucket_exists(&config.bucket).await {
                Ok(true) => {
                    info!(
                        "S3 bucket '{}' is ready (attempt {}/{})",
                        config.bucket, attempt, policy.max_attempts
                    );
                    return StepOutcome::succeeded(format!(
                        "S3 bucket '{}' is ready",
                        config.bucket
                    ));
                }
                Ok(false) => {
                    info!(
                        "S3 bucket '{}' not visible yet (attempt {}/{})",
                        config.bucket, attempt, policy.max_attempts
                    );
                }
                Err(e) => {
                    warn!(
                        "Failed to check S3 bucket '{}' (attempt {}/{}): {:#}",
                        config.bucket, attempt, policy.max_attempts, e
                    );
                }
            }

            if attempt < policy.max_attempts {
                let delay = policy.delay_for(attempt);
                if delay > 0 {
                    sleep(Duration::from_millis(delay)).await;
                }
            }
        }

        error!(
            "S3 bucket '{}' not ready after {} attempts",
            config.bucket, policy.max_attempts
        );
        StepOutcome::failed(format!(
            "S3 bucket '{}' not ready after {} attempts",
            config.bucket, policy.max_attempts
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::readiness_policy::ReadinessPolicy;
    use crate::domain::repositories::object_store::MockObjectStore;

    fn create_test_config(max_attempts: u32) -> PipelineConfig {
        PipelineConfig::new(
            "eu-west-2".to_string(),
            "test-bucket".to_string(),
            "test_db".to_string(),
            "test database".to_string(),
            "test_table".to_string(),
            "raw-data/test.jsonl".to_string(),
            "s3://test-bucket/athena-results/".to_string(),
            "SELECT 1".to_string(),
            39,
            2023,
            ReadinessPolicy::immediate(max_attempts),
        )
    }

    #[tokio::test]
    async fn test_create_bucket_success() {
        let mut mock = MockObjectStore::new();
        mock.expect_create_bucket()
            .withf(|bucket, region| bucket == "test-bucket" && region == "eu-west-2")
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = ProvisionStorageUseCase::new(Arc::new(mock));
        let outcome = use_case.create_bucket(&create_test_config(1)).await;

        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_create_bucket_already_exists_is_reported() {
        let mut mock = MockObjectStore::new();
        mock.expect_create_bucket()
            .returning(|bucket, _| Err(AlreadyExists::new("S3 bucket", bucket).into()));

        let use_case = ProvisionStorageUseCase::new(Arc::new(mock));
        let outcome = use_case.create_bucket(&create_test_config(1)).await;

        assert!(outcome.is_failure());
        assert!(outcome.message().contains("already exists"));
    }

    #[tokio::test]
    async fn test_create_bucket_other_error() {
        let mut mock = MockObjectStore::new();
        mock.expect_create_bucket()
            .returning(|_, _| Err(anyhow::anyhow!("AccessDenied")));

        let use_case = ProvisionStorageUseCase::new(Arc::new(mock));
        let outcome = use_case.create_bucket(&create_test_config(1)).await;

        assert_eq!(
            outcome,
            StepOutcome::failed("Error creating S3 bucket: AccessDenied")
        );
    }

    #[tokio::test]
    async fn test_wait_until_ready_first_attempt() {
        let mut mock = MockObjectStore::new();
        mock.expect_bucket_exists().times(1).returning(|_| Ok(true));

        let use_case = ProvisionStorageUseCase::new(Arc::new(mock));
        let outcome = use_case.wait_until_ready(&create_test_config(5)).await;

        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_wait_until_ready_after_retries() {
        let mut mock = MockObjectStore::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_bucket_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));
        mock.expect_bucket_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(anyhow::anyhow!("503 Service Unavailable")));
        mock.expect_bucket_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));

        let use_case = ProvisionStorageUseCase::new(Arc::new(mock));
        let outcome = use_case.wait_until_ready(&create_test_config(5)).await;

        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_wait_until_ready_gives_up() {
        let mut mock = MockObjectStore::new();
        mock.expect_bucket_exists().times(3).returning(|_| Ok(false));

        let use_case = ProvisionStorageUseCase::new(Arc::new(mock));
        let outcome = use_case.wait_until_ready(&create_test_config(3)).await;

        assert_eq!(
            outcome,
            StepOutcome::failed("S3 bucket 'test-bucket' not ready after 3 attempts")
        );
    }

    #[tokio::test]
    async fn test_wait_until_ready_zero_attempts() {
        let mut mock = MockObjectStore::new();
        mock.expect_bucket_exists().never();

        let use_case = ProvisionStorageUseCase::new(Arc::new(mock));
        let outcome = use_case.wait_until_ready(&create_test_config(0)).await;

        assert!(outcome.is_failure());
    }
}
