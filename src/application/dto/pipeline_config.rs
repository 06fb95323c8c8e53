//! # Pipeline Configuration DTO
//!
//! データレイク構築に必要な設定のData Transfer Object

use super::readiness_policy::ReadinessPolicy;

/// パイプライン設定
///
/// 起動時に一度だけ組み立て、以後は読み取り専用で各ユースケースに渡す
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// AWSリージョン（例: "us-east-1"）
    pub region: String,
    /// S3バケット名
    pub bucket: String,
    /// Glueデータベース名
    pub database: String,
    /// Glueデータベースの説明
    pub database_description: String,
    /// Glueテーブル名
    pub table: String,
    /// 順位表データのオブジェクトキー
    pub data_key: String,
    /// Athenaのクエリ結果出力先
    pub athena_output_location: String,
    /// 出力先設定のために実行するAthenaクエリ
    pub athena_query: String,
    /// リーグID
    pub league: u32,
    /// シーズン
    pub season: u16,
    /// バケット準備完了のポーリング設定
    pub readiness: ReadinessPolicy,
}

impl PipelineConfig {
    /// 新しいパイプライン設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use epl_datalake::application::dto::pipeline_config::PipelineConfig;
    /// use epl_datalake::application::dto::readiness_policy::ReadinessPolicy;
    ///
    /// let config = PipelineConfig::new(
    ///     "eu-west-2".to_string(),
    ///     "my-epl-bucket".to_string(),
    ///     "glue_epl".to_string(),
    ///     "EPL analytics".to_string(),
    ///     "epl_standings".to_string(),
    ///     "raw-data/epl_standings_data.jsonl".to_string(),
    ///     "s3://my-epl-bucket/athena-results/".to_string(),
    ///     "CREATE DATABASE IF NOT EXISTS epl_analytics".to_string(),
    ///     39,
    ///     2023,
    ///     ReadinessPolicy::default(),
    /// );
    ///
    /// assert_eq!(config.table_location(), "s3://my-epl-bucket/raw-data/");
    /// assert_eq!(config.data_uri(), "s3://my-epl-bucket/raw-data/epl_standings_data.jsonl");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        region: String,
        bucket: String,
        database: String,
        database_description: String,
        table: String,
        data_key: String,
        athena_output_location: String,
        athena_query: String,
        league: u32,
        season: u16,
        readiness: ReadinessPolicy,
    ) -> Self {
        Self {
            region,
            bucket,
            database,
            database_description,
            table,
            data_key,
            athena_output_location,
            athena_query,
            league,
            season,
            readiness,
        }
    }

    /// テーブルの `Location`（データキーのディレクトリ）
    pub fn table_location(&self) -> String {
        match self.data_key.rsplit_once('/') {
            Some((prefix, _)) if !prefix.is_empty() => format!("s3://{}/{}/", self.bucket, prefix),
            _ => format!("s3://{}/", self.bucket),
        }
    }

    /// データオブジェクトのURI
    pub fn data_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.data_key)
    }
}
