//! Configuration
//!
//! Optional JSON config file plus the API key from the environment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use thiserror::Error;

use crate::application::dto::pipeline_config::PipelineConfig;
use crate::application::dto::readiness_policy::ReadinessPolicy;

/// Environment variable holding the API-Football key
pub const API_KEY_ENV: &str = "SPORTS_DATA_API_KEY";

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_BUCKET: &str = "sports-epl-data-lake";
pub const DEFAULT_DATABASE: &str = "glue_epl_data_lake";
pub const DEFAULT_DATABASE_DESCRIPTION: &str =
    "Glue database for Premier League football analytics.";
pub const DEFAULT_TABLE: &str = "epl_standings";
pub const DEFAULT_DATA_KEY: &str = "raw-data/epl_standings_data.jsonl";
pub const DEFAULT_ATHENA_QUERY: &str = "CREATE DATABASE IF NOT EXISTS epl_analytics";
pub const DEFAULT_LEAGUE_ID: u32 = 39;
pub const DEFAULT_SEASON: u16 = 2023;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API key not found. Make sure {var} is set in your environment or .env file.")]
    MissingApiKey { var: &'static str },
}

/// Upstream hosting of the API-Football standings endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Direct API-Sports endpoint
    #[default]
    ApiSports,
    /// RapidAPI marketplace endpoint
    RapidApi,
}

impl DataSource {
    pub fn host(&self) -> &'static str {
        match self {
            DataSource::ApiSports => "v3.football.api-sports.io",
            DataSource::RapidApi => "api-football-v1.p.rapidapi.com",
        }
    }

    pub fn default_base_url(&self) -> String {
        format!("https://{}", self.host())
    }

    pub fn standings_path(&self) -> &'static str {
        match self {
            DataSource::ApiSports => "/standings",
            DataSource::RapidApi => "/v3/standings",
        }
    }
}

/// API key that never shows up in `Debug` output
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Look the key up through `lookup` (normally `std::env::var`)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_KEY_ENV) {
            Some(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
            _ => Err(ConfigError::MissingApiKey { var: API_KEY_ENV }),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub region: String,
    pub bucket_name: String,
    pub glue_database_name: String,
    pub glue_database_description: String,
    pub glue_table_name: String,
    pub data_key: String,
    /// Defaults to `s3://<bucket>/athena-results/`
    pub athena_output_location: Option<String>,
    pub athena_query: String,

    pub data_source: DataSource,
    /// Overrides the data source's base URL
    pub api_base_url: Option<String>,
    pub league_id: u32,
    pub season: u16,

    pub readiness: ReadinessPolicy,

    #[serde(skip)]
    pub api_key: ApiKey,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            bucket_name: DEFAULT_BUCKET.to_string(),
            glue_database_name: DEFAULT_DATABASE.to_string(),
            glue_database_description: DEFAULT_DATABASE_DESCRIPTION.to_string(),
            glue_table_name: DEFAULT_TABLE.to_string(),
            data_key: DEFAULT_DATA_KEY.to_string(),
            athena_output_location: None,
            athena_query: DEFAULT_ATHENA_QUERY.to_string(),
            data_source: DataSource::default(),
            api_base_url: None,
            league_id: DEFAULT_LEAGUE_ID,
            season: DEFAULT_SEASON,
            readiness: ReadinessPolicy::default(),
            api_key: ApiKey::default(),
        }
    }
}

impl Config {
    /// Load the config file (if any) and the API key from the environment
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_api_key(ApiKey::from_env()?))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let expanded = shellexpand::tilde(path).to_string();
        let content = fs::read_to_string(&expanded).map_err(|source| ConfigError::Read {
            path: expanded.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: expanded,
            source,
        })
    }

    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn athena_output_location(&self) -> String {
        self.athena_output_location
            .clone()
            .unwrap_or_else(|| format!("s3://{}/athena-results/", self.bucket_name))
    }

    pub fn api_base_url(&self) -> String {
        self.api_base_url
            .as_ref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| self.data_source.default_base_url())
    }

    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(
            self.region.clone(),
            self.bucket_name.clone(),
            self.glue_database_name.clone(),
            self.glue_database_description.clone(),
            self.glue_table_name.clone(),
            self.data_key.clone(),
            self.athena_output_location(),
            self.athena_query.clone(),
            self.league_id,
            self.season,
            self.readiness,
        )
    }
}
