//! Integration tests for epl-datalake
//!
//! These tests verify end-to-end functionality.
//! Some tests require AWS credentials and an API key to run.

use std::fs;
use std::path::PathBuf;

use epl_datalake::domain::entities::standing_record::StandingRecord;
use epl_datalake::domain::entities::table_schema::TableSchema;
use epl_datalake::domain::services::ndjson::NdjsonEncoder;
use epl_datalake::domain::services::schema_drift::SchemaDriftService;
use epl_datalake::domain::services::standings_extractor::StandingsExtractor;

/// Get the path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture() -> serde_json::Value {
    let path = fixtures_path().join("standings_response.json");
    let content = fs::read_to_string(&path).expect("Failed to read standings_response.json");
    serde_json::from_str(&content).expect("Fixture should be valid JSON")
}

#[test]
fn test_fixture_file_exists() {
    let sample = fixtures_path().join("standings_response.json");
    assert!(sample.exists(), "standings_response.json fixture should exist");
}

#[test]
fn test_fixture_extracts_first_group() {
    let records = StandingsExtractor::extract(&load_fixture());

    assert_eq!(records.len(), 3);
    let teams: Vec<&str> = records.iter().filter_map(|r| r.team_name()).collect();
    assert_eq!(teams, vec!["Manchester City", "Arsenal", "Liverpool"]);
}

#[test]
fn test_fixture_matches_catalog_schema() {
    let records = StandingsExtractor::extract(&load_fixture());
    let drift = SchemaDriftService::detect(&TableSchema::standings(), &records);

    assert!(drift.is_empty(), "fixture drifted from schema: {:?}", drift);
}

#[test]
fn test_fixture_ndjson_lines_parse_back() {
    let records = StandingsExtractor::extract(&load_fixture());
    let payload = NdjsonEncoder::encode(&records).unwrap();

    let lines: Vec<&str> = payload.split('\n').collect();
    assert_eq!(lines.len(), 3);

    for (line, record) in lines.iter().zip(&records) {
        let parsed: StandingRecord = serde_json::from_str(line).unwrap();
        assert_eq!(&parsed, record);
    }

    assert!(lines[0].starts_with(r#"{"rank": 1, "team": {"id": 50, "name": "Manchester City""#));
}

/// Integration test that requires AWS credentials and an API key
/// Run with: cargo test --test integration_test -- --ignored
#[tokio::test]
#[ignore]
async fn test_data_lake_setup_e2e() {
    // This test requires:
    // - AWS credentials in the default provider chain
    // - SPORTS_DATA_API_KEY env var set
    // - EPL_DATALAKE_TEST_BUCKET env var set to a bucket name you own
    let bucket = std::env::var("EPL_DATALAKE_TEST_BUCKET")
        .expect("EPL_DATALAKE_TEST_BUCKET env var required for E2E test");

    let config = epl_datalake::adapter::config::Config {
        bucket_name: bucket,
        ..Default::default()
    }
    .with_api_key(
        epl_datalake::adapter::config::ApiKey::from_env()
            .expect("SPORTS_DATA_API_KEY env var required for E2E test"),
    );

    let workflow = epl_datalake::driver::DataLakeWorkflow::from_config(&config).await;
    let report = workflow.execute().await;

    println!("E2E report: {:?}", report.steps());
    assert_eq!(report.steps().len(), 8);
}
