//! API-Football Standings Client
//!
//! Single-attempt GET of league standings, no retry.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

use crate::adapter::config::{ApiKey, Config, DataSource};
use crate::domain::errors::FetchError;
use crate::domain::repositories::standings_source::StandingsSource;

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// reqwest-backed `StandingsSource`
pub struct ApiFootballClient {
    client: Client,
    base_url: String,
    data_source: DataSource,
    api_key: ApiKey,
}

impl ApiFootballClient {
    pub fn new(client: Client, base_url: String, data_source: DataSource, api_key: ApiKey) -> Self {
        Self {
            client,
            base_url,
            data_source,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Client::new(),
            config.api_base_url(),
            config.data_source,
            config.api_key.clone(),
        )
    }

    pub fn standings_url(&self) -> String {
        format!("{}{}", self.base_url, self.data_source.standings_path())
    }
}

/// `false`, `null`, `0` and empty containers/strings count as no data
fn has_payload(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

#[async_trait]
impl StandingsSource for ApiFootballClient {
    async fn fetch_standings(&self, league: u32, season: u16) -> Result<Value, FetchError> {
        let url = self.standings_url();
        debug!("GET {} (league={}, season={})", url, league, season);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .header(API_HOST_HEADER, self.data_source.host())
            .query(&[("league", league.to_string()), ("season", season.to_string())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: Value =
            serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))?;

        if !has_payload(body.get("response")) {
            if has_payload(body.get("errors")) {
                warn!("API reported errors: {}", body["errors"]);
            }
            return Err(FetchError::EmptyPayload);
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, data_source: DataSource) -> ApiFootballClient {
        ApiFootballClient::new(
            Client::new(),
            server.uri(),
            data_source,
            ApiKey::new("test-key"),
        )
    }

    fn standings_body() -> Value {
        json!({
            "get": "standings",
            "parameters": {"league": "39", "season": "2023"},
            "errors": [],
            "results": 1,
            "response": [{
                "league": {
                    "id": 39,
                    "name": "Premier League",
                    "standings": [[
                        {"rank": 1, "team": {"id": 50, "name": "Manchester City"}, "points": 91}
                    ]]
                }
            }]
        })
    }

    #[tokio::test]
    async fn test_fetch_success_sends_key_host_and_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/standings"))
            .and(query_param("league", "39"))
            .and(query_param("season", "2023"))
            .and(header(API_KEY_HEADER, "test-key"))
            .and(header(API_HOST_HEADER, "v3.football.api-sports.io"))
            .respond_with(ResponseTemplate::new(200).set_body_json(standings_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, DataSource::ApiSports);
        let body = client.fetch_standings(39, 2023).await.unwrap();

        assert_eq!(body, standings_body());
    }

    #[tokio::test]
    async fn test_fetch_rapid_api_path_and_host() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/standings"))
            .and(header(API_HOST_HEADER, "api-football-v1.p.rapidapi.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(standings_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, DataSource::RapidApi);
        assert!(client.fetch_standings(39, 2023).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_404_is_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let client = client_for(&server, DataSource::ApiSports);
        let err = client.fetch_standings(39, 2023).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Error fetching data: 404 Not Found");
    }

    #[tokio::test]
    async fn test_fetch_500_is_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server, DataSource::ApiSports);
        let err = client.fetch_standings(39, 2023).await.unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_fetch_empty_response_array() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": {"token": "Error/Missing application key."},
                "results": 0,
                "response": []
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, DataSource::ApiSports);
        let err = client.fetch_standings(39, 2023).await.unwrap_err();
        assert!(matches!(err, FetchError::EmptyPayload));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, DataSource::ApiSports);
        let err = client.fetch_standings(39, 2023).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let client = ApiFootballClient::new(
            Client::new(),
            "http://127.0.0.1:1".to_string(),
            DataSource::ApiSports,
            ApiKey::new("test-key"),
        );
        let err = client.fetch_standings(39, 2023).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_standings_url() {
        let config = Config::default().with_api_key(ApiKey::new("k"));
        let client = ApiFootballClient::from_config(&config);
        assert_eq!(
            client.standings_url(),
            "https://v3.football.api-sports.io/standings"
        );
    }

    #[test]
    fn test_has_payload() {
        assert!(!has_payload(None));
        assert!(!has_payload(Some(&json!(null))));
        assert!(!has_payload(Some(&json!([]))));
        assert!(!has_payload(Some(&json!({}))));
        assert!(!has_payload(Some(&json!(0))));
        assert!(has_payload(Some(&json!([1]))));
        assert!(has_payload(Some(&json!({"a": 1}))));
    }
}
