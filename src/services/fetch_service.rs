use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

const USER_AGENT: &str = "smol-profile-view";

/// Anything that keeps a GET from producing a decoded value. Callers treat
/// every variant the same way.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

// reqwest puts the request URL, token included, in its error text.
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.without_url())
    }
}

#[derive(Clone)]
pub struct FetchService {
    client: Client,
}

impl FetchService {
    pub fn new(client: Client) -> Self {
        FetchService { client }
    }

    /// GET `url` and decode the body as JSON.
    pub async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        // The query string carries the access token.
        log::info!("Making request to {}...", strip_query(url));

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("{:?}", response.text().await.unwrap_or_default());
            return Err(FetchError::Status(status));
        }

        let contents = response.text().await?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn strip_query_hides_token() {
        assert_eq!(
            strip_query("https://api.github.com/users/me?access_token=secret"),
            "https://api.github.com/users/me"
        );
        assert_eq!(strip_query("http://x/y"), "http://x/y");
    }

    #[tokio::test]
    async fn decodes_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"a": 1})))
            .mount(&mock_server)
            .await;

        let service = FetchService::new(Client::new());
        let value: Value = service
            .get_data(&format!("{}/data", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(value["a"], 1);
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&mock_server)
            .await;

        let service = FetchService::new(Client::new());
        let result: Result<Value, _> = service.get_data(&mock_server.uri()).await;

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(
                serde_json::json!({"message": "Bad credentials"}),
            ))
            .mount(&mock_server)
            .await;

        let service = FetchService::new(Client::new());
        let result: Result<Value, _> = service.get_data(&mock_server.uri()).await;

        assert!(matches!(
            result,
            Err(FetchError::Status(StatusCode::UNAUTHORIZED))
        ));
    }

    #[tokio::test]
    async fn network_error_hides_access_token() {
        let service = FetchService::new(Client::new());
        let result: Result<Value, _> = service
            .get_data("http://127.0.0.1:1/users/octocat?access_token=SECRET")
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        let logged = format!("Fetch data failed with {}", err);
        assert!(!logged.contains("SECRET"), "{}", logged);
        assert!(!format!("{:?}", err).contains("SECRET"));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let service = FetchService::new(Client::new());
        let result: Result<Value, _> = service.get_data("http://127.0.0.1:1/nothing").await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
