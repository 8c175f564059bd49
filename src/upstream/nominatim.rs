//! Nominatim Client
//!
//! Free-text search against a Nominatim instance (`/search?q=..&format=json`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::Geocoder;
use crate::cache::MAX_VALUE_SIZE;
use crate::error::UpstreamError;
use crate::models::ResultSet;

/// Largest response body read from the provider. Anything bigger could not be
/// cached anyway.
pub const MAX_RESPONSE_SIZE: usize = MAX_VALUE_SIZE;

/// HTTP client for the Nominatim search API.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// Creates a client for the instance at `base_url`.
    ///
    /// Nominatim's usage policy requires an identifying `User-Agent`; every
    /// request carries `user_agent` and is bounded by `timeout`.
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        // A trailing slash keeps any path prefix when joining "search".
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Transport)?;

        Ok(Self { client, base_url })
    }

    /// Builds the search URL with `query` escaped as given.
    pub fn search_url(&self, query: &str) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.join("search")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json");
        Ok(url)
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn search(&self, query: &str) -> Result<ResultSet, UpstreamError> {
        let url = self.search_url(query)?;
        debug!("Querying upstream: {}", url);

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        if response
            .content_length()
            .is_some_and(|len| len > MAX_RESPONSE_SIZE as u64)
        {
            return Err(UpstreamError::TooLarge(MAX_RESPONSE_SIZE));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(UpstreamError::Transport)? {
            if body.len() + chunk.len() > MAX_RESPONSE_SIZE {
                return Err(UpstreamError::TooLarge(MAX_RESPONSE_SIZE));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body).map_err(UpstreamError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::fixtures::{eiffel_tower, postcode};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn client_for(server: &MockServer) -> NominatimClient {
        NominatimClient::new(&server.uri(), "geocache-test", TIMEOUT).unwrap()
    }

    #[test]
    fn test_search_url_escapes_query() {
        let client =
            NominatimClient::new("https://nominatim.openstreetmap.org", "ua", TIMEOUT).unwrap();
        let url = client.search_url("Eiffel Tower & café").unwrap();

        assert_eq!(url.path(), "/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "Eiffel Tower & café".to_string()),
                ("format".to_string(), "json".to_string()),
            ]
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_search_url_keeps_base_path() {
        let client = NominatimClient::new("http://localhost:8080/nominatim", "ua", TIMEOUT).unwrap();
        let url = client.search_url("Paris").unwrap();
        assert_eq!(url.path(), "/nominatim/search");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = NominatimClient::new("not a url", "ua", TIMEOUT);
        assert!(matches!(result, Err(UpstreamError::Url(_))));
    }

    #[tokio::test]
    async fn test_search_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Eiffel Tower"))
            .and(query_param("format", "json"))
            .and(header("user-agent", "geocache-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![eiffel_tower()]))
            .expect(1)
            .mount(&server)
            .await;

        let places = client_for(&server).search("Eiffel Tower").await.unwrap();
        assert_eq!(places, vec![eiffel_tower()]);
    }

    #[tokio::test]
    async fn test_search_preserves_order() {
        let server = MockServer::start().await;
        let mut second = eiffel_tower();
        second.place_id = Some(2);
        second.name = "Tour Eiffel (replica)".to_string();
        let body = vec![eiffel_tower(), second.clone()];

        Mock::given(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let places = client_for(&server).search("eiffel").await.unwrap();
        assert_eq!(places[0].place_id, Some(12345));
        assert_eq!(places[1], second);
    }

    #[tokio::test]
    async fn test_search_accepts_record_without_osm_reference() {
        let server = MockServer::start().await;
        let body = serde_json::json!([{
            "place_id": 250004391,
            "licence": "Data © OpenStreetMap contributors, ODbL 1.0. http://osm.org/copyright",
            "lat": "48.8570362",
            "lon": "2.3105941",
            "class": "place",
            "type": "postcode",
            "place_rank": 21,
            "importance": 0.12000999999999995,
            "addresstype": "postcode",
            "name": "75007",
            "display_name": "75007, Paris, Île-de-France, France métropolitaine, France"
        }]);
        Mock::given(path("/search"))
            .and(query_param("q", "75007"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let places = client_for(&server).search("75007").await.unwrap();
        assert_eq!(places, vec![postcode()]);
    }

    #[tokio::test]
    async fn test_search_rejects_oversized_body() {
        let server = MockServer::start().await;
        let body = format!("[\"{}\"]", "x".repeat(MAX_RESPONSE_SIZE));
        Mock::given(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let result = client_for(&server).search("Paris").await;
        assert!(matches!(
            result,
            Err(UpstreamError::TooLarge(limit)) if limit == MAX_RESPONSE_SIZE
        ));
    }

    #[tokio::test]
    async fn test_search_empty_result() {
        let server = MockServer::start().await;
        Mock::given(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let places = client_for(&server).search("zzzzznotaplace").await.unwrap();
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let server = MockServer::start().await;
        Mock::given(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client_for(&server).search("Paris").await;
        assert!(matches!(
            result,
            Err(UpstreamError::Status(s)) if s == reqwest::StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).search("Paris").await;
        assert!(matches!(result, Err(UpstreamError::Decode(_))));
    }

    #[tokio::test]
    async fn test_search_timeout() {
        let server = MockServer::start().await;
        Mock::given(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("[]")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client =
            NominatimClient::new(&server.uri(), "ua", Duration::from_millis(100)).unwrap();
        let result = client.search("Paris").await;
        assert!(matches!(result, Err(UpstreamError::Transport(_))));
    }
}
