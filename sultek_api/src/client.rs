//! HTTP session for the Sultek API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use crate::{ApiError, Config, ConfigError};

/// A decoded response body and the endpoint path it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub endpoint: String,
    pub body: Value,
}

/// Shared connection to the Sultek API.
///
/// Holds one `reqwest::Client` with the bearer token, JSON content headers and
/// the configured timeout installed as defaults. Cloning is cheap and every
/// clone shares the same connection pool, so one session can back any number
/// of facades running concurrently.
#[derive(Clone, Debug)]
pub struct Session {
    http: reqwest::Client,
    /// Base URL for the API, e.g. `http://localhost:8080/`.
    base_url: Url,
}

impl Session {
    /// Opens a session for the given config.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token()))
            .map_err(|_| ConfigError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                ConfigError::Client(e.to_string())
            })?;

        Ok(Self {
            http,
            base_url: config.uri().clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn get_url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL {} cannot take path segments", self.base_url);
                ApiError::RequestFailed {
                    endpoint: segments.join("/"),
                    reason: "base URL cannot be a base".to_string(),
                }
            })?
            .pop_if_empty()
            .extend(segments);
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    /// Performs a GET against `segments` (each one percent-encoded as a single
    /// path segment below the base URL) and returns the decoded JSON body.
    pub async fn get_payload(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Payload, ApiError> {
        let url = self.get_url(segments, query)?;
        let endpoint = url.path().to_string();
        tracing::debug!(endpoint = %endpoint, ?query, "GET");

        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource {}: {}", endpoint, e);
            ApiError::RequestFailed {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            }
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", endpoint, e);
            ApiError::RequestFailed {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            }
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request to {} failed with status {}: {}", endpoint, status, snippet);
            return Err(ApiError::HttpStatus {
                endpoint,
                status: status.as_u16(),
                body: snippet,
            });
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(body) => Ok(Payload { endpoint, body }),
            Err(e) => {
                let snippet = truncate_body(&body);
                tracing::error!("Failed to parse resource {}: {} | body: {}", endpoint, e, snippet);
                Err(ApiError::MalformedJson {
                    endpoint,
                    reason: e.to_string(),
                })
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(uri: &str) -> Session {
        Session::new(&Config::new(uri, "token", 10).unwrap()).unwrap()
    }

    #[test]
    fn url_joins_segments_below_base() {
        let url = session("http://localhost:8080")
            .get_url(&["demo", "getAccounts"], &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/demo/getAccounts");
    }

    #[test]
    fn url_keeps_base_path_and_query() {
        let url = session("https://api.example.com/v2/")
            .get_url(
                &["demo", "getData", "12345"],
                &[("start", "2024-05-01".to_string()), ("end", "2024-05-02".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v2/demo/getData/12345?start=2024-05-01&end=2024-05-02"
        );
    }

    #[test]
    fn url_encodes_segment_separators() {
        let url = session("http://localhost")
            .get_url(&["demo", "getData", "a/b c"], &[])
            .unwrap();
        assert_eq!(url.path(), "/demo/getData/a%2Fb%20c");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let conf = Config::new("http://localhost", "bad\ntoken", 10).unwrap();
        assert!(matches!(Session::new(&conf).unwrap_err(), ConfigError::InvalidToken));
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = "x".repeat(2500);
        let out = truncate_body(&long);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
        assert_eq!(truncate_body("short"), "short");
    }
}
