//! HTTP client wrapper - fetches and decodes the character list

use anyhow::{anyhow, Context, Result};

use crate::constants::{CHARACTERS_QUERY, CHARACTERS_URL, REQUEST_TIMEOUT_SECS};
use crate::messages::{FetchOutcome, NetworkResponse};
use crate::models::Character;

/// Decode a response body into the character list.
///
/// The API wraps the page in an object with an `items` array. A body that is
/// not JSON at all is a failure; a JSON body whose `items` field is missing
/// or not an array decodes as zero characters, matching what the endpoint's
/// consumers have always tolerated.
pub fn parse_characters(body: &str) -> Result<Vec<Character>> {
    let value: serde_json::Value =
        serde_json::from_str(body).context("response body is not valid JSON")?;

    match value.get("items") {
        Some(items @ serde_json::Value::Array(_)) => serde_json::from_value(items.clone())
            .map_err(|e| anyhow!("items array did not decode: {}", e)),
        _ => Ok(Vec::new()),
    }
}

/// Execute one character fetch and report how it settled.
///
/// All failure modes collapse into `FetchOutcome::Failure` with a diagnostic
/// string; the caller decides what the user sees.
pub async fn fetch_characters(client: &reqwest::Client, generation: u64) -> NetworkResponse {
    let outcome = match request_characters(client).await {
        Ok(items) => FetchOutcome::Success(items),
        Err(e) => FetchOutcome::Failure(format!("{:#}", e)),
    };

    NetworkResponse::FetchCompleted {
        generation,
        outcome,
    }
}

async fn request_characters(client: &reqwest::Client) -> Result<Vec<Character>> {
    let resp = client
        .get(CHARACTERS_URL)
        .query(CHARACTERS_QUERY)
        .send()
        .await
        .context("request failed")?;

    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("unexpected HTTP status {}", status));
    }

    let body = resp.text().await.context("error reading body")?;
    parse_characters(&body)
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_items() {
        let body = r#"{"items":[
            {"id":1,"name":"Fry","gender":"Male","species":"HUMAN","status":"ALIVE","image":"u1"},
            {"id":2,"name":"Leela","gender":"Female","species":"MUTANT","status":"ALIVE","image":null}
        ],"page":1,"size":50}"#;
        let items = parse_characters(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Fry");
        assert_eq!(items[1].image, None);
    }

    #[test]
    fn test_parse_missing_items_is_empty_not_error() {
        let items = parse_characters(r#"{"page":1,"total":0}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_items_not_an_array_is_empty_not_error() {
        let items = parse_characters(r#"{"items":"oops"}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_non_json_body_is_error() {
        assert!(parse_characters("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_parse_malformed_character_is_error() {
        // items is an array, but an entry is missing required fields
        let body = r#"{"items":[{"name":"no id"}]}"#;
        assert!(parse_characters(body).is_err());
    }

    #[test]
    fn test_parse_empty_items_array() {
        let items = parse_characters(r#"{"items":[]}"#).unwrap();
        assert!(items.is_empty());
    }
}
