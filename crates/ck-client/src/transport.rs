//! HTTP transport layer for catalog service requests

use ck_core::{Config, Error, Result, APP_PLATFORM};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// HTTP transport layer for making requests to the catalog service
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: Option<String>,
  app_id: Option<String>,
  app_version: String,
  max_retries: u32,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent("ck-client/0.1.0")
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url,
      api_key: config.api_key,
      app_id: config.app_id,
      app_version: config.app_version,
      max_retries: config.max_retries,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.catalog.test".to_string(),
      api_key: Some("test_key".to_string()),
      app_id: None,
      app_version: "0.1.0".to_string(),
      max_retries: 3,
    }
  }

  /// Make a GET request to the catalog service
  ///
  /// # Arguments
  ///
  /// * `path` - The endpoint path, e.g. `/v1/coins/list`
  /// * `params` - Additional query parameters for the request
  #[instrument(skip(self, params), fields(path = %path))]
  pub async fn get<T>(&self, path: &str, params: HashMap<String, String>) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(path, params)?;
    debug!("Making request to: {}", url);

    let mut attempt = 0;
    let mut last_error = None;

    while attempt <= self.max_retries {
      if attempt > 0 {
        let delay = Duration::from_millis(2_u64.pow(attempt) * 1000); // Exponential backoff
        warn!("Retrying request in {}ms (attempt {})", delay.as_millis(), attempt + 1);
        tokio::time::sleep(delay).await;
      }

      match self.make_request(&url).await {
        Ok(response) => {
          let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

          debug!("Response body length: {} bytes", text.len());

          return match serde_json::from_str::<T>(&text) {
            Ok(data) => Ok(data),
            Err(e) => {
              error!("Failed to parse JSON response: {}", e);
              Err(Error::Parse(format!(
                "Failed to parse response: {}. Response: {}",
                e,
                &text[..std::cmp::min(200, text.len())]
              )))
            }
          };
        }
        Err(e) => {
          warn!("Request failed (attempt {}): {}", attempt + 1, e);
          last_error = Some(e);
          attempt += 1;
        }
      }
    }

    Err(last_error.unwrap_or_else(|| Error::Http("Max retries exceeded".to_string())))
  }

  /// Build the full URL for an API request
  fn build_url(&self, path: &str, params: HashMap<String, String>) -> Result<String> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, path))
      .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

    {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(&key, &value);
      }
    }

    Ok(url.to_string())
  }

  /// Make the actual HTTP request
  async fn make_request(&self, url: &str) -> Result<Response> {
    let mut request = self
      .client
      .get(url)
      .header("app_platform", APP_PLATFORM)
      .header("app_version", &self.app_version);

    if let Some(app_id) = &self.app_id {
      request = request.header("app_id", app_id);
    }

    if let Some(api_key) = &self.api_key {
      request = request.header("apikey", api_key);
    }

    let response = request
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();

    if status.is_success() {
      debug!("Request successful with status: {}", status);
      Ok(response)
    } else {
      error!("Request failed with status: {}", status);
      Err(Error::Http(format!("HTTP error: {}", status)))
    }
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_build_url_plain() {
    let transport = Transport::new_mock();
    let url = transport.build_url("/v1/coins/list", HashMap::new()).unwrap();
    assert_eq!(url, "https://mock.catalog.test/v1/coins/list");
  }

  #[test]
  fn test_build_url_with_params() {
    let transport = Transport::new_mock();
    let mut params = HashMap::new();
    params.insert("currency".to_string(), "usd".to_string());

    let url = transport.build_url("/v1/status/updates", params).unwrap();

    assert!(url.starts_with("https://mock.catalog.test/v1/status/updates"));
    assert!(url.contains("currency=usd"));
  }

  #[test]
  fn test_build_url_invalid_base() {
    let mut transport = Transport::new_mock();
    transport.base_url = "not a url".to_string();

    let result = transport.build_url("/v1/coins/list", HashMap::new());
    assert!(matches!(result, Err(Error::Http(_))));
  }
}
