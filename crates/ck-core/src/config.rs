//! Configuration management for the catalog client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the catalog client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL of the remote catalog service
  pub base_url: String,

  /// Optional API key sent as the `apikey` header
  pub api_key: Option<String>,

  /// Optional installation identifier sent as the `app_id` header
  pub app_id: Option<String>,

  /// Application version reported in the `app_version` header
  pub app_version: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for failed requests
  pub max_retries: u32,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let base_url =
      env::var("COINKIT_BASE_URL").unwrap_or_else(|_| crate::DEFAULT_BASE_URL.to_string());

    let api_key = env::var("COINKIT_API_KEY").ok();
    let app_id = env::var("COINKIT_APP_ID").ok();

    let app_version = env::var("COINKIT_APP_VERSION")
      .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    let timeout_secs = env::var("COINKIT_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid COINKIT_TIMEOUT_SECS".to_string()))?;

    let max_retries = env::var("COINKIT_MAX_RETRIES")
      .unwrap_or_else(|_| "3".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid COINKIT_MAX_RETRIES".to_string()))?;

    Ok(Config { base_url, api_key, app_id, app_version, timeout_secs, max_retries })
  }

  /// Create a config pointing at the given base URL (for testing)
  pub fn default_with_url(base_url: String) -> Self {
    Config {
      base_url,
      api_key: None,
      app_id: None,
      app_version: env!("CARGO_PKG_VERSION").to_string(),
      timeout_secs: 30,
      max_retries: 3,
    }
  }
}
