//! Catalog service API client

use std::collections::HashMap;

use async_trait::async_trait;
use ck_core::{Config, Result};
use ck_models::{BlockchainRecord, CatalogStatus, Coin, TokenRecord};
use tracing::debug;

use crate::provider::CatalogProvider;
use crate::transport::Transport;

/// Client for the remote catalog service.
///
/// Handles header assembly, retries and JSON decoding through [`Transport`];
/// implements [`CatalogProvider`] for consumption by the sync layer.
///
/// # Examples
///
/// ```ignore
/// use ck_client::CatalogClient;
/// use ck_core::Config;
///
/// let client = CatalogClient::new(Config::from_env()?)?;
/// let status = client.status().await?;
/// ```
pub struct CatalogClient {
  transport: Transport,
}

impl CatalogClient {
  /// Create a new catalog client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Transport::new(config)? })
  }
}

#[async_trait]
impl CatalogProvider for CatalogClient {
  async fn status(&self) -> Result<CatalogStatus> {
    self.transport.get("/v1/status/updates", HashMap::new()).await
  }

  async fn all_coins(&self) -> Result<Vec<Coin>> {
    let coins: Vec<Coin> = self.transport.get("/v1/coins/list", HashMap::new()).await?;
    debug!("Catalog returned {} coins", coins.len());
    Ok(coins)
  }

  async fn all_blockchain_records(&self) -> Result<Vec<BlockchainRecord>> {
    let records: Vec<BlockchainRecord> =
      self.transport.get("/v1/blockchains/list", HashMap::new()).await?;
    debug!("Catalog returned {} blockchains", records.len());
    Ok(records)
  }

  async fn all_token_records(&self) -> Result<Vec<TokenRecord>> {
    let records: Vec<TokenRecord> = self.transport.get("/v1/tokens/list", HashMap::new()).await?;
    debug!("Catalog returned {} tokens", records.len());
    Ok(records)
  }
}
