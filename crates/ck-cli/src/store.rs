//! JSON-file implementations of the sync storage traits.
//!
//! The catalog triple lives in one `catalog.json` document, replaced
//! atomically via a temp-file rename; sync state lives in a sibling
//! `state.json` key-value map.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ck_models::{BlockchainRecord, Coin, TokenRecord};
use ck_sync::{CoinStorage, SyncError, SyncResult, SyncStateStorage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogDocument {
  coins: Vec<Coin>,
  blockchain_records: Vec<BlockchainRecord>,
  token_records: Vec<TokenRecord>,
}

/// Catalog store backed by a single JSON document.
pub struct JsonCatalogStore {
  path: PathBuf,
}

impl JsonCatalogStore {
  pub fn new(data_dir: &Path) -> Self {
    Self { path: data_dir.join("catalog.json") }
  }

  async fn load(&self) -> SyncResult<CatalogDocument> {
    match tokio::fs::read_to_string(&self.path).await {
      Ok(raw) => {
        serde_json::from_str(&raw).map_err(|e| SyncError::Storage(format!("catalog.json: {}", e)))
      }
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CatalogDocument::default()),
      Err(e) => Err(SyncError::Storage(format!("catalog.json: {}", e))),
    }
  }
}

#[async_trait]
impl CoinStorage for JsonCatalogStore {
  async fn update(
    &self,
    coins: Vec<Coin>,
    blockchain_records: Vec<BlockchainRecord>,
    token_records: Vec<TokenRecord>,
  ) -> SyncResult<()> {
    let document = CatalogDocument { coins, blockchain_records, token_records };
    let raw = serde_json::to_string_pretty(&document)
      .map_err(|e| SyncError::Storage(format!("catalog.json: {}", e)))?;

    // Write-then-rename keeps the replace atomic on the same filesystem.
    let tmp = self.path.with_extension("json.tmp");
    tokio::fs::write(&tmp, raw)
      .await
      .map_err(|e| SyncError::Storage(format!("{}: {}", tmp.display(), e)))?;
    tokio::fs::rename(&tmp, &self.path)
      .await
      .map_err(|e| SyncError::Storage(format!("{}: {}", self.path.display(), e)))
  }

  async fn all_coins(&self) -> SyncResult<Vec<Coin>> {
    Ok(self.load().await?.coins)
  }

  async fn all_blockchain_records(&self) -> SyncResult<Vec<BlockchainRecord>> {
    Ok(self.load().await?.blockchain_records)
  }

  async fn all_token_records(&self) -> SyncResult<Vec<TokenRecord>> {
    Ok(self.load().await?.token_records)
  }
}

/// Key-value state store backed by a JSON map.
pub struct JsonStateStore {
  path: PathBuf,
}

impl JsonStateStore {
  pub fn new(data_dir: &Path) -> Self {
    Self { path: data_dir.join("state.json") }
  }

  async fn load(&self) -> SyncResult<HashMap<String, String>> {
    match tokio::fs::read_to_string(&self.path).await {
      Ok(raw) => {
        serde_json::from_str(&raw).map_err(|e| SyncError::State(format!("state.json: {}", e)))
      }
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
      Err(e) => Err(SyncError::State(format!("state.json: {}", e))),
    }
  }

  async fn save(&self, map: &HashMap<String, String>) -> SyncResult<()> {
    let raw =
      serde_json::to_string_pretty(map).map_err(|e| SyncError::State(format!("state.json: {}", e)))?;
    tokio::fs::write(&self.path, raw)
      .await
      .map_err(|e| SyncError::State(format!("{}: {}", self.path.display(), e)))
  }
}

#[async_trait]
impl SyncStateStorage for JsonStateStore {
  async fn get(&self, key: &str) -> SyncResult<Option<String>> {
    Ok(self.load().await?.get(key).cloned())
  }

  async fn set(&self, key: &str, value: &str) -> SyncResult<()> {
    let mut map = self.load().await?;
    map.insert(key.to_string(), value.to_string());
    self.save(&map).await
  }

  async fn delete(&self, key: &str) -> SyncResult<()> {
    let mut map = self.load().await?;
    if map.remove(key).is_some() {
      self.save(&map).await?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_catalog_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonCatalogStore::new(dir.path());

    assert!(store.all_coins().await.unwrap().is_empty());

    let coins = vec![Coin::new("bitcoin", "Bitcoin", "BTC")];
    let blockchains = vec![BlockchainRecord::new("bitcoin", "Bitcoin")];
    let tokens = vec![TokenRecord::new("bitcoin", "bitcoin", "derived:bip84", 8)];

    store.update(coins.clone(), blockchains.clone(), tokens.clone()).await.unwrap();

    assert_eq!(store.all_coins().await.unwrap(), coins);
    assert_eq!(store.all_blockchain_records().await.unwrap(), blockchains);
    assert_eq!(store.all_token_records().await.unwrap(), tokens);

    // Replace, not merge.
    store.update(Vec::new(), Vec::new(), Vec::new()).await.unwrap();
    assert!(store.all_coins().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_state_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStateStore::new(dir.path());

    assert_eq!(store.get("missing").await.unwrap(), None);

    store.set("a", "1").await.unwrap();
    store.set("b", "2").await.unwrap();
    assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));

    store.delete("a").await.unwrap();
    assert_eq!(store.get("a").await.unwrap(), None);
    assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));

    // Deleting an absent key is not an error.
    store.delete("a").await.unwrap();
  }
}
