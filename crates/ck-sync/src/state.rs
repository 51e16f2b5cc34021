//! Persisted sync state: per-dataset timestamps and the bootstrap version.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::error::SyncResult;
use crate::storage::SyncStateStorage;

pub const KEY_COINS_LAST_SYNC_TIMESTAMP: &str = "coin-syncer-coins-last-sync-timestamp";
pub const KEY_BLOCKCHAINS_LAST_SYNC_TIMESTAMP: &str = "coin-syncer-blockchains-last-sync-timestamp";
pub const KEY_TOKENS_LAST_SYNC_TIMESTAMP: &str = "coin-syncer-tokens-last-sync-timestamp";
pub const KEY_INITIAL_SYNC_VERSION: &str = "coin-syncer-initial-sync-version";

/// One of the three synchronized datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncDataset {
  Coins,
  Blockchains,
  Tokens,
}

impl SyncDataset {
  pub fn timestamp_key(&self) -> &'static str {
    match self {
      SyncDataset::Coins => KEY_COINS_LAST_SYNC_TIMESTAMP,
      SyncDataset::Blockchains => KEY_BLOCKCHAINS_LAST_SYNC_TIMESTAMP,
      SyncDataset::Tokens => KEY_TOKENS_LAST_SYNC_TIMESTAMP,
    }
  }
}

impl fmt::Display for SyncDataset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SyncDataset::Coins => write!(f, "coins"),
      SyncDataset::Blockchains => write!(f, "blockchains"),
      SyncDataset::Tokens => write!(f, "tokens"),
    }
  }
}

/// Stored timestamps, as reported by [`SyncStateTracker::sync_info`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncInfo {
  pub coins_timestamp: Option<String>,
  pub blockchains_timestamp: Option<String>,
  pub tokens_timestamp: Option<String>,
}

/// Staleness decisions over a key-value state store.
///
/// Staleness is binary equality against the last recorded value, not an
/// ordering: a remote timestamp that went backwards still counts as changed
/// and triggers a full resync.
pub struct SyncStateTracker {
  storage: Arc<dyn SyncStateStorage>,
}

impl SyncStateTracker {
  pub fn new(storage: Arc<dyn SyncStateStorage>) -> Self {
    Self { storage }
  }

  /// True when no stored timestamp exists for `dataset`, the stored value
  /// is unreadable, or it differs from `remote_timestamp`.
  pub async fn is_stale(&self, dataset: SyncDataset, remote_timestamp: i64) -> bool {
    match self.storage.get(dataset.timestamp_key()).await {
      Ok(Some(raw)) => match raw.parse::<i64>() {
        Ok(stored) => stored != remote_timestamp,
        Err(_) => true,
      },
      Ok(None) => true,
      Err(e) => {
        warn!("Failed to read {} sync timestamp: {}", dataset, e);
        true
      }
    }
  }

  /// Persist all three timestamps. Best-effort: each write is independent
  /// and failures are logged, never propagated.
  pub async fn record_synced(
    &self,
    coins_timestamp: i64,
    blockchains_timestamp: i64,
    tokens_timestamp: i64,
  ) {
    let writes = [
      (SyncDataset::Coins, coins_timestamp),
      (SyncDataset::Blockchains, blockchains_timestamp),
      (SyncDataset::Tokens, tokens_timestamp),
    ];

    for (dataset, timestamp) in writes {
      if let Err(e) = self.storage.set(dataset.timestamp_key(), &timestamp.to_string()).await {
        warn!("Failed to record {} sync timestamp: {}", dataset, e);
      }
    }
  }

  /// Delete all three timestamp keys, forcing the next sync to treat every
  /// dataset as changed.
  pub async fn clear_timestamps(&self) -> SyncResult<()> {
    self.storage.delete(KEY_COINS_LAST_SYNC_TIMESTAMP).await?;
    self.storage.delete(KEY_BLOCKCHAINS_LAST_SYNC_TIMESTAMP).await?;
    self.storage.delete(KEY_TOKENS_LAST_SYNC_TIMESTAMP).await?;
    Ok(())
  }

  /// Stored bootstrap version, if any readable one exists.
  pub async fn bootstrap_version(&self) -> Option<u32> {
    self
      .storage
      .get(KEY_INITIAL_SYNC_VERSION)
      .await
      .ok()
      .flatten()
      .and_then(|raw| raw.parse().ok())
  }

  pub async fn set_bootstrap_version(&self, version: u32) -> SyncResult<()> {
    self.storage.set(KEY_INITIAL_SYNC_VERSION, &version.to_string()).await
  }

  /// The three stored timestamps, raw.
  pub async fn sync_info(&self) -> SyncInfo {
    SyncInfo {
      coins_timestamp: self.storage.get(KEY_COINS_LAST_SYNC_TIMESTAMP).await.ok().flatten(),
      blockchains_timestamp: self
        .storage
        .get(KEY_BLOCKCHAINS_LAST_SYNC_TIMESTAMP)
        .await
        .ok()
        .flatten(),
      tokens_timestamp: self.storage.get(KEY_TOKENS_LAST_SYNC_TIMESTAMP).await.ok().flatten(),
    }
  }
}
