//! Catalog sync orchestrator and bootstrap loader.

use std::sync::Arc;

use ck_client::CatalogProvider;
use ck_models::{BlockchainRecord, Coin, TokenRecord};
use tokio::sync::broadcast;
use tracing::{debug, error, info};

use crate::bundle::BundleSource;
use crate::error::{SyncError, SyncResult};
use crate::overrides::CatalogOverrides;
use crate::state::{SyncDataset, SyncInfo, SyncStateTracker};
use crate::storage::{CoinStorage, SyncStateStorage};
use crate::transform::TokenExpansion;

/// Schema version of the bundled snapshot. Bumping it forces every
/// installation to re-seed from the bundle on next startup.
pub const BOOTSTRAP_VERSION: u32 = 3;

const UPDATES_CHANNEL_CAPACITY: usize = 16;

/// What a sync attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
  /// All three datasets matched the stored timestamps; nothing was fetched.
  Fresh,
  /// Full fetch-merge-persist cycle completed and timestamps were recorded.
  Synced,
}

/// What a bootstrap attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
  /// The stored version marker matches the current schema; nothing loaded.
  AlreadyCurrent,
  /// The bundled snapshot was merged and persisted; marker written.
  Seeded,
}

/// Keeps the local catalog loosely in sync with the remote service.
///
/// Bootstrap runs once per schema version before the first sync; `sync` is
/// then invoked with the remote-reported dataset timestamps (usually from
/// the status endpoint). Overlapping `sync` calls are not serialized here;
/// callers that care must serialize themselves.
pub struct CoinSyncer {
  provider: Arc<dyn CatalogProvider>,
  storage: Arc<dyn CoinStorage>,
  state: SyncStateTracker,
  overrides: CatalogOverrides,
  expansion: TokenExpansion,
  updates: broadcast::Sender<()>,
}

impl CoinSyncer {
  /// Syncer with the default override table and expansion rules.
  pub fn new(
    provider: Arc<dyn CatalogProvider>,
    storage: Arc<dyn CoinStorage>,
    state_storage: Arc<dyn SyncStateStorage>,
  ) -> Self {
    Self::with_config(
      provider,
      storage,
      state_storage,
      CatalogOverrides::default(),
      TokenExpansion::default(),
    )
  }

  pub fn with_config(
    provider: Arc<dyn CatalogProvider>,
    storage: Arc<dyn CoinStorage>,
    state_storage: Arc<dyn SyncStateStorage>,
    overrides: CatalogOverrides,
    expansion: TokenExpansion,
  ) -> Self {
    let (updates, _) = broadcast::channel(UPDATES_CHANNEL_CAPACITY);

    Self {
      provider,
      storage,
      state: SyncStateTracker::new(state_storage),
      overrides,
      expansion,
      updates,
    }
  }

  /// Subscribe to the zero-payload "dataset replaced" notification.
  ///
  /// The signal carries no diff; subscribers re-read full state from the
  /// store. Receivers created after an emission do not see it.
  pub fn subscribe(&self) -> broadcast::Receiver<()> {
    self.updates.subscribe()
  }

  /// Append overrides and expand native tokens. Runs on every persisted
  /// dataset, bootstrapped or fetched.
  fn merge(
    &self,
    mut coins: Vec<Coin>,
    mut blockchain_records: Vec<BlockchainRecord>,
    mut token_records: Vec<TokenRecord>,
  ) -> (Vec<Coin>, Vec<BlockchainRecord>, Vec<TokenRecord>) {
    coins.extend(self.overrides.coins.iter().cloned());
    blockchain_records.extend(self.overrides.blockchains.iter().cloned());
    token_records.extend(self.overrides.tokens.iter().cloned());

    (coins, blockchain_records, self.expansion.expand(token_records))
  }

  /// One-time seed from a bundled snapshot, gated by the version marker.
  /// Errors are logged and swallowed; the next startup retries.
  pub async fn bootstrap(&self, bundle: &dyn BundleSource) {
    if let Err(e) = self.try_bootstrap(bundle).await {
      error!("Initial catalog sync failed: {}", e);
    }
  }

  pub async fn try_bootstrap(&self, bundle: &dyn BundleSource) -> SyncResult<BootstrapOutcome> {
    if self.state.bootstrap_version().await == Some(BOOTSTRAP_VERSION) {
      debug!("Catalog already bootstrapped at version {}", BOOTSTRAP_VERSION);
      return Ok(BootstrapOutcome::AlreadyCurrent);
    }

    let coins: Vec<Coin> = serde_json::from_str(&bundle.coins_json()?)
      .map_err(|e| SyncError::Bundle(format!("coins dump: {}", e)))?;
    let blockchain_records: Vec<BlockchainRecord> =
      serde_json::from_str(&bundle.blockchains_json()?)
        .map_err(|e| SyncError::Bundle(format!("blockchains dump: {}", e)))?;
    let token_records: Vec<TokenRecord> = serde_json::from_str(&bundle.tokens_json()?)
      .map_err(|e| SyncError::Bundle(format!("tokens dump: {}", e)))?;

    let (coins, blockchain_records, token_records) =
      self.merge(coins, blockchain_records, token_records);

    self.storage.update(coins, blockchain_records, token_records).await?;

    // Marker written only after the persisted snapshot is in place; the
    // timestamps are cleared so the next sync sees every dataset as changed.
    self.state.set_bootstrap_version(BOOTSTRAP_VERSION).await?;
    self.state.clear_timestamps().await?;

    info!("Bootstrapped catalog from bundled snapshot (version {})", BOOTSTRAP_VERSION);
    Ok(BootstrapOutcome::Seeded)
  }

  /// Reconcile against the remote-reported dataset timestamps. Errors are
  /// logged and swallowed; the next periodic trigger retries from scratch.
  pub async fn sync(
    &self,
    coins_timestamp: i64,
    blockchains_timestamp: i64,
    tokens_timestamp: i64,
  ) {
    if let Err(e) = self
      .try_sync(coins_timestamp, blockchains_timestamp, tokens_timestamp)
      .await
    {
      error!("Catalog sync failed: {}", e);
    }
  }

  pub async fn try_sync(
    &self,
    coins_timestamp: i64,
    blockchains_timestamp: i64,
    tokens_timestamp: i64,
  ) -> SyncResult<SyncOutcome> {
    let coins_stale = self.state.is_stale(SyncDataset::Coins, coins_timestamp).await;
    let blockchains_stale =
      self.state.is_stale(SyncDataset::Blockchains, blockchains_timestamp).await;
    let tokens_stale = self.state.is_stale(SyncDataset::Tokens, tokens_timestamp).await;

    if !coins_stale && !blockchains_stale && !tokens_stale {
      debug!("Catalog datasets are up to date");
      return Ok(SyncOutcome::Fresh);
    }

    info!(
      "Catalog changed (coins: {}, blockchains: {}, tokens: {}), fetching full datasets",
      coins_stale, blockchains_stale, tokens_stale
    );

    // Any staleness triggers a full refetch of all three datasets; they are
    // merged and persisted as one unit. First fetch failure drops the rest.
    let (coins, blockchain_records, token_records) = tokio::try_join!(
      self.provider.all_coins(),
      self.provider.all_blockchain_records(),
      self.provider.all_token_records(),
    )?;

    let (coins, blockchain_records, token_records) =
      self.merge(coins, blockchain_records, token_records);

    self.storage.update(coins, blockchain_records, token_records).await?;

    // Timestamps are recorded only after the persisted write succeeded, so
    // a failed persist leaves the datasets stale and the attempt is retried.
    self
      .state
      .record_synced(coins_timestamp, blockchains_timestamp, tokens_timestamp)
      .await;

    let _ = self.updates.send(());

    Ok(SyncOutcome::Synced)
  }

  /// Stored timestamps, raw.
  pub async fn sync_info(&self) -> SyncInfo {
    self.state.sync_info().await
  }

  /// JSON dump of the stored coin dataset.
  pub async fn coins_dump(&self) -> SyncResult<String> {
    Ok(serde_json::to_string(&self.storage.all_coins().await?)?)
  }

  /// JSON dump of the stored blockchain dataset.
  pub async fn blockchains_dump(&self) -> SyncResult<String> {
    Ok(serde_json::to_string(&self.storage.all_blockchain_records().await?)?)
  }

  /// JSON dump of the stored token dataset.
  pub async fn token_records_dump(&self) -> SyncResult<String> {
    Ok(serde_json::to_string(&self.storage.all_token_records().await?)?)
  }
}
