//! Subcommand handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use ck_client::{CatalogClient, CatalogProvider};
use ck_core::Config;
use ck_sync::state::KEY_INITIAL_SYNC_VERSION;
use ck_sync::{BuiltinBundle, BundleSource, CoinSyncer, FsBundle, SyncOutcome, SyncStateStorage};
use clap::ValueEnum;
use tracing::info;

use crate::store::{JsonCatalogStore, JsonStateStore};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DumpDataset {
  Coins,
  Blockchains,
  Tokens,
}

fn build_syncer(data_dir: &Path, provider: Arc<dyn CatalogProvider>) -> Result<CoinSyncer> {
  std::fs::create_dir_all(data_dir)
    .with_context(|| format!("creating data dir {}", data_dir.display()))?;

  let storage = Arc::new(JsonCatalogStore::new(data_dir));
  let state = Arc::new(JsonStateStore::new(data_dir));
  Ok(CoinSyncer::new(provider, storage, state))
}

/// Provider that is never called; bootstrap and dumps only touch storage.
struct OfflineProvider;

#[async_trait::async_trait]
impl CatalogProvider for OfflineProvider {
  async fn status(&self) -> ck_core::Result<ck_models::CatalogStatus> {
    Err(ck_core::Error::Unexpected("offline".to_string()))
  }

  async fn all_coins(&self) -> ck_core::Result<Vec<ck_models::Coin>> {
    Err(ck_core::Error::Unexpected("offline".to_string()))
  }

  async fn all_blockchain_records(&self) -> ck_core::Result<Vec<ck_models::BlockchainRecord>> {
    Err(ck_core::Error::Unexpected("offline".to_string()))
  }

  async fn all_token_records(&self) -> ck_core::Result<Vec<ck_models::TokenRecord>> {
    Err(ck_core::Error::Unexpected("offline".to_string()))
  }
}

fn bundle_for(bundle_dir: Option<&PathBuf>) -> Box<dyn BundleSource> {
  match bundle_dir {
    Some(dir) => Box::new(FsBundle::new(dir.clone())),
    None => Box::new(BuiltinBundle),
  }
}

pub async fn bootstrap(data_dir: PathBuf, bundle_dir: Option<PathBuf>) -> Result<()> {
  let syncer = build_syncer(&data_dir, Arc::new(OfflineProvider))?;
  let bundle = bundle_for(bundle_dir.as_ref());

  let outcome = syncer.try_bootstrap(bundle.as_ref()).await?;
  println!("bootstrap: {:?}", outcome);
  Ok(())
}

pub async fn sync(data_dir: PathBuf, config: Config) -> Result<()> {
  let client = Arc::new(CatalogClient::new(config)?);
  let syncer = build_syncer(&data_dir, client.clone())?;

  // Seed once per schema version before the first reconcile.
  syncer.bootstrap(&BuiltinBundle).await;

  let status = client.status().await.context("fetching catalog status")?;
  info!(
    "Remote status: coins={} blockchains={} tokens={}",
    status.coins, status.blockchains, status.tokens
  );

  let outcome = syncer.try_sync(status.coins, status.blockchains, status.tokens).await?;
  match outcome {
    SyncOutcome::Fresh => println!("catalog already up to date"),
    SyncOutcome::Synced => println!("catalog synced"),
  }
  Ok(())
}

pub async fn dump(data_dir: PathBuf, dataset: DumpDataset) -> Result<()> {
  let syncer = build_syncer(&data_dir, Arc::new(OfflineProvider))?;

  let json = match dataset {
    DumpDataset::Coins => syncer.coins_dump().await?,
    DumpDataset::Blockchains => syncer.blockchains_dump().await?,
    DumpDataset::Tokens => syncer.token_records_dump().await?,
  };
  println!("{}", json);
  Ok(())
}

pub async fn info(data_dir: PathBuf) -> Result<()> {
  let syncer = build_syncer(&data_dir, Arc::new(OfflineProvider))?;
  let state = JsonStateStore::new(&data_dir);

  let sync_info = syncer.sync_info().await;
  let version = state.get(KEY_INITIAL_SYNC_VERSION).await?;

  println!("bootstrap version: {}", version.as_deref().unwrap_or("-"));
  println!("coins timestamp: {}", sync_info.coins_timestamp.as_deref().unwrap_or("-"));
  println!(
    "blockchains timestamp: {}",
    sync_info.blockchains_timestamp.as_deref().unwrap_or("-")
  );
  println!("tokens timestamp: {}", sync_info.tokens_timestamp.as_deref().unwrap_or("-"));
  Ok(())
}
