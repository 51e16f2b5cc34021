//! Bundled snapshot documents used for the one-time bootstrap.

use std::path::PathBuf;

use crate::error::{SyncError, SyncResult};

/// Source of the three snapshot documents read once at bootstrap.
pub trait BundleSource: Send + Sync {
  fn coins_json(&self) -> SyncResult<String>;

  fn blockchains_json(&self) -> SyncResult<String>;

  fn tokens_json(&self) -> SyncResult<String>;
}

/// Snapshot documents compiled into the crate.
pub struct BuiltinBundle;

impl BundleSource for BuiltinBundle {
  fn coins_json(&self) -> SyncResult<String> {
    Ok(include_str!("../dumps/coins.json").to_string())
  }

  fn blockchains_json(&self) -> SyncResult<String> {
    Ok(include_str!("../dumps/blockchains.json").to_string())
  }

  fn tokens_json(&self) -> SyncResult<String> {
    Ok(include_str!("../dumps/tokens.json").to_string())
  }
}

/// Snapshot documents read from a dump directory
/// (`coins.json`, `blockchains.json`, `tokens.json`).
pub struct FsBundle {
  dir: PathBuf,
}

impl FsBundle {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  fn read(&self, name: &str) -> SyncResult<String> {
    std::fs::read_to_string(self.dir.join(name))
      .map_err(|e| SyncError::Bundle(format!("{}: {}", name, e)))
  }
}

impl BundleSource for FsBundle {
  fn coins_json(&self) -> SyncResult<String> {
    self.read("coins.json")
  }

  fn blockchains_json(&self) -> SyncResult<String> {
    self.read("blockchains.json")
  }

  fn tokens_json(&self) -> SyncResult<String> {
    self.read("tokens.json")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ck_models::{BlockchainRecord, Coin, TokenRecord};

  #[test]
  fn test_builtin_bundle_parses() {
    let bundle = BuiltinBundle;

    let coins: Vec<Coin> = serde_json::from_str(&bundle.coins_json().unwrap()).unwrap();
    let blockchains: Vec<BlockchainRecord> =
      serde_json::from_str(&bundle.blockchains_json().unwrap()).unwrap();
    let tokens: Vec<TokenRecord> = serde_json::from_str(&bundle.tokens_json().unwrap()).unwrap();

    assert!(!coins.is_empty());
    assert!(!blockchains.is_empty());
    assert!(!tokens.is_empty());

    // Every bundled token points at a bundled coin and blockchain.
    for token in &tokens {
      assert!(coins.iter().any(|c| c.uid == token.coin_uid), "coin {}", token.coin_uid);
      assert!(
        blockchains.iter().any(|b| b.uid == token.blockchain_uid),
        "blockchain {}",
        token.blockchain_uid
      );
    }
  }

  #[test]
  fn test_fs_bundle_missing_file() {
    let bundle = FsBundle::new("/nonexistent/dump/dir");
    assert!(matches!(bundle.coins_json(), Err(SyncError::Bundle(_))));
  }
}
