//! Status document reported by the catalog service

use serde::{Deserialize, Serialize};

/// Remote-assigned update timestamps, one per dataset.
///
/// The values are opaque integers; the sync layer only ever compares them for
/// equality against the last recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatus {
  pub coins: i64,
  pub blockchains: i64,
  pub tokens: i64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_deserialize() {
    let json = r#"{"coins":1712000000,"blockchains":1711000000,"tokens":1710000000}"#;
    let status: CatalogStatus = serde_json::from_str(json).unwrap();
    assert_eq!(status.coins, 1712000000);
    assert_eq!(status.blockchains, 1711000000);
    assert_eq!(status.tokens, 1710000000);
  }
}
