//! Core catalog records: coins, blockchains and token representations

use serde::{Deserialize, Serialize};

/// A tradable asset listed in the catalog. Identity is `uid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
  /// Stable unique identifier assigned by the catalog service
  pub uid: String,

  /// Human readable name
  pub name: String,

  /// Ticker code
  pub code: String,

  /// Market cap rank, when the catalog knows one
  #[serde(skip_serializing_if = "Option::is_none")]
  pub market_cap_rank: Option<u32>,

  /// Identifier in the external CoinGecko catalog
  #[serde(skip_serializing_if = "Option::is_none")]
  pub coingecko_id: Option<String>,
}

impl Coin {
  pub fn new(uid: impl Into<String>, name: impl Into<String>, code: impl Into<String>) -> Self {
    Self {
      uid: uid.into(),
      name: name.into(),
      code: code.into(),
      market_cap_rank: None,
      coingecko_id: None,
    }
  }
}

/// A blockchain known to the catalog. Identity is `uid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainRecord {
  pub uid: String,
  pub name: String,
}

impl BlockchainRecord {
  pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
    Self { uid: uid.into(), name: name.into() }
  }
}

/// One representation of a coin on one blockchain.
///
/// Intended uniqueness is `(coin_uid, blockchain_uid, token_type)`, but the
/// merge pipeline does not enforce it; stores that key on those fields see
/// last-write-wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
  /// References `Coin::uid`
  pub coin_uid: String,

  /// References `BlockchainRecord::uid`
  pub blockchain_uid: String,

  /// `"native"` or a variant tag such as `"derived:bip84"` / `"address_type:type145"`
  #[serde(rename = "type")]
  pub token_type: String,

  pub decimals: u32,

  /// Contract address or other on-chain reference, when one exists
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reference: Option<String>,
}

impl TokenRecord {
  pub fn new(
    coin_uid: impl Into<String>,
    blockchain_uid: impl Into<String>,
    token_type: impl Into<String>,
    decimals: u32,
  ) -> Self {
    Self {
      coin_uid: coin_uid.into(),
      blockchain_uid: blockchain_uid.into(),
      token_type: token_type.into(),
      decimals,
      reference: None,
    }
  }

  pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
    self.reference = Some(reference.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_coin_deserialize() {
    let json = r#"{"uid":"bitcoin","name":"Bitcoin","code":"BTC","market_cap_rank":1,"coingecko_id":"bitcoin"}"#;
    let coin: Coin = serde_json::from_str(json).unwrap();
    assert_eq!(coin.uid, "bitcoin");
    assert_eq!(coin.code, "BTC");
    assert_eq!(coin.market_cap_rank, Some(1));
    assert_eq!(coin.coingecko_id.as_deref(), Some("bitcoin"));
  }

  #[test]
  fn test_coin_optional_fields_absent() {
    let json = r#"{"uid":"xdce-crowd-sale","name":"XDC Network","code":"XDC"}"#;
    let coin: Coin = serde_json::from_str(json).unwrap();
    assert!(coin.market_cap_rank.is_none());
    assert!(coin.coingecko_id.is_none());
  }

  #[test]
  fn test_token_record_type_wire_name() {
    let json = r#"{"coin_uid":"bitcoin","blockchain_uid":"bitcoin","type":"native","decimals":8}"#;
    let token: TokenRecord = serde_json::from_str(json).unwrap();
    assert_eq!(token.token_type, "native");
    assert!(token.reference.is_none());

    let back = serde_json::to_string(&token).unwrap();
    assert!(back.contains(r#""type":"native""#));
    assert!(!back.contains("token_type"));
  }

  #[test]
  fn test_token_record_with_reference() {
    let token = TokenRecord::new("usdt", "ethereum", "eip20", 6)
      .with_reference("0xdac17f958d2ee523a2206206994597c13d831ec7");
    assert_eq!(token.reference.as_deref(), Some("0xdac17f958d2ee523a2206206994597c13d831ec7"));
  }
}
