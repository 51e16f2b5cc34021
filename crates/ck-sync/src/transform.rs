//! Token record expansion for blockchains with multiple addressing schemes.
//!
//! The remote catalog lists a single `"native"` record per coin on these
//! blockchains; wallets need one record per derivation or address-type
//! variant. Expansion consumes the native record and appends the variants.

use ck_models::{AddressType, Derivation, TokenRecord, NATIVE_TOKEN_TYPE};

/// Variant tags for one blockchain.
#[derive(Debug, Clone)]
pub struct ExpansionRule {
  pub blockchain_uid: String,
  pub token_types: Vec<String>,
}

impl ExpansionRule {
  pub fn new(blockchain_uid: impl Into<String>, token_types: Vec<String>) -> Self {
    Self { blockchain_uid: blockchain_uid.into(), token_types }
  }
}

/// Configured expansion rules, applied to the full token list after merge.
#[derive(Debug, Clone)]
pub struct TokenExpansion {
  rules: Vec<ExpansionRule>,
}

impl TokenExpansion {
  pub fn new(rules: Vec<ExpansionRule>) -> Self {
    Self { rules }
  }

  /// No expansion at all; every record passes through unchanged.
  pub fn none() -> Self {
    Self { rules: Vec::new() }
  }

  fn rule_for(&self, blockchain_uid: &str) -> Option<&ExpansionRule> {
    self.rules.iter().find(|rule| rule.blockchain_uid == blockchain_uid)
  }

  /// Expand native records on configured blockchains into variant records.
  ///
  /// Every native record on a configured blockchain is consumed, keyed on
  /// `(coin_uid, blockchain_uid)`. Each consumed record yields one variant
  /// record per configured tag, copying `coin_uid`, `blockchain_uid` and
  /// `decimals`; `reference` is left unset. Unrelated records keep their
  /// relative order; variants are appended at the end.
  pub fn expand(&self, token_records: Vec<TokenRecord>) -> Vec<TokenRecord> {
    let mut kept = Vec::with_capacity(token_records.len());
    let mut variants = Vec::new();

    for record in token_records {
      match self.rule_for(&record.blockchain_uid) {
        Some(rule) if record.token_type == NATIVE_TOKEN_TYPE => {
          for token_type in &rule.token_types {
            variants.push(TokenRecord::new(
              record.coin_uid.clone(),
              record.blockchain_uid.clone(),
              token_type.clone(),
              record.decimals,
            ));
          }
        }
        _ => kept.push(record),
      }
    }

    kept.extend(variants);
    kept
  }
}

impl Default for TokenExpansion {
  fn default() -> Self {
    let derivation_types: Vec<String> =
      Derivation::all().iter().map(|d| d.token_type()).collect();
    let address_types: Vec<String> = AddressType::all().iter().map(|a| a.token_type()).collect();

    Self {
      rules: vec![
        ExpansionRule::new("bitcoin", derivation_types.clone()),
        ExpansionRule::new("litecoin", derivation_types),
        ExpansionRule::new("bitcoin-cash", address_types),
      ],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn native(coin_uid: &str, blockchain_uid: &str, decimals: u32) -> TokenRecord {
    TokenRecord::new(coin_uid, blockchain_uid, NATIVE_TOKEN_TYPE, decimals)
  }

  #[test]
  fn test_expand_native_bitcoin() {
    let expansion = TokenExpansion::default();
    let records = vec![
      native("bitcoin", "bitcoin", 8),
      TokenRecord::new("ethereum", "ethereum", "native", 18),
    ];

    let out = expansion.expand(records);

    let bitcoin: Vec<&TokenRecord> =
      out.iter().filter(|t| t.blockchain_uid == "bitcoin").collect();
    assert_eq!(bitcoin.len(), 4);
    assert!(bitcoin.iter().all(|t| t.token_type != NATIVE_TOKEN_TYPE));
    assert!(bitcoin.iter().all(|t| t.coin_uid == "bitcoin" && t.decimals == 8));
    assert!(bitcoin.iter().all(|t| t.reference.is_none()));

    let tags: Vec<&str> = bitcoin.iter().map(|t| t.token_type.as_str()).collect();
    assert_eq!(tags, vec!["derived:bip44", "derived:bip49", "derived:bip84", "derived:bip86"]);

    // Ethereum record is untouched and still first.
    assert_eq!(out[0].blockchain_uid, "ethereum");
    assert_eq!(out[0].token_type, NATIVE_TOKEN_TYPE);
  }

  #[test]
  fn test_expand_address_types() {
    let expansion = TokenExpansion::default();
    let out = expansion.expand(vec![native("bitcoin-cash", "bitcoin-cash", 8)]);

    let tags: Vec<&str> = out.iter().map(|t| t.token_type.as_str()).collect();
    assert_eq!(tags, vec!["address_type:type0", "address_type:type145"]);
  }

  #[test]
  fn test_expand_no_native_is_noop() {
    let expansion = TokenExpansion::default();
    let records = vec![
      TokenRecord::new("wrapped-bitcoin", "ethereum", "eip20", 8)
        .with_reference("0x2260fac5e5542a773aa44fbcfedf7c193bc2c599"),
    ];

    let out = expansion.expand(records.clone());
    assert_eq!(out, records);
  }

  #[test]
  fn test_expand_every_native_per_blockchain() {
    // Two coins with native records on the same configured blockchain are
    // both expanded.
    let expansion = TokenExpansion::default();
    let out = expansion.expand(vec![
      native("litecoin", "litecoin", 8),
      native("some-fork", "litecoin", 8),
    ]);

    assert_eq!(out.len(), 8);
    assert_eq!(out.iter().filter(|t| t.coin_uid == "litecoin").count(), 4);
    assert_eq!(out.iter().filter(|t| t.coin_uid == "some-fork").count(), 4);
    assert!(out.iter().all(|t| t.token_type.starts_with("derived:")));
  }

  #[test]
  fn test_non_native_on_configured_blockchain_is_kept() {
    let expansion = TokenExpansion::default();
    let omni = TokenRecord::new("tether", "bitcoin", "omni", 8);

    let out = expansion.expand(vec![omni.clone()]);
    assert_eq!(out, vec![omni]);
  }

  #[test]
  fn test_none_passes_through() {
    let expansion = TokenExpansion::none();
    let records = vec![native("bitcoin", "bitcoin", 8)];
    assert_eq!(expansion.expand(records.clone()), records);
  }
}
