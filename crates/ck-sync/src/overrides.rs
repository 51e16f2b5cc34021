/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Supplemental catalog records injected alongside remote data.

use ck_models::{BlockchainRecord, Coin, TokenRecord};

/// Hand-maintained records for assets the remote catalog does not list yet.
///
/// The table is appended to every fetched or bootstrapped dataset before
/// persistence, so its records survive regardless of remote content. There
/// is no deduplication against remote uids: stores that key on uid observe
/// last-write-wins (the override shadows the remote entry), stores that do
/// not will hold duplicates.
#[derive(Debug, Clone)]
pub struct CatalogOverrides {
  pub coins: Vec<Coin>,
  pub blockchains: Vec<BlockchainRecord>,
  pub tokens: Vec<TokenRecord>,
}

impl CatalogOverrides {
  /// An override table with no records.
  pub fn empty() -> Self {
    Self { coins: Vec::new(), blockchains: Vec::new(), tokens: Vec::new() }
  }

  pub fn is_empty(&self) -> bool {
    self.coins.is_empty() && self.blockchains.is_empty() && self.tokens.is_empty()
  }
}

impl Default for CatalogOverrides {
  fn default() -> Self {
    let mut xdc = Coin::new("xdce-crowd-sale", "XDC Network", "XDC");
    xdc.coingecko_id = Some("xdce-crowd-sale".to_string());

    let mut mew = Coin::new("cat-in-a-dogs-world", "cat in a dogs world", "MEW");
    mew.market_cap_rank = Some(150);
    mew.coingecko_id = Some("cat-in-a-dogs-world".to_string());

    Self {
      coins: vec![xdc, mew],
      blockchains: vec![BlockchainRecord::new("xdc-network", "xdc-network")],
      tokens: vec![
        TokenRecord::new("xdce-crowd-sale", "xdc-network", "native", 18),
        TokenRecord::new("cat-in-a-dogs-world", "solana", "spl", 5)
          .with_reference("MEW1gQWJ3nEXg2qgERiKu7FAFj79PHvQVREQUzScPP5"),
      ],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_overrides_reference_known_uids() {
    let overrides = CatalogOverrides::default();

    // Every override token must point at an override coin or a remote uid
    // that is stable ("solana").
    let coin_uids: Vec<&str> = overrides.coins.iter().map(|c| c.uid.as_str()).collect();
    assert!(coin_uids.contains(&"xdce-crowd-sale"));
    assert!(coin_uids.contains(&"cat-in-a-dogs-world"));

    for token in &overrides.tokens {
      assert!(coin_uids.contains(&token.coin_uid.as_str()));
    }
  }

  #[test]
  fn test_empty() {
    let overrides = CatalogOverrides::empty();
    assert!(overrides.is_empty());
    assert!(!CatalogOverrides::default().is_empty());
  }
}
