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

//! Token type vocabulary for blockchains with multiple addressing schemes.

use std::fmt;

/// Token type tag of an asset's default on-chain representation.
pub const NATIVE_TOKEN_TYPE: &str = "native";

/// BIP derivation schemes for bitcoin-family blockchains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Derivation {
  Bip44,
  Bip49,
  Bip84,
  Bip86,
}

impl Derivation {
  pub fn all() -> [Derivation; 4] {
    [Derivation::Bip44, Derivation::Bip49, Derivation::Bip84, Derivation::Bip86]
  }

  /// Full token type tag, e.g. `derived:bip84`.
  pub fn token_type(&self) -> String {
    format!("derived:{self}")
  }
}

impl fmt::Display for Derivation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Derivation::Bip44 => write!(f, "bip44"),
      Derivation::Bip49 => write!(f, "bip49"),
      Derivation::Bip84 => write!(f, "bip84"),
      Derivation::Bip86 => write!(f, "bip86"),
    }
  }
}

/// Address formats for blockchains that kept a legacy format alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
  Type0,
  Type145,
}

impl AddressType {
  pub fn all() -> [AddressType; 2] {
    [AddressType::Type0, AddressType::Type145]
  }

  /// Full token type tag, e.g. `address_type:type145`.
  pub fn token_type(&self) -> String {
    format!("address_type:{self}")
  }
}

impl fmt::Display for AddressType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AddressType::Type0 => write!(f, "type0"),
      AddressType::Type145 => write!(f, "type145"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_derivation_tags() {
    let tags: Vec<String> = Derivation::all().iter().map(|d| d.token_type()).collect();
    assert_eq!(tags, vec!["derived:bip44", "derived:bip49", "derived:bip84", "derived:bip86"]);
  }

  #[test]
  fn test_address_type_tags() {
    let tags: Vec<String> = AddressType::all().iter().map(|a| a.token_type()).collect();
    assert_eq!(tags, vec!["address_type:type0", "address_type:type145"]);
  }
}
