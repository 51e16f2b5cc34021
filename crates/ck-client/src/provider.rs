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

//! Trait for remote catalog providers.

use async_trait::async_trait;
use ck_core::Result;
use ck_models::{BlockchainRecord, CatalogStatus, Coin, TokenRecord};

/// Contract the sync layer consumes for remote catalog data.
///
/// Each fetch returns the full dataset; a transport or parse failure on any
/// of them aborts the whole sync attempt.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
  /// Current remote dataset timestamps.
  async fn status(&self) -> Result<CatalogStatus>;

  /// Full coin list.
  async fn all_coins(&self) -> Result<Vec<Coin>>;

  /// Full blockchain list.
  async fn all_blockchain_records(&self) -> Result<Vec<BlockchainRecord>>;

  /// Full token list.
  async fn all_token_records(&self) -> Result<Vec<TokenRecord>>;
}
