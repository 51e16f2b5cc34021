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

//! Storage traits for the sync layer.
//!
//! These traits keep ck-sync free of any concrete persistence engine; the
//! embedding application supplies the implementations.

use async_trait::async_trait;
use ck_models::{BlockchainRecord, Coin, TokenRecord};

use crate::error::SyncResult;

/// Persistent store for the catalog triple.
#[async_trait]
pub trait CoinStorage: Send + Sync {
  /// Replace the entire catalog in one atomic write.
  async fn update(
    &self,
    coins: Vec<Coin>,
    blockchain_records: Vec<BlockchainRecord>,
    token_records: Vec<TokenRecord>,
  ) -> SyncResult<()>;

  /// Full coin read, used by the dump path only.
  async fn all_coins(&self) -> SyncResult<Vec<Coin>>;

  /// Full blockchain read, used by the dump path only.
  async fn all_blockchain_records(&self) -> SyncResult<Vec<BlockchainRecord>>;

  /// Full token read, used by the dump path only.
  async fn all_token_records(&self) -> SyncResult<Vec<TokenRecord>>;
}

/// Key-value store for sync state: dataset timestamps and the bootstrap
/// version marker. Failures on individual keys are independent.
#[async_trait]
pub trait SyncStateStorage: Send + Sync {
  async fn get(&self, key: &str) -> SyncResult<Option<String>>;

  async fn set(&self, key: &str, value: &str) -> SyncResult<()>;

  async fn delete(&self, key: &str) -> SyncResult<()>;
}
