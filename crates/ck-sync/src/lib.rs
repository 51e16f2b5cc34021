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

//! # ck-sync
//!
//! Catalog synchronization core:
//! - One-time bootstrap from a bundled snapshot, gated by a schema version
//! - Staleness tracking against remote-reported dataset timestamps
//! - Merge of remote data with injected override records
//! - Expansion of native token records into derivation/address-type variants
//!
//! The remote client and both stores are consumed through traits; this crate
//! owns only the reconciliation policy.

pub mod bundle;
pub mod error;
pub mod overrides;
pub mod state;
pub mod storage;
pub mod syncer;
pub mod transform;

// Re-export commonly used types
pub use bundle::{BuiltinBundle, BundleSource, FsBundle};
pub use error::{SyncError, SyncResult};
pub use overrides::CatalogOverrides;
pub use state::{SyncDataset, SyncInfo, SyncStateTracker};
pub use storage::{CoinStorage, SyncStateStorage};
pub use syncer::{BootstrapOutcome, CoinSyncer, SyncOutcome, BOOTSTRAP_VERSION};
pub use transform::{ExpansionRule, TokenExpansion};

// Prelude for convenient imports
pub mod prelude {
  pub use crate::{
    BootstrapOutcome, BuiltinBundle, BundleSource, CatalogOverrides, CoinStorage, CoinSyncer,
    SyncError, SyncOutcome, SyncResult, SyncStateStorage, TokenExpansion,
  };
}
