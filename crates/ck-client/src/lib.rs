//! # ck-client
//!
//! HTTP client for the coinkit catalog service.
//!
//! This crate provides:
//! - [`Transport`]: reqwest-based GET transport with catalog headers and
//!   retry/backoff
//! - [`CatalogClient`]: the typed endpoints (status, coins, blockchains,
//!   tokens)
//! - [`CatalogProvider`]: the trait the sync layer consumes, implemented by
//!   [`CatalogClient`] and by test doubles

pub mod client;
pub mod provider;
pub mod transport;

pub use client::CatalogClient;
pub use provider::CatalogProvider;
pub use transport::Transport;
