pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Default base URL for the remote catalog service
pub const DEFAULT_BASE_URL: &str = "https://api.blocksdecoded.com";

/// Platform name reported in the `app_platform` header
pub const APP_PLATFORM: &str = "rust";
