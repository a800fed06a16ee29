//! Compiled-in Configuration
//!
//! The app has no runtime flags; everything it needs is fixed here.

use log::LevelFilter;

/// Upstream REST API root
pub const API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Number of entries requested from the list endpoint
pub const CATALOG_LIMIT: u32 = 60;

/// localStorage key holding the session flag
pub const SESSION_KEY: &str = "isLoggedIn";

/// Value stored under `SESSION_KEY` while logged in
pub const SESSION_VALUE: &str = "true";

pub const VALID_USERNAME: &str = "admin";
pub const VALID_PASSWORD: &str = "admin123";

/// Console log verbosity
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
