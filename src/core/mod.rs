//! Core utilities shared across the application
//!
//! - `cache`: owned in-memory TTL cache and the clocks that drive it
//! - `config`: data directory, `config.json`, and env/flag precedence

pub mod cache;
pub mod config;

pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use config::{
    default_data_dir, resolve_data_dir, resolve_provider_url, resolve_trade_threshold, AppConfig,
};
