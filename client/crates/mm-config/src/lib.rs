mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod matches_config;
mod selection_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use matches_config::{MatchesConfig, MatchesMode};
pub use selection_config::SelectionConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "MM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".matchmaker";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "https://sci-server.onrender.com";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_SELECTION_CAPACITY: usize = 3;
const MIN_SELECTION_CAPACITY: usize = 1;
const MAX_SELECTION_CAPACITY: usize = 10;

const DEFAULT_STORAGE_DIR: &str = "session";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
