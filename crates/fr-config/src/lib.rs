mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;
mod upstream_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;
pub use upstream_config::UpstreamConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_UPSTREAM_BASE_URL: &str = "http://127.0.0.1:9000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const MAX_UPSTREAM_TIMEOUT_SECS: u64 = 300;

const DEFAULT_TRASH_ACTOR: &str = "admin";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
