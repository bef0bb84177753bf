mod assets_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod site_config;


pub use assets_config::AssetsConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use site_config::SiteConfig;

const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".folio";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "folio.db";

const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 7;
const MIN_SESSION_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_ASSETS_ROOT: &str = "static/images";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const MAX_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

const DEFAULT_PUBLIC_URL: &str = "/login";
