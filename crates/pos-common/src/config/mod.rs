//! Configuration structs

mod app_config;

pub use app_config::{AppConfig, AppSettings, AuthConfig, ConfigError, DatabaseConfig, Environment};
