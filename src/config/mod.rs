//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, IdConfig, LogFormat, LoggingConfig, MongoSettings, ServerConfig, StorageSettings,
};
