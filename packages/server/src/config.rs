use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory episode audio files are written to.
    pub uploads_dir: PathBuf,
    /// Maximum accepted audio payload, in bytes.
    pub max_blob_size: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("storage.uploads_dir", "./uploads")?
            .set_default("storage.max_blob_size", 256 * 1024 * 1024)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., PODCAST__DATABASE__URL)
            .add_source(Environment::with_prefix("PODCAST").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
