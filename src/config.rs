use std::path::PathBuf;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend.
    pub api_base_url: String,
    /// Directory holding the durable key-value store.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("RECICLAPLUS_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let data_dir = std::env::var("RECICLAPLUS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("reciclaplus")
            });

        Self {
            api_base_url,
            data_dir,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
