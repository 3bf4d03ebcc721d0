use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub web: WebConfig,
    pub storage: StorageConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the upstream content-platform API
    pub base_url: String,
    /// Static bearer token injected on every upstream request
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON key-value file backing the theme store
    pub theme_path: PathBuf,
    /// Scratch directory for upload previews
    pub preview_tmp_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub default_limit: u32,
    pub limit_options: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5000".to_string(),
                auth_token: None,
                timeout_secs: 30,
            },
            web: WebConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                base_url: "http://localhost:8080".to_string(),
            },
            storage: StorageConfig {
                theme_path: PathBuf::from("./data/theme.json"),
                preview_tmp_path: PathBuf::from("./data/previews"),
            },
            listing: ListingConfig {
                default_limit: crate::table::DEFAULT_LIMIT,
                limit_options: crate::table::LIMIT_OPTIONS.to_vec(),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(&config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::create_dir_all("./data/previews")?;
            std::fs::write(&config_file, contents)?;
            Ok(default_config)
        }
    }
}
