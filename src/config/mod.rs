//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/photo-pins/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::flickr::SearchSettings;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Provider credentials and endpoint
    #[serde(default)]
    pub api: ApiConfig,

    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

/// Provider credentials and endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Provider API key
    #[serde(default)]
    pub key: String,

    /// REST endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

/// Search behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search circle radius in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// Photos per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Highest page considered when picking a random page
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Ask the provider to filter unsafe content
    #[serde(default = "default_safe_search")]
    pub safe_search: bool,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Default value functions for serde
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}
fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}
fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}
fn default_safe_search() -> bool {
    DEFAULT_SAFE_SEARCH
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            endpoint: default_endpoint(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            per_page: default_per_page(),
            max_pages: default_max_pages(),
            safe_search: default_safe_search(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path ("section.key")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "key"] => Some(self.api.key.clone()),
            ["api", "endpoint"] => Some(self.api.endpoint.clone()),

            ["search", "radius_km"] => Some(self.search.radius_km.to_string()),
            ["search", "per_page"] => Some(self.search.per_page.to_string()),
            ["search", "max_pages"] => Some(self.search.max_pages.to_string()),
            ["search", "safe_search"] => Some(self.search.safe_search.to_string()),

            ["http", "timeout_secs"] => Some(self.http.timeout_secs.to_string()),
            ["http", "user_agent"] => Some(self.http.user_agent.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path ("section.key")
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "key"] => {
                self.api.key = value.to_string();
            }
            ["api", "endpoint"] => {
                self.api.endpoint = value.to_string();
            }

            ["search", "radius_km"] => {
                let radius: f64 = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid radius value: {}", value)))?;
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(Error::Config(format!("Radius must be positive: {}", value)));
                }
                self.search.radius_km = radius;
            }
            ["search", "per_page"] => {
                self.search.per_page = parse_positive(value, "per_page")?;
            }
            ["search", "max_pages"] => {
                self.search.max_pages = parse_positive(value, "max_pages")?;
            }
            ["search", "safe_search"] => {
                self.search.safe_search = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid boolean value: {}", value)))?;
            }

            ["http", "timeout_secs"] => {
                self.http.timeout_secs = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid timeout value: {}", value)))?;
            }
            ["http", "user_agent"] => {
                self.http.user_agent = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "api.key",
            "api.endpoint",
            "search.radius_km",
            "search.per_page",
            "search.max_pages",
            "search.safe_search",
            "http.timeout_secs",
            "http.user_agent",
        ]
    }

    /// Search settings for the client, with an optional API key override
    pub fn search_settings(&self, api_key: Option<&str>) -> SearchSettings {
        SearchSettings {
            api_key: api_key.unwrap_or(&self.api.key).to_string(),
            endpoint: self.api.endpoint.clone(),
            distance_km: self.search.radius_km,
            per_page: self.search.per_page,
            max_pages: self.search.max_pages,
            safe_search: self.search.safe_search,
        }
    }
}

fn parse_positive(value: &str, name: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Config(format!("Invalid {} value: {}", name, value))),
    }
}
