use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::ChefError;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Generation-service API key (can also be set via GEMINI_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier for the generation service
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL for the generation API (overridable for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Webhook endpoint backing the shared spreadsheet listing
    #[serde(default = "default_script_url")]
    pub script_url: String,
    /// Path of the local saved-recipes file
    #[serde(default = "default_store_path")]
    pub store_path: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_script_url() -> String {
    "https://script.google.com/macros/s/AKfycbymeMOdoATF_dhkBDZvGTHkadcawjZ0W5dPISyQDR-4JZr0gJcKiI2OlraVcQZa3JI/exec"
        .to_string()
}

fn default_store_path() -> String {
    "my_saved_recipes.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            script_url: default_script_url(),
            store_path: default_store_path(),
            timeout: default_timeout(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with AICHEF__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: AICHEF__API_KEY, AICHEF__SCRIPT_URL, ...
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("AICHEF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve a usable API key or block the call path with remediation steps.
    ///
    /// Checked before any generation request is attempted. A key shorter than
    /// ten characters or the literal "undefined" placeholder (what a broken
    /// env injection produces) counts as missing.
    pub fn require_api_key(&self) -> Result<String, ChefError> {
        let key = self
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .unwrap_or_default();

        if key.len() < 10 || key == "undefined" {
            return Err(ChefError::MissingApiKey);
        }
        Ok(key)
    }
}
