use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Public TheMealDB v1 endpoint with the shared test key.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Category requested by the catalog screen.
pub const DEFAULT_CATEGORY: &str = "Seafood";

/// Client configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the API, without the endpoint file name
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Category passed to `filter.php?c=`
    #[serde(default = "default_category")]
    pub category: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            category: default_category(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: MEALDB__BASE_URL, MEALDB__TIMEOUT
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("mealdb").required(false))
        .add_source(
            Environment::with_prefix("MEALDB")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
