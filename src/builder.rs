use std::time::Duration;

use reqwest::Client;

use crate::client::MealDbClient;
use crate::config::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_CATEGORY};
use crate::RecipeError;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; SeafoodCatalog/0.1)";

/// Builder for configuring a [`MealDbClient`]
#[derive(Debug, Default)]
pub struct MealDbClientBuilder {
    base_url: Option<String>,
    category: Option<String>,
    timeout: Option<Duration>,
}

impl MealDbClientBuilder {
    /// Override the API base URL
    ///
    /// Mostly useful to point the client at a local mock server.
    ///
    /// # Example
    /// ```
    /// use seafood_catalog::MealDbClient;
    ///
    /// let builder = MealDbClient::builder()
    ///     .base_url("http://127.0.0.1:1234");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the catalog category (defaults to `Seafood`)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use seafood_catalog::MealDbClient;
    /// use std::time::Duration;
    ///
    /// let builder = MealDbClient::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Apply every field of a loaded configuration
    pub fn config(self, config: &CatalogConfig) -> Self {
        self.base_url(config.base_url.clone())
            .category(config.category.clone())
            .timeout(Duration::from_secs(config.timeout))
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `RecipeError::BuilderError` if the base URL or category is
    /// blank, or if the underlying HTTP client cannot be created.
    pub fn build(self) -> Result<MealDbClient, RecipeError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(RecipeError::BuilderError(
                "Base URL cannot be empty".to_string(),
            ));
        }

        let category = self
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        if category.trim().is_empty() {
            return Err(RecipeError::BuilderError(
                "Category cannot be empty".to_string(),
            ));
        }

        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                RecipeError::BuilderError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(MealDbClient::new(client, base_url, category))
    }
}
