use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use crate::builder::MealDbClientBuilder;
use crate::model::{MealRecord, MealsEnvelope, RecipeDetail, RecipeSummary};
use crate::RecipeError;

/// Where the views get their data from
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch the fixed category listing.
    ///
    /// A `{"meals": null}` body is an empty catalog, not an error.
    async fn fetch_catalog(&self) -> Result<Vec<RecipeSummary>, RecipeError>;

    /// Look up one recipe by id. `Ok(None)` when nothing matched.
    async fn lookup_recipe(&self, meal_id: &str) -> Result<Option<RecipeDetail>, RecipeError>;
}

/// HTTP client for TheMealDB
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
    category: String,
}

impl MealDbClient {
    /// Creates a new builder for the client
    pub fn builder() -> MealDbClientBuilder {
        MealDbClientBuilder::default()
    }

    pub(crate) fn new(client: Client, base_url: String, category: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            category,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/filter.php", self.base_url)
    }

    pub fn lookup_url(&self) -> String {
        format!("{}/lookup.php", self.base_url)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn fetch_catalog(&self) -> Result<Vec<RecipeSummary>, RecipeError> {
        info!("Fetching {} catalog", self.category);

        let response = self
            .client
            .get(self.catalog_url())
            .query(&[("c", self.category.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: MealsEnvelope<RecipeSummary> = serde_json::from_str(&body)?;
        let meals = envelope.meals.unwrap_or_default();
        debug!("Catalog returned {} recipes", meals.len());
        Ok(meals)
    }

    async fn lookup_recipe(&self, meal_id: &str) -> Result<Option<RecipeDetail>, RecipeError> {
        info!("Looking up recipe {}", meal_id);

        // The status code is not checked here; an error page fails to decode instead.
        let body = self
            .client
            .get(self.lookup_url())
            .query(&[("i", meal_id)])
            .send()
            .await?
            .text()
            .await?;

        let envelope: MealsEnvelope<MealRecord> = serde_json::from_str(&body)?;
        let detail = envelope
            .meals
            .and_then(|meals| meals.into_iter().next())
            .map(MealRecord::into_detail);

        debug!("Lookup for {} found: {}", meal_id, detail.is_some());
        Ok(detail)
    }
}
