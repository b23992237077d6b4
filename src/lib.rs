pub mod app;
pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod link;
pub mod model;
pub mod navigation;
pub mod render;
pub mod uniffi_bindings;
pub mod views;

use log::debug;

pub use app::{App, AppMsg};
pub use builder::MealDbClientBuilder;
pub use client::{MealDbClient, RecipeSource};
pub use config::CatalogConfig;
pub use error::RecipeError;
pub use link::{LinkOpener, SystemLinkOpener};
pub use model::{filter_recipes, IngredientSlot, RecipeDetail, RecipeSummary};
pub use navigation::{Navigator, Route};

pub use uniffi_bindings::{FfiClientConfig, FfiRecipeDetail, FfiRecipeError, FfiRecipeSummary};

/// Build a client from `mealdb.toml` / `MEALDB__*` settings
pub fn client_from_config() -> Result<MealDbClient, RecipeError> {
    let config = CatalogConfig::load()?;
    debug!("Loaded configuration: {:?}", config);
    MealDbClient::builder().config(&config).build()
}

/// Fetch the catalog described by `config`
///
/// # Example
/// ```no_run
/// use seafood_catalog::CatalogConfig;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = seafood_catalog::fetch_catalog(&CatalogConfig::default()).await?;
/// for recipe in recipes {
///     println!("{} {}", recipe.id, recipe.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_catalog(config: &CatalogConfig) -> Result<Vec<RecipeSummary>, RecipeError> {
    MealDbClient::builder()
        .config(config)
        .build()?
        .fetch_catalog()
        .await
}

/// Look up one recipe
///
/// Unlike [`RecipeSource::lookup_recipe`], an empty result is an error.
pub async fn fetch_recipe_detail(
    meal_id: &str,
    config: &CatalogConfig,
) -> Result<RecipeDetail, RecipeError> {
    MealDbClient::builder()
        .config(config)
        .build()?
        .lookup_recipe(meal_id)
        .await?
        .ok_or_else(|| RecipeError::NotFound(meal_id.to_string()))
}
