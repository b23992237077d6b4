//! UniFFI bindings for seafood-catalog
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.
//! The view state machines stay on the Rust side of the API surface; mobile front ends
//! get the fetch, filter and ingredient-derivation primitives.

use std::fmt;

use crate::views::catalog::catalog_error_message;
use crate::views::detail::{FETCH_FAILED_MESSAGE, NOT_FOUND_MESSAGE};
use crate::{CatalogConfig, RecipeDetail, RecipeError, RecipeSummary};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible catalog entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
}

impl From<RecipeSummary> for FfiRecipeSummary {
    fn from(summary: RecipeSummary) -> Self {
        FfiRecipeSummary {
            id: summary.id,
            title: summary.title,
            thumbnail_url: summary.thumbnail_url,
        }
    }
}

impl From<FfiRecipeSummary> for RecipeSummary {
    fn from(ffi: FfiRecipeSummary) -> Self {
        RecipeSummary {
            id: ffi.id,
            title: ffi.title,
            thumbnail_url: ffi.thumbnail_url,
        }
    }
}

/// FFI-compatible recipe detail, with ingredient lines already derived
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDetail {
    pub id: String,
    pub title: String,
    pub cuisine_area: String,
    pub instructions: String,
    /// `None` when the record has no usable video link
    pub video_url: Option<String>,
    pub ingredient_lines: Vec<String>,
}

impl From<RecipeDetail> for FfiRecipeDetail {
    fn from(detail: RecipeDetail) -> Self {
        FfiRecipeDetail {
            ingredient_lines: detail.ingredient_lines(),
            video_url: detail.video_link().map(str::to_string),
            id: detail.id,
            title: detail.title,
            cuisine_area: detail.cuisine_area,
            instructions: detail.instructions,
        }
    }
}

/// FFI-compatible error type
///
/// `message` is the text the screen should show.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiRecipeError {
    /// Transport failure or undecodable body
    NetworkFailure { message: String },
    /// Non-success HTTP status
    HttpStatusFailure { status: u16, message: String },
    /// The lookup matched nothing
    EmptyResult { message: String },
    /// Client builder configuration error
    BuilderError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiRecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiRecipeError::NetworkFailure { message } => write!(f, "{}", message),
            FfiRecipeError::HttpStatusFailure { message, .. } => write!(f, "{}", message),
            FfiRecipeError::EmptyResult { message } => write!(f, "{}", message),
            FfiRecipeError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiRecipeError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiRecipeError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiRecipeError {}

impl FfiRecipeError {
    /// Map a catalog failure to the catalog screen's wording
    fn from_catalog(err: RecipeError) -> Self {
        match err {
            RecipeError::HttpStatus(status) => FfiRecipeError::HttpStatusFailure {
                status,
                message: catalog_error_message(&err),
            },
            RecipeError::Network(_) | RecipeError::Decode(_) | RecipeError::NotFound(_) => {
                FfiRecipeError::NetworkFailure {
                    message: catalog_error_message(&err),
                }
            }
            other => Self::from_setup(other),
        }
    }

    /// Map a lookup failure to the detail screen's wording
    fn from_detail(err: RecipeError) -> Self {
        match err {
            RecipeError::NotFound(_) => FfiRecipeError::EmptyResult {
                message: NOT_FOUND_MESSAGE.to_string(),
            },
            RecipeError::Network(_) | RecipeError::Decode(_) | RecipeError::HttpStatus(_) => {
                FfiRecipeError::NetworkFailure {
                    message: FETCH_FAILED_MESSAGE.to_string(),
                }
            }
            other => Self::from_setup(other),
        }
    }

    fn from_setup(err: RecipeError) -> Self {
        match err {
            RecipeError::BuilderError(message) => FfiRecipeError::BuilderError { message },
            other => FfiRecipeError::ConfigError {
                message: other.to_string(),
            },
        }
    }
}

/// Client configuration for FFI calls
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiClientConfig {
    /// Optional API base URL (uses the public endpoint if not specified)
    pub base_url: Option<String>,
    /// Optional category (uses Seafood if not specified)
    pub category: Option<String>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
}

impl From<FfiClientConfig> for CatalogConfig {
    fn from(ffi: FfiClientConfig) -> Self {
        let defaults = CatalogConfig::default();
        CatalogConfig {
            base_url: ffi.base_url.unwrap_or(defaults.base_url),
            category: ffi.category.unwrap_or(defaults.category),
            timeout: ffi.timeout_seconds.unwrap_or(defaults.timeout),
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiRecipeError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiRecipeError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Fetch the recipe catalog
///
/// # Arguments
/// * `config` - Optional client configuration
///
/// # Returns
/// The catalog entries in the order the API returned them. An empty
/// catalog is not an error.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn fetch_catalog(
    config: Option<FfiClientConfig>,
) -> Result<Vec<FfiRecipeSummary>, FfiRecipeError> {
    let config: CatalogConfig = config.unwrap_or_default().into();
    let rt = create_runtime()?;
    let meals = rt
        .block_on(crate::fetch_catalog(&config))
        .map_err(FfiRecipeError::from_catalog)?;
    Ok(meals.into_iter().map(FfiRecipeSummary::from).collect())
}

/// Fetch one recipe by id
///
/// # Arguments
/// * `meal_id` - Identifier taken from a catalog entry
/// * `config` - Optional client configuration
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn fetch_recipe_detail(
    meal_id: String,
    config: Option<FfiClientConfig>,
) -> Result<FfiRecipeDetail, FfiRecipeError> {
    let config: CatalogConfig = config.unwrap_or_default().into();
    let rt = create_runtime()?;
    rt.block_on(crate::fetch_recipe_detail(&meal_id, &config))
        .map(FfiRecipeDetail::from)
        .map_err(FfiRecipeError::from_detail)
}

/// Filter catalog entries by title, case-insensitively
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn filter_catalog(items: Vec<FfiRecipeSummary>, query: String) -> Vec<FfiRecipeSummary> {
    let items: Vec<RecipeSummary> = items.into_iter().map(RecipeSummary::from).collect();
    crate::filter_recipes(&items, &query)
        .into_iter()
        .cloned()
        .map(FfiRecipeSummary::from)
        .collect()
}
