use thiserror::Error;

/// Errors that can occur while fetching recipes from TheMealDB
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The request never produced a response (offline, DNS, timeout)
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("HTTP Error {0}")]
    HttpStatus(u16),

    /// The response body was not the JSON we expected
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The lookup returned no recipe for the requested id
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Client builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
