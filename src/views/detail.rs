//! Detail screen state machine.

use log::{debug, warn};

use crate::model::RecipeDetail;
use crate::RecipeError;

pub const NOT_FOUND_MESSAGE: &str = "Receita não encontrada.";
pub const FETCH_FAILED_MESSAGE: &str = "Erro ao buscar detalhes da receita.";

/// Input events for the detail screen
#[derive(Debug)]
pub enum DetailMsg {
    /// The screen was mounted with its navigation parameter
    Mount,
    /// A lookup completed
    Fetched(Result<Option<RecipeDetail>, RecipeError>),
    /// The video button was pressed
    OpenVideo,
}

/// Side effects requested by the detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    /// Look up the recipe
    Fetch { meal_id: String },
    /// Hand a URL to the platform opener
    OpenLink(String),
}

/// What a renderer should draw
#[derive(Debug, PartialEq)]
pub enum DetailScreen<'a> {
    Loading,
    Error { message: Option<&'a str> },
    Loaded(&'a RecipeDetail),
}

#[derive(Debug, Clone)]
pub struct DetailView {
    meal_id: String,
    meal: Option<RecipeDetail>,
    is_loading: bool,
    error: Option<String>,
}

impl DetailView {
    pub fn new(meal_id: impl Into<String>) -> Self {
        Self {
            meal_id: meal_id.into(),
            meal: None,
            is_loading: true,
            error: None,
        }
    }

    pub fn meal_id(&self) -> &str {
        &self.meal_id
    }

    /// Apply a message, returning the side effect to run, if any.
    pub fn update(&mut self, msg: DetailMsg) -> Option<DetailAction> {
        match msg {
            DetailMsg::Mount => Some(DetailAction::Fetch {
                meal_id: self.meal_id.clone(),
            }),
            DetailMsg::Fetched(result) => {
                self.is_loading = false;
                match result {
                    Ok(Some(meal)) => {
                        debug!("Loaded recipe {} ({})", meal.id, meal.title);
                        self.meal = Some(meal);
                    }
                    Ok(None) => {
                        warn!("No recipe found for {}", self.meal_id);
                        self.error = Some(NOT_FOUND_MESSAGE.to_string());
                    }
                    Err(e) => {
                        warn!("Lookup for {} failed: {}", self.meal_id, e);
                        self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                    }
                }
                None
            }
            DetailMsg::OpenVideo => {
                let url = self.video_link()?;
                Some(DetailAction::OpenLink(url.to_string()))
            }
        }
    }

    /// Derive the screen to draw from the current state
    pub fn screen(&self) -> DetailScreen<'_> {
        if self.is_loading {
            return DetailScreen::Loading;
        }
        match (&self.meal, self.error.as_deref()) {
            (Some(meal), None) => DetailScreen::Loaded(meal),
            (_, message) => DetailScreen::Error { message },
        }
    }

    /// The video link, when the loaded recipe has a non-empty one
    pub fn video_link(&self) -> Option<&str> {
        match self.screen() {
            DetailScreen::Loaded(meal) => meal.video_link(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
