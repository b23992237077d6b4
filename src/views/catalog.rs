//! Catalog screen state machine.
//!
//! The view keeps the last fetched list, a loading flag, the last error and
//! the filter text. What the user sees is derived from those four fields by
//! [`CatalogView::screen`]:
//!
//! - loading with nothing to show: full-screen spinner
//! - failed with nothing to show: full-screen error with a retry button
//! - otherwise: the filtered list, with the refresh indicator tied to loading
//!
//! A failed reload over a non-empty list keeps the stale list and hides the
//! error.

use log::{debug, warn};

use crate::model::{filter_recipes, RecipeSummary};
use crate::navigation::Route;
use crate::RecipeError;

/// Prefix for transport and decoding failures
pub const CATALOG_FAILURE_PREFIX: &str = "Falha ao carregar o catálogo: ";

/// User-visible message for a failed catalog fetch
pub fn catalog_error_message(error: &RecipeError) -> String {
    match error {
        RecipeError::HttpStatus(code) => format!("HTTP Error {}", code),
        other => format!("{}{}", CATALOG_FAILURE_PREFIX, other),
    }
}

/// Input events for the catalog screen
#[derive(Debug)]
pub enum CatalogMsg {
    /// The screen was mounted
    Mount,
    /// Pull-to-refresh
    Refresh,
    /// "Try again" button on the error screen
    Retry,
    /// Search text changed
    QueryChanged(String),
    /// An item was tapped
    Select { meal_id: String },
    /// A fetch completed
    Fetched(Result<Vec<RecipeSummary>, RecipeError>),
}

/// Side effects requested by the catalog screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    /// Issue the catalog fetch
    Fetch,
    /// Push a destination
    Navigate(Route),
}

/// What a renderer should draw
#[derive(Debug, PartialEq)]
pub enum CatalogScreen<'a> {
    Loading,
    Error {
        message: &'a str,
    },
    List {
        items: Vec<&'a RecipeSummary>,
        refreshing: bool,
    },
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    meals: Vec<RecipeSummary>,
    is_loading: bool,
    error: Option<String>,
    query: String,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            meals: Vec::new(),
            is_loading: true,
            error: None,
            query: String::new(),
        }
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a message, returning the side effect to run, if any.
    pub fn update(&mut self, msg: CatalogMsg) -> Option<CatalogAction> {
        match msg {
            CatalogMsg::Mount => Some(self.begin_fetch()),
            CatalogMsg::Refresh => {
                if !matches!(self.screen(), CatalogScreen::List { .. }) {
                    debug!("Ignoring refresh: list is not displayed");
                    return None;
                }
                Some(self.begin_fetch())
            }
            CatalogMsg::Retry => {
                if !self.shows_retry() {
                    debug!("Ignoring retry: error screen is not displayed");
                    return None;
                }
                Some(self.begin_fetch())
            }
            CatalogMsg::QueryChanged(query) => {
                self.query = query;
                None
            }
            CatalogMsg::Select { meal_id } => Some(CatalogAction::Navigate(Route::Detail {
                meal_id,
            })),
            CatalogMsg::Fetched(result) => {
                self.is_loading = false;
                match result {
                    Ok(meals) => {
                        debug!("Catalog loaded with {} recipes", meals.len());
                        self.meals = meals;
                    }
                    Err(e) => {
                        let message = catalog_error_message(&e);
                        warn!("{}", message);
                        self.error = Some(message);
                    }
                }
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> CatalogAction {
        self.is_loading = true;
        self.error = None;
        CatalogAction::Fetch
    }

    /// Derive the screen to draw from the current state
    pub fn screen(&self) -> CatalogScreen<'_> {
        if self.is_loading && self.meals.is_empty() {
            return CatalogScreen::Loading;
        }
        if let (Some(message), true) = (self.error.as_deref(), self.meals.is_empty()) {
            return CatalogScreen::Error { message };
        }
        CatalogScreen::List {
            items: self.visible(),
            refreshing: self.is_loading,
        }
    }

    /// Items matching the current filter, in fetch order
    pub fn visible(&self) -> Vec<&RecipeSummary> {
        filter_recipes(&self.meals, &self.query)
    }

    /// Whether the retry button is offered
    pub fn shows_retry(&self) -> bool {
        matches!(self.screen(), CatalogScreen::Error { .. })
    }

    pub fn meals(&self) -> &[RecipeSummary] {
        &self.meals
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last failure message, even when it is hidden behind a stale list
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> RecipeSummary {
        RecipeSummary {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail_url: format!("https://img/{}.jpg", id),
        }
    }

    fn loaded(items: Vec<RecipeSummary>) -> CatalogView {
        let mut view = CatalogView::new();
        view.update(CatalogMsg::Mount);
        view.update(CatalogMsg::Fetched(Ok(items)));
        view
    }

    #[test]
    fn test_initial_state_is_loading() {
        let view = CatalogView::new();
        assert_eq!(view.screen(), CatalogScreen::Loading);
    }

    #[test]
    fn test_mount_requests_fetch() {
        let mut view = CatalogView::new();
        assert_eq!(view.update(CatalogMsg::Mount), Some(CatalogAction::Fetch));
        assert!(view.is_loading());
    }

    #[test]
    fn test_loaded_preserves_order() {
        let view = loaded(vec![summary("2", "Zander"), summary("1", "Anchovy")]);
        match view.screen() {
            CatalogScreen::List { items, refreshing } => {
                assert!(!refreshing);
                let ids: Vec<&str> = items.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["2", "1"]);
            }
            other => panic!("Expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_catalog_is_not_error() {
        let view = loaded(Vec::new());
        assert_eq!(
            view.screen(),
            CatalogScreen::List {
                items: Vec::new(),
                refreshing: false
            }
        );
        assert!(view.last_error().is_none());
    }

    #[test]
    fn test_http_error_without_items_shows_error_screen() {
        let mut view = CatalogView::new();
        view.update(CatalogMsg::Mount);
        view.update(CatalogMsg::Fetched(Err(RecipeError::HttpStatus(500))));

        assert_eq!(
            view.screen(),
            CatalogScreen::Error {
                message: "HTTP Error 500"
            }
        );
        assert!(view.shows_retry());
    }

    #[test]
    fn test_error_after_load_keeps_stale_list() {
        let mut view = loaded(vec![summary("1", "Fish pie")]);
        assert_eq!(view.update(CatalogMsg::Refresh), Some(CatalogAction::Fetch));
        view.update(CatalogMsg::Fetched(Err(RecipeError::HttpStatus(500))));

        match view.screen() {
            CatalogScreen::List { items, .. } => assert_eq!(items.len(), 1),
            other => panic!("Expected stale list, got {:?}", other),
        }
        assert_eq!(view.last_error(), Some("HTTP Error 500"));
        assert!(!view.shows_retry());
    }

    #[test]
    fn test_decode_error_message_prefix() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let message = catalog_error_message(&RecipeError::Decode(err));
        assert!(message.starts_with("Falha ao carregar o catálogo: "));
    }

    #[test]
    fn test_retry_only_from_error_screen() {
        let mut view = loaded(vec![summary("1", "Fish pie")]);
        assert_eq!(view.update(CatalogMsg::Retry), None);

        let mut view = CatalogView::new();
        view.update(CatalogMsg::Mount);
        view.update(CatalogMsg::Fetched(Err(RecipeError::HttpStatus(503))));
        assert_eq!(view.update(CatalogMsg::Retry), Some(CatalogAction::Fetch));
        assert_eq!(view.screen(), CatalogScreen::Loading);
        assert!(view.last_error().is_none());
    }

    #[test]
    fn test_refresh_keeps_list_and_filter() {
        let mut view = loaded(vec![summary("1", "Fish pie"), summary("2", "Salmon")]);
        view.update(CatalogMsg::QueryChanged("fish".to_string()));

        assert_eq!(view.update(CatalogMsg::Refresh), Some(CatalogAction::Fetch));
        match view.screen() {
            CatalogScreen::List { items, refreshing } => {
                assert!(refreshing);
                assert_eq!(items.len(), 1);
            }
            other => panic!("Expected refreshing list, got {:?}", other),
        }

        view.update(CatalogMsg::Fetched(Ok(vec![
            summary("1", "Fish pie"),
            summary("3", "Fish soup"),
        ])));
        assert_eq!(view.query(), "fish");
        assert_eq!(view.visible().len(), 2);
    }

    #[test]
    fn test_refresh_ignored_while_initial_load() {
        let mut view = CatalogView::new();
        view.update(CatalogMsg::Mount);
        assert_eq!(view.update(CatalogMsg::Refresh), None);
    }

    #[test]
    fn test_filter_does_not_touch_meals() {
        let mut view = loaded(vec![summary("1", "Fish pie"), summary("2", "Salmon")]);
        assert_eq!(view.update(CatalogMsg::QueryChanged("SAL".to_string())), None);

        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.meals().len(), 2);

        view.update(CatalogMsg::QueryChanged(String::new()));
        assert_eq!(view.visible().len(), 2);
    }

    #[test]
    fn test_select_navigates_without_state_change() {
        let mut view = loaded(vec![summary("52959", "Baked salmon")]);
        let action = view.update(CatalogMsg::Select {
            meal_id: "52959".to_string(),
        });

        assert_eq!(
            action,
            Some(CatalogAction::Navigate(Route::Detail {
                meal_id: "52959".to_string()
            }))
        );
        assert!(!view.is_loading());
        assert_eq!(view.meals().len(), 1);
    }
}
