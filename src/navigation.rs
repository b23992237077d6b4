//! Stack navigation between the catalog and detail screens.

use log::debug;

/// Named destinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The catalog list (root, no parameters)
    Catalog,
    /// A single recipe
    Detail { meal_id: String },
}

impl Route {
    /// Header title shown for the destination
    pub fn title(&self) -> &'static str {
        match self {
            Route::Catalog => crate::render::labels::CATALOG_TITLE,
            Route::Detail { .. } => crate::render::labels::DETAIL_TITLE,
        }
    }
}

/// Push/pop navigator rooted at [`Route::Catalog`]
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::Catalog],
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        // The root is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, route: Route) {
        debug!("Navigate to {:?}", route);
        self.stack.push(route);
    }

    /// Pop the top route. Returns the popped route, or `None` on the root.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        debug!("Back from {:?}", popped);
        popped
    }
}
