pub mod catalog;
pub mod detail;

pub use catalog::{CatalogAction, CatalogMsg, CatalogScreen, CatalogView};
pub use detail::{DetailAction, DetailMsg, DetailScreen, DetailView};
