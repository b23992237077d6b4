//! Plain-text rendering of the two screens.

use crate::views::{CatalogScreen, CatalogView, DetailScreen, DetailView};

/// User-facing strings of the app (pt-BR)
pub mod labels {
    pub const CATALOG_TITLE: &str = "Receitas (Seafood)";
    pub const DETAIL_TITLE: &str = "Detalhes da Receita";
    pub const CATALOG_LOADING: &str = "Carregando receitas...";
    pub const DETAIL_LOADING: &str = "Carregando detalhes...";
    pub const SEARCH_PLACEHOLDER: &str = "Buscar receita...";
    pub const NO_RESULTS: &str = "Nenhum resultado encontrado.";
    pub const ITEM_HINT: &str = "Clique para ver a receita completa.";
    pub const ITEM_BUTTON: &str = "Ver Detalhes";
    pub const RETRY_BUTTON: &str = "Tentar Novamente";
    pub const REFRESHING: &str = "Atualizando...";
    pub const DETAIL_UNAVAILABLE: &str = "Dados indisponíveis.";
    pub const CUISINE: &str = "Culinária";
    pub const INGREDIENTS: &str = "Ingredientes:";
    pub const INSTRUCTIONS: &str = "Instruções:";
    pub const VIDEO_BUTTON: &str = "Ver Vídeo no YouTube";
}

pub fn render_catalog(view: &CatalogView) -> String {
    let mut lines = vec![format!("== {} ==", labels::CATALOG_TITLE)];

    match view.screen() {
        CatalogScreen::Loading => lines.push(labels::CATALOG_LOADING.to_string()),
        CatalogScreen::Error { message } => {
            lines.push(message.to_string());
            lines.push(format!("[{}]", labels::RETRY_BUTTON));
        }
        CatalogScreen::List { items, refreshing } => {
            let search = match view.query() {
                "" => labels::SEARCH_PLACEHOLDER,
                query => query,
            };
            lines.push(format!("🔍 {}", search));
            if refreshing {
                lines.push(labels::REFRESHING.to_string());
            }
            if items.is_empty() {
                lines.push(labels::NO_RESULTS.to_string());
            }
            for (index, item) in items.iter().enumerate() {
                lines.push(format!("{:>3}. {}", index + 1, item.title));
                lines.push(format!("     {}", item.thumbnail_url));
                lines.push(format!("     {}", labels::ITEM_HINT));
                lines.push(format!("     [{}]", labels::ITEM_BUTTON));
            }
        }
    }

    finish(lines)
}

pub fn render_detail(view: &DetailView) -> String {
    let mut lines = vec![format!("== {} ==", labels::DETAIL_TITLE)];

    match view.screen() {
        DetailScreen::Loading => lines.push(labels::DETAIL_LOADING.to_string()),
        DetailScreen::Error { message } => lines.push(format!(
            "Erro: {}",
            message.unwrap_or(labels::DETAIL_UNAVAILABLE)
        )),
        DetailScreen::Loaded(meal) => {
            lines.push(meal.title.clone());
            lines.push(format!("{}: {}", labels::CUISINE, meal.cuisine_area));
            lines.push(String::new());
            lines.push(labels::INGREDIENTS.to_string());
            lines.extend(meal.ingredient_lines().into_iter().map(|line| format!("• {}", line)));
            lines.push(String::new());
            lines.push(labels::INSTRUCTIONS.to_string());
            lines.push(meal.instructions.clone());
            if let Some(url) = meal.video_link() {
                lines.push(String::new());
                lines.push(format!("[{}] {}", labels::VIDEO_BUTTON, url));
            }
        }
    }

    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeSummary;
    use crate::views::{CatalogMsg, DetailMsg};
    use crate::RecipeError;

    #[test]
    fn test_catalog_loading() {
        let view = CatalogView::new();
        assert!(render_catalog(&view).contains("Carregando receitas..."));
    }

    #[test]
    fn test_catalog_error_offers_retry() {
        let mut view = CatalogView::new();
        view.update(CatalogMsg::Fetched(Err(RecipeError::HttpStatus(500))));
        let text = render_catalog(&view);
        assert!(text.contains("HTTP Error 500"));
        assert!(text.contains("Tentar Novamente"));
    }

    #[test]
    fn test_catalog_no_results() {
        let mut view = CatalogView::new();
        view.update(CatalogMsg::Fetched(Ok(vec![RecipeSummary {
            id: "1".to_string(),
            title: "Fish pie".to_string(),
            thumbnail_url: String::new(),
        }])));
        view.update(CatalogMsg::QueryChanged("sushi".to_string()));
        let text = render_catalog(&view);
        assert!(text.contains("Nenhum resultado encontrado."));
        assert!(!text.contains("Fish pie"));
    }

    #[test]
    fn test_catalog_items_show_hint_and_button() {
        let mut view = CatalogView::new();
        view.update(CatalogMsg::Fetched(Ok(vec![RecipeSummary {
            id: "52959".to_string(),
            title: "Baked salmon with fennel & tomatoes".to_string(),
            thumbnail_url: "https://img/52959.jpg".to_string(),
        }])));

        let text = render_catalog(&view);
        assert!(text.contains("  1. Baked salmon with fennel & tomatoes"));
        assert!(text.contains("https://img/52959.jpg"));
        assert!(text.contains("Clique para ver a receita completa."));
        assert!(text.contains("[Ver Detalhes]"));
        assert!(text.contains("Buscar receita..."));
    }

    #[test]
    fn test_catalog_refreshing_indicator() {
        let mut view = CatalogView::new();
        view.update(CatalogMsg::Fetched(Ok(vec![RecipeSummary {
            id: "1".to_string(),
            title: "Fish pie".to_string(),
            thumbnail_url: String::new(),
        }])));
        view.update(CatalogMsg::Refresh);

        let text = render_catalog(&view);
        assert!(text.contains("Atualizando..."));
        assert!(text.contains("Fish pie"));
    }

    #[test]
    fn test_detail_loading() {
        let view = DetailView::new("1");
        assert!(render_detail(&view).contains("Carregando detalhes..."));
    }

    #[test]
    fn test_detail_error_prefix() {
        let mut view = DetailView::new("1");
        view.update(DetailMsg::Fetched(Ok(None)));
        assert!(render_detail(&view).contains("Erro: Receita não encontrada."));
    }
}
