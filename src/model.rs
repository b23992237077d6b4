use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Number of positional ingredient/measure pairs in a TheMealDB record.
pub const INGREDIENT_SLOTS: usize = 20;

/// A catalog entry as listed by the category filter endpoint.
///
/// Missing or `null` fields decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal", default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One positional ingredient/measure pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

impl IngredientSlot {
    /// Rendered line for this slot, or `None` when the ingredient is blank.
    ///
    /// The measure is kept verbatim, surrounding whitespace included.
    pub fn line(&self) -> Option<String> {
        let ingredient = self.ingredient.as_deref()?;
        if ingredient.trim().is_empty() {
            return None;
        }
        let measure = self.measure.as_deref().unwrap_or_default();
        Some(format!("{} {}", measure, ingredient))
    }
}

/// A full recipe as returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub cuisine_area: String,
    pub instructions: String,
    pub video_url: Option<String>,
    pub ingredients: [IngredientSlot; INGREDIENT_SLOTS],
}

impl RecipeDetail {
    /// Ingredient lines in slot order, skipping slots with a blank ingredient.
    ///
    /// Derived on every call; nothing is cached on the record.
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .filter_map(IngredientSlot::line)
            .collect()
    }

    /// The video link, only when it is present and non-empty.
    pub fn video_link(&self) -> Option<&str> {
        self.video_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Envelope shared by every TheMealDB endpoint: `{"meals": [...] | null}`.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    #[serde(default = "Option::default")]
    pub meals: Option<Vec<T>>,
}

/// Raw lookup record. Known fields are typed; the numbered
/// `strIngredientN` / `strMeasureN` columns stay in `rest` until
/// they are folded into fixed slots.
#[derive(Debug, Deserialize)]
pub(crate) struct MealRecord {
    #[serde(rename = "idMeal", default)]
    id: Option<String>,
    #[serde(rename = "strMeal", default)]
    title: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl MealRecord {
    fn column(&self, prefix: &str, index: usize) -> Option<String> {
        match self.rest.get(&format!("{}{}", prefix, index)) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Fold the numbered columns 1..=20 into fixed slots.
    pub(crate) fn into_detail(self) -> RecipeDetail {
        let ingredients = std::array::from_fn(|i| IngredientSlot {
            ingredient: self.column("strIngredient", i + 1),
            measure: self.column("strMeasure", i + 1),
        });

        RecipeDetail {
            ingredients,
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            cuisine_area: self.area.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            video_url: self.youtube,
        }
    }
}

/// Case-insensitive substring filter over recipe titles.
///
/// An empty query keeps every item. Order is preserved.
pub fn filter_recipes<'a>(items: &'a [RecipeSummary], query: &str) -> Vec<&'a RecipeSummary> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .collect()
}
