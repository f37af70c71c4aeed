use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::CategoryCount;
use crate::model::{DietaryType, IngredientDescriptor};
use crate::portion::{IngredientLine, Portions};

/// A user action dispatched by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// Add the dish if unselected, remove it otherwise.
    Toggle { dish_id: String },
    /// Category display name such as "Starter", or "All".
    SetCategory { name: String },
    SetVegFilter { enabled: bool },
    SetNonVegFilter { enabled: bool },
    /// Free text matched against dish names.
    SetSearchTerm { text: String },
    /// Number of people for the open detail view (1-4).
    SetPortions { count: u8 },
    OpenDetail { dish_id: String },
    CloseDetail,
    /// Expand or collapse the cuisine section.
    ToggleSection,
    /// Show the full description of a dish, or cut it back down.
    ToggleDescription { dish_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CategoryTab {
    pub name: String,
    pub count: u64,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DishRow {
    pub id: String,
    pub name: String,
    pub dietary: DietaryType,
    pub image: String,
    /// Description cut to the configured length, with "..." when cut.
    /// The full text when the row is expanded.
    pub summary: String,
    pub truncated: bool,
    pub expanded: bool,
    /// "Read More" or "Show Less"; absent when the description fits.
    pub description_toggle: Option<String>,
    pub selected: bool,
    /// "Add" or "Remove"
    pub action_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DetailView {
    pub ingredient: IngredientDescriptor,
    pub portions: Portions,
    pub ingredients: Vec<IngredientLine>,
}

/// Everything the presentation layer renders, recomputed after each intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ViewModel {
    pub active_category: String,
    /// e.g. "Starter Selected 1" or "All Dishes Selected 3"
    pub header: String,
    pub categories: Vec<CategoryTab>,
    pub veg_included: bool,
    pub non_veg_included: bool,
    pub search: String,
    pub section_expanded: bool,
    /// Empty when the section is collapsed.
    pub dishes: Vec<DishRow>,
    /// Populated when the filtered list is empty.
    pub empty_message: Option<String>,
    pub total_selected: u64,
    pub unattributed_selected: u64,
    pub detail: Option<DetailView>,
}

impl ViewModel {
    pub fn count_for(&self, category: &str) -> u64 {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

pub(crate) fn tabs(counts: Vec<CategoryCount>, active: &str) -> Vec<CategoryTab> {
    counts
        .into_iter()
        .map(|c| CategoryTab {
            active: c.name == active,
            name: c.name,
            count: c.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_parse_from_tagged_json() {
        let toggle: Intent =
            serde_json::from_str(r#"{"intent": "toggle", "dish_id": "8"}"#).expect("toggle");
        assert_eq!(
            toggle,
            Intent::Toggle {
                dish_id: "8".to_string()
            }
        );

        let close: Intent = serde_json::from_str(r#"{"intent": "close_detail"}"#).expect("close");
        assert_eq!(close, Intent::CloseDetail);

        let bad = serde_json::from_str::<Intent>(r#"{"intent": "checkout"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn adapter_contract_publishes_schemas() {
        let intent = serde_json::to_string(&schemars::schema_for!(Intent)).expect("intent schema");
        for name in [
            "toggle",
            "set_category",
            "set_veg_filter",
            "set_non_veg_filter",
            "set_search_term",
            "set_portions",
            "open_detail",
            "close_detail",
            "toggle_section",
            "toggle_description",
        ] {
            assert!(intent.contains(name), "intent schema should mention {name}");
        }

        let view = serde_json::to_string(&schemars::schema_for!(ViewModel)).expect("view schema");
        assert!(view.contains("total_selected"));
    }
}
