use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const DETAIL_DESCRIPTION: &str = "Fresh and high-quality ingredient for your dish.";
const DETAIL_FALLBACK_NAME: &str = "Ingredient";
const DETAIL_SHELF_LIFE: &str = "3-4 days";
const DETAIL_STORAGE: &str = "Refrigerate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DietaryType {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

/// Internal meal classification of a dish, distinct from the user-facing
/// category label. The two are related through [`crate::meal_table::MealTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MealType {
    #[serde(rename = "STARTER")]
    Starter,
    #[serde(rename = "MAIN COURSE", alias = "MAIN_COURSE")]
    MainCourse,
    #[serde(rename = "DESSERT")]
    Dessert,
    #[serde(rename = "SIDES")]
    Sides,
}

/// A single menu item as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DishRecord {
    /// Unique within a catalog snapshot, e.g. "1", "8"
    pub id: String,
    /// Display name, e.g. "Kadhai Paneer 1"
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub dietary: DietaryType,
    /// Opaque image URI
    pub image: String,
    /// Cuisine label, e.g. "North Indian"
    pub category: String,
    #[serde(rename = "mealType")]
    pub meal_type: MealType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryDefinition {
    pub id: String,
    /// Display name; must be a key of the meal table, e.g. "Main Course"
    pub name: String,
}

/// Value handed to the detail view when a dish's ingredients are opened.
/// Owned copy, never a reference into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IngredientDescriptor {
    pub name: String,
    pub description: String,
    pub image: String,
    pub dietary: DietaryType,
    pub shelf_life: String,
    pub storage: String,
}

impl IngredientDescriptor {
    pub fn from_dish(dish: &DishRecord) -> Self {
        let name = if dish.name.trim().is_empty() {
            DETAIL_FALLBACK_NAME.to_string()
        } else {
            dish.name.clone()
        };
        Self {
            name,
            description: DETAIL_DESCRIPTION.to_string(),
            image: dish.image.clone(),
            dietary: dish.dietary,
            shelf_life: DETAIL_SHELF_LIFE.to_string(),
            storage: DETAIL_STORAGE.to_string(),
        }
    }
}
