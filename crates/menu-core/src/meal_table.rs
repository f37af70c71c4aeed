/// Bidirectional mapping between user-facing category names and meal types.
///
/// Built once at startup and shared by the filter and the aggregator so the
/// two directions can never drift apart.
use crate::error::CoreError;
use crate::model::{CategoryDefinition, MealType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealTable {
    entries: Vec<(String, MealType)>,
}

impl MealTable {
    /// Both columns must be unique, otherwise the reverse lookup is ambiguous.
    pub fn new<I, S>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (S, MealType)>,
        S: Into<String>,
    {
        let mut table: Vec<(String, MealType)> = Vec::new();
        for (name, meal_type) in entries {
            let name = name.into();
            if table.iter().any(|(n, _)| *n == name) {
                return Err(CoreError::Config(format!(
                    "category '{name}' appears twice in the meal table"
                )));
            }
            if let Some((other, _)) = table.iter().find(|(_, m)| *m == meal_type) {
                return Err(CoreError::Config(format!(
                    "meal type {meal_type:?} is mapped to both '{other}' and '{name}'"
                )));
            }
            table.push((name, meal_type));
        }
        Ok(Self { entries: table })
    }

    pub fn standard() -> Self {
        Self {
            entries: vec![
                ("Starter".to_string(), MealType::Starter),
                ("Main Course".to_string(), MealType::MainCourse),
                ("Dessert".to_string(), MealType::Dessert),
                ("Sides".to_string(), MealType::Sides),
            ],
        }
    }

    /// Exact, case-sensitive match on the display name.
    pub fn meal_type_for(&self, category: &str) -> Option<MealType> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, meal_type)| *meal_type)
    }

    pub fn category_for(&self, meal_type: MealType) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, m)| *m == meal_type)
            .map(|(name, _)| name.as_str())
    }

    /// Every category shown to the user must resolve to a meal type; a
    /// missing key would silently hide that category's dishes.
    pub fn validate_categories(&self, categories: &[CategoryDefinition]) -> Result<(), CoreError> {
        let missing: Vec<&str> = categories
            .iter()
            .filter(|c| self.meal_type_for(&c.name).is_none())
            .map(|c| c.name.as_str())
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        let mut known: Vec<&str> = self.entries.iter().map(|(n, _)| n.as_str()).collect();
        known.sort_unstable();
        Err(CoreError::Config(format!(
            "categories not present in meal table: {}. Known categories: {}",
            missing.join(", "),
            known.join(", ")
        )))
    }
}

impl Default for MealTable {
    fn default() -> Self {
        Self::standard()
    }
}
