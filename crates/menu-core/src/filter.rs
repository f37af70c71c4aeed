/// Derives the visible dish list from the catalog and the active criteria.
///
/// Constraints are ANDed. Catalog order is preserved. Nothing here fails:
/// an unknown category name matches no dishes.
use tracing::debug;

use crate::meal_table::MealTable;
use crate::model::{DietaryType, DishRecord, MealType};

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    /// `"All"` is the sentinel; every other name is taken literally.
    pub fn parse(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(name.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub veg_included: bool,
    pub non_veg_included: bool,
    pub search: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            veg_included: true,
            non_veg_included: true,
            search: String::new(),
        }
    }
}

pub fn filter<'a>(
    dishes: &'a [DishRecord],
    table: &MealTable,
    criteria: &FilterCriteria,
) -> Vec<&'a DishRecord> {
    let meal_type: Option<MealType> = match &criteria.category {
        CategoryFilter::All => None,
        CategoryFilter::Named(name) => match table.meal_type_for(name) {
            Some(meal_type) => Some(meal_type),
            None => {
                debug!(category = %name, "category not in meal table, nothing matches");
                return Vec::new();
            }
        },
    };
    let dietary = dietary_constraint(criteria.veg_included, criteria.non_veg_included);
    let query = criteria.search.trim().to_lowercase();

    let result: Vec<&DishRecord> = dishes
        .iter()
        .filter(|dish| meal_type.map_or(true, |m| dish.meal_type == m))
        .filter(|dish| dietary.map_or(true, |only| dish.dietary == only))
        .filter(|dish| query.is_empty() || dish.name.to_lowercase().contains(&query))
        .collect();

    debug!(
        category = criteria.category.label(),
        veg = criteria.veg_included,
        non_veg = criteria.non_veg_included,
        query = %query,
        matched = result.len(),
        "filter applied"
    );
    result
}

/// `Some(t)` restricts results to dietary type `t`. Exactly one flag on
/// restricts; both on or both off impose no constraint.
fn dietary_constraint(veg_included: bool, non_veg_included: bool) -> Option<DietaryType> {
    match (veg_included, non_veg_included) {
        (true, false) => Some(DietaryType::Veg),
        (false, true) => Some(DietaryType::NonVeg),
        _ => None,
    }
}
