use tracing::warn;

use crate::catalog::Catalog;
use crate::ledger::SelectionLedger;
use crate::meal_table::MealTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    /// One entry per catalog category, in definition order.
    pub per_category: Vec<CategoryCount>,
    /// Sum of every ledger quantity, attributed or not.
    pub total: u64,
    /// Selected units whose dish is missing from the catalog or whose meal
    /// type has no category. `total - unattributed` equals the per-category sum
    /// when every resolved category is also a defined one.
    pub unattributed: u64,
}

impl SelectionSummary {
    pub fn count_for(&self, category: &str) -> u64 {
        self.per_category
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn category_sum(&self) -> u64 {
        self.per_category.iter().map(|c| c.count).sum()
    }
}

pub fn aggregate(catalog: &Catalog, ledger: &SelectionLedger, table: &MealTable) -> SelectionSummary {
    let mut per_category: Vec<CategoryCount> = catalog
        .categories()
        .iter()
        .map(|c| CategoryCount {
            name: c.name.clone(),
            count: 0,
        })
        .collect();

    let mut unattributed: u64 = 0;
    for (dish_id, &quantity) in ledger.snapshot() {
        if quantity == 0 {
            continue;
        }
        let quantity = u64::from(quantity);
        let slot = catalog
            .dish(dish_id)
            .and_then(|dish| table.category_for(dish.meal_type))
            .and_then(|name| per_category.iter_mut().find(|c| c.name == name));
        match slot {
            Some(slot) => slot.count += quantity,
            None => unattributed += quantity,
        }
    }

    let total = ledger.total();
    if unattributed > 0 {
        warn!(
            total,
            unattributed, "selected dishes could not be attributed to a category"
        );
    }

    SelectionSummary {
        per_category,
        total,
        unattributed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryDefinition, DietaryType, DishRecord, MealType};

    fn dish(id: &str, meal_type: MealType) -> DishRecord {
        DishRecord {
            id: id.to_string(),
            name: format!("Dish {id}"),
            description: String::new(),
            dietary: DietaryType::Veg,
            image: String::new(),
            category: "North Indian".to_string(),
            meal_type,
        }
    }

    fn catalog() -> Catalog {
        let categories = ["Starter", "Main Course", "Dessert", "Sides"]
            .iter()
            .enumerate()
            .map(|(i, name)| CategoryDefinition {
                id: (i + 1).to_string(),
                name: name.to_string(),
            })
            .collect();
        Catalog::new(
            vec![
                dish("1", MealType::MainCourse),
                dish("2", MealType::MainCourse),
                dish("8", MealType::Starter),
                dish("9", MealType::Dessert),
            ],
            categories,
        )
        .expect("valid catalog")
    }

    #[test]
    fn empty_ledger_counts_zero_everywhere() {
        let summary = aggregate(&catalog(), &SelectionLedger::new(), &MealTable::standard());
        assert_eq!(summary.per_category.len(), 4);
        assert_eq!(summary.category_sum(), 0);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn counts_follow_meal_type() {
        let mut ledger = SelectionLedger::new();
        ledger.toggle("1");
        ledger.toggle("8");
        let summary = aggregate(&catalog(), &ledger, &MealTable::standard());

        assert_eq!(summary.count_for("Main Course"), 1);
        assert_eq!(summary.count_for("Starter"), 1);
        assert_eq!(summary.count_for("Dessert"), 0);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.unattributed, 0);
    }

    #[test]
    fn quantities_are_added_not_counted() {
        let ledger: SelectionLedger = [("1", 2), ("2", 3), ("9", 0)].into_iter().collect();
        let summary = aggregate(&catalog(), &ledger, &MealTable::standard());
        assert_eq!(summary.count_for("Main Course"), 5);
        assert_eq!(summary.count_for("Dessert"), 0);
        assert_eq!(summary.total, 5);
    }

    #[test]
    fn stale_ids_count_toward_total_only() {
        let mut ledger = SelectionLedger::new();
        ledger.toggle("8");
        ledger.toggle("removed-dish");
        let summary = aggregate(&catalog(), &ledger, &MealTable::standard());

        assert_eq!(summary.category_sum(), 1);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.unattributed, 1);
    }

    #[test]
    fn unmapped_meal_type_is_skipped() {
        let table = MealTable::new([("Starter", MealType::Starter)]).expect("valid");
        let mut ledger = SelectionLedger::new();
        ledger.toggle("1");
        ledger.toggle("8");
        let summary = aggregate(&catalog(), &ledger, &table);

        assert_eq!(summary.count_for("Starter"), 1);
        assert_eq!(summary.count_for("Main Course"), 0);
        assert_eq!(summary.unattributed, 1);
    }

    #[test]
    fn counts_hold_quantities_past_u32() {
        let ledger: SelectionLedger = [("1", u32::MAX), ("2", u32::MAX), ("stale", u32::MAX)]
            .into_iter()
            .collect();
        let summary = aggregate(&catalog(), &ledger, &MealTable::standard());

        assert_eq!(summary.count_for("Main Course"), 2 * u64::from(u32::MAX));
        assert_eq!(summary.unattributed, u64::from(u32::MAX));
        assert_eq!(summary.total, 3 * u64::from(u32::MAX));
        assert_eq!(summary.category_sum() + summary.unattributed, summary.total);
    }
}
