/// One ordering-screen session: the selection ledger plus the transient
/// filter, section and detail state, driven by [`Intent`]s.
use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::aggregate::aggregate;
use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::filter::{filter, CategoryFilter, FilterCriteria};
use crate::ledger::SelectionLedger;
use crate::meal_table::MealTable;
use crate::model::{DishRecord, IngredientDescriptor};
use crate::portion::{Portions, Recipe};
use crate::view_api::{tabs, DetailView, DishRow, Intent, ViewModel};

pub const DEFAULT_CATEGORY: &str = "Starter";
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 60;
const EMPTY_MESSAGE: &str = "No dishes available";
const READ_MORE: &str = "Read More";
const SHOW_LESS: &str = "Show Less";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub default_category: CategoryFilter,
    /// Characters of description shown before "...".
    pub description_limit: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_category: CategoryFilter::parse(DEFAULT_CATEGORY),
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }
}

pub struct OrderingSession {
    catalog: Arc<Catalog>,
    table: Arc<MealTable>,
    recipe: Arc<Recipe>,
    options: SessionOptions,
    ledger: SelectionLedger,
    criteria: FilterCriteria,
    section_expanded: bool,
    expanded_descriptions: HashSet<String>,
    portions: Portions,
    detail: Option<IngredientDescriptor>,
}

impl OrderingSession {
    /// Validates the catalog's categories against the table before any
    /// intent is accepted.
    pub fn new(
        catalog: Arc<Catalog>,
        table: Arc<MealTable>,
        recipe: Arc<Recipe>,
        options: SessionOptions,
    ) -> Result<Self, CoreError> {
        table.validate_categories(catalog.categories())?;
        let criteria = FilterCriteria {
            category: options.default_category.clone(),
            ..FilterCriteria::default()
        };
        Ok(Self {
            catalog,
            table,
            recipe,
            options,
            ledger: SelectionLedger::new(),
            criteria,
            section_expanded: true,
            expanded_descriptions: HashSet::new(),
            portions: Portions::default(),
            detail: None,
        })
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Applies one intent and returns the refreshed view. On error the
    /// session is left untouched.
    pub fn apply(&mut self, intent: Intent) -> Result<ViewModel, CoreError> {
        debug!(?intent, "applying intent");
        match intent {
            Intent::Toggle { dish_id } => self.ledger.toggle(&dish_id),
            Intent::SetCategory { name } => self.criteria.category = CategoryFilter::parse(&name),
            Intent::SetVegFilter { enabled } => self.criteria.veg_included = enabled,
            Intent::SetNonVegFilter { enabled } => self.criteria.non_veg_included = enabled,
            Intent::SetSearchTerm { text } => self.criteria.search = text,
            Intent::SetPortions { count } => self.portions = Portions::new(count)?,
            Intent::OpenDetail { dish_id } => {
                let dish = self
                    .catalog
                    .dish(&dish_id)
                    .ok_or_else(|| CoreError::UnknownDish(dish_id.clone()))?;
                self.detail = Some(IngredientDescriptor::from_dish(dish));
                self.portions = Portions::default();
            }
            Intent::CloseDetail => self.detail = None,
            Intent::ToggleSection => self.section_expanded = !self.section_expanded,
            Intent::ToggleDescription { dish_id } => {
                if !self.expanded_descriptions.remove(&dish_id) {
                    self.expanded_descriptions.insert(dish_id);
                }
            }
        }
        Ok(self.view())
    }

    pub fn view(&self) -> ViewModel {
        let summary = aggregate(&self.catalog, &self.ledger, &self.table);
        let active = self.criteria.category.label().to_string();

        let header = match &self.criteria.category {
            CategoryFilter::All => format!("All Dishes Selected {}", summary.total),
            CategoryFilter::Named(name) => {
                format!("{name} Selected {}", summary.count_for(name))
            }
        };

        let visible = filter(self.catalog.dishes(), &self.table, &self.criteria);
        let empty_message = visible.is_empty().then(|| EMPTY_MESSAGE.to_string());
        let dishes = if self.section_expanded {
            visible.into_iter().map(|dish| self.row(dish)).collect()
        } else {
            Vec::new()
        };

        let detail = self.detail.as_ref().map(|ingredient| DetailView {
            ingredient: ingredient.clone(),
            portions: self.portions,
            ingredients: self.recipe.lines(self.portions),
        });

        ViewModel {
            header,
            categories: tabs(summary.per_category, &active),
            active_category: active,
            veg_included: self.criteria.veg_included,
            non_veg_included: self.criteria.non_veg_included,
            search: self.criteria.search.clone(),
            section_expanded: self.section_expanded,
            dishes,
            empty_message,
            total_selected: summary.total,
            unattributed_selected: summary.unattributed,
            detail,
        }
    }

    fn row(&self, dish: &DishRecord) -> DishRow {
        let selected = self.ledger.is_selected(&dish.id);
        let expanded = self.expanded_descriptions.contains(&dish.id);
        let fits = dish.description.chars().count() <= self.options.description_limit;
        let (summary, truncated) = if expanded || fits {
            (dish.description.clone(), false)
        } else {
            (truncate(&dish.description, self.options.description_limit), true)
        };
        let description_toggle = match (fits, expanded) {
            (true, _) => None,
            (false, false) => Some(READ_MORE.to_string()),
            (false, true) => Some(SHOW_LESS.to_string()),
        };
        DishRow {
            id: dish.id.clone(),
            name: dish.name.clone(),
            dietary: dish.dietary,
            image: dish.image.clone(),
            summary,
            truncated,
            expanded,
            description_toggle,
            selected,
            action_label: if selected { "Remove" } else { "Add" }.to_string(),
        }
    }
}

fn truncate(text: &str, limit: usize) -> String {
    format!("{}...", text.chars().take(limit).collect::<String>())
}
