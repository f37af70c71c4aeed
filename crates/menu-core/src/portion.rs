/// Per-portion ingredient quantities for the detail view.
///
/// Amounts are integers scaled linearly by the number of people; units are
/// never converted.
use schemars::JsonSchema;
use serde::Serialize;

use crate::error::CoreError;

pub const MIN_PORTIONS: u8 = 1;
pub const MAX_PORTIONS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Grams,
    Milliliters,
    Pieces,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Milliliters => "ml",
            Unit::Pieces => " pc",
        }
    }
}

/// Number of people a dish is prepared for, always within 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, JsonSchema)]
pub struct Portions(u8);

impl Portions {
    pub fn new(count: u8) -> Result<Self, CoreError> {
        if (MIN_PORTIONS..=MAX_PORTIONS).contains(&count) {
            Ok(Self(count))
        } else {
            Err(CoreError::InvalidPortions(count))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Portions> {
        (MIN_PORTIONS..=MAX_PORTIONS).map(Portions)
    }
}

impl Default for Portions {
    fn default() -> Self {
        Self(MIN_PORTIONS)
    }
}

/// Formats `base * portions` as a zero-padded two-digit integer with the unit
/// suffix, e.g. `"300g"`, `"04 pc"`.
pub fn quantity(base_amount: u32, unit: Unit, portions: Portions) -> String {
    let amount = u64::from(base_amount) * u64::from(portions.get());
    format!("{amount:02}{}", unit.suffix())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientAmount {
    pub name: String,
    pub base_amount: u32,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: String,
}

/// Ordered list of ingredients with their single-portion amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    ingredients: Vec<IngredientAmount>,
}

impl Recipe {
    pub fn new(ingredients: Vec<IngredientAmount>) -> Self {
        Self { ingredients }
    }

    pub fn standard() -> Self {
        let item = |name: &str, base_amount, unit| IngredientAmount {
            name: name.to_string(),
            base_amount,
            unit,
        };
        Self::new(vec![
            item("Paneer (Cottage Cheese)", 100, Unit::Grams),
            item("Onion", 1, Unit::Pieces),
            item("Capsicum", 50, Unit::Grams),
            item("Tomato", 3, Unit::Grams),
            item("Fresh Cream", 50, Unit::Milliliters),
        ])
    }

    pub fn ingredients(&self) -> &[IngredientAmount] {
        &self.ingredients
    }

    /// Empty string for an ingredient the recipe does not list.
    pub fn display_quantity(&self, ingredient: &str, portions: Portions) -> String {
        self.ingredients
            .iter()
            .find(|i| i.name == ingredient)
            .map(|i| quantity(i.base_amount, i.unit, portions))
            .unwrap_or_default()
    }

    pub fn lines(&self, portions: Portions) -> Vec<IngredientLine> {
        self.ingredients
            .iter()
            .map(|i| IngredientLine {
                name: i.name.clone(),
                quantity: quantity(i.base_amount, i.unit, portions),
            })
            .collect()
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::standard()
    }
}
