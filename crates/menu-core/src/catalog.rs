use std::collections::HashMap;

use serde::Deserialize;

use crate::error::CoreError;
use crate::model::{CategoryDefinition, DishRecord};

/// Immutable snapshot of dishes and category definitions, injected into the
/// session rather than read from a global.
#[derive(Debug, Clone)]
pub struct Catalog {
    dishes: Vec<DishRecord>,
    categories: Vec<CategoryDefinition>,
    index: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    dishes: Vec<DishRecord>,
    categories: Vec<CategoryDefinition>,
}

impl Catalog {
    pub fn new(
        dishes: Vec<DishRecord>,
        categories: Vec<CategoryDefinition>,
    ) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(dishes.len());
        for (pos, dish) in dishes.iter().enumerate() {
            if index.insert(dish.id.clone(), pos).is_some() {
                return Err(CoreError::DuplicateDish(dish.id.clone()));
            }
        }

        for (pos, category) in categories.iter().enumerate() {
            if categories[..pos].iter().any(|c| c.name == category.name) {
                return Err(CoreError::Config(format!(
                    "category '{}' is defined twice",
                    category.name
                )));
            }
        }

        Ok(Self {
            dishes,
            categories,
            index,
        })
    }

    /// Parses `{"dishes": [...], "categories": [...]}`.
    pub fn from_json(content: &str) -> Result<Self, CoreError> {
        let doc: CatalogDocument = serde_json::from_str(content)?;
        Self::new(doc.dishes, doc.categories)
    }

    pub fn dishes(&self) -> &[DishRecord] {
        &self.dishes
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn dish(&self, id: &str) -> Option<&DishRecord> {
        self.index.get(id).map(|&pos| &self.dishes[pos])
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "dishes": [
            {"id": "1", "name": "Kadhai Paneer 1", "description": "d", "type": "veg",
             "image": "i", "category": "North Indian", "mealType": "MAIN COURSE"},
            {"id": "8", "name": "Chana Masala", "description": "d", "type": "veg",
             "image": "i", "category": "North Indian", "mealType": "STARTER"}
        ],
        "categories": [
            {"id": "1", "name": "Starter", "count": 0},
            {"id": "2", "name": "Main Course", "count": 0}
        ]
    }"#;

    #[test]
    fn parse_minimal() {
        let catalog = Catalog::from_json(SAMPLE).expect("catalog should parse");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(
            catalog.dish("8").map(|d| d.name.as_str()),
            Some("Chana Masala")
        );
        assert!(catalog.dish("99").is_none());
    }

    #[test]
    fn duplicate_dish_id_is_rejected() {
        let doc = SAMPLE.replace(r#""id": "8""#, r#""id": "1""#);
        let err = Catalog::from_json(&doc).expect_err("duplicate must fail");
        assert!(matches!(err, CoreError::DuplicateDish(ref id) if id == "1"));
    }

    #[test]
    fn duplicate_category_name_is_rejected() {
        let doc = SAMPLE.replace(r#""name": "Main Course""#, r#""name": "Starter""#);
        let err = Catalog::from_json(&doc).expect_err("duplicate must fail");
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn malformed_document_is_a_catalog_error() {
        let err = Catalog::from_json("{\"dishes\": 3}").expect_err("must fail");
        assert!(matches!(err, CoreError::Catalog(_)));
    }
}
