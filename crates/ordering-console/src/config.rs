use std::path::PathBuf;

use menu_core::filter::CategoryFilter;
use menu_core::session::{SessionOptions, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION_LIMIT};

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog JSON file. `None` uses the bundled sample catalog.
    pub catalog_path: Option<PathBuf>,
    /// Category shown when the session starts, e.g. "Starter" or "All".
    pub default_category: String,
    /// Characters of dish description shown before truncation.
    pub description_limit: usize,
}

impl Config {
    /// Optional:
    /// - `ORDERING_CATALOG_PATH`: catalog JSON file
    /// - `ORDERING_DEFAULT_CATEGORY` (default: "Starter")
    /// - `ORDERING_DESCRIPTION_LIMIT` (default: 60)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let catalog_path = lookup("ORDERING_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(path) = &catalog_path {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "catalog file not found: {}",
                    path.display()
                )));
            }
        }

        let default_category = lookup("ORDERING_DEFAULT_CATEGORY")
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let description_limit = match lookup("ORDERING_DESCRIPTION_LIMIT") {
            None => DEFAULT_DESCRIPTION_LIMIT,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "ORDERING_DESCRIPTION_LIMIT must be a positive integer, got '{raw}'"
                    ))
                })?,
        };

        Ok(Self {
            catalog_path,
            default_category,
            description_limit,
        })
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            default_category: CategoryFilter::parse(&self.default_category),
            description_limit: self.description_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).expect("defaults are valid");
        assert!(config.catalog_path.is_none());
        assert_eq!(config.default_category, "Starter");
        assert_eq!(config.description_limit, 60);
    }

    #[test]
    fn all_category_maps_to_sentinel() {
        let config = config_from(&[("ORDERING_DEFAULT_CATEGORY", "All")]).expect("valid");
        assert_eq!(config.session_options().default_category, CategoryFilter::All);
    }

    #[test]
    fn invalid_description_limit_is_rejected() {
        for raw in ["0", "-3", "sixty"] {
            let err = config_from(&[("ORDERING_DESCRIPTION_LIMIT", raw)])
                .expect_err("invalid limit must fail");
            assert!(matches!(err, AppError::Config(_)), "{raw} should be rejected");
        }
    }

    #[test]
    fn missing_catalog_file_is_rejected() {
        let err = config_from(&[("ORDERING_CATALOG_PATH", "/nonexistent/dishes.json")])
            .expect_err("missing file must fail");
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("/nonexistent")));
    }
}
