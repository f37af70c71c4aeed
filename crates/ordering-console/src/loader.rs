use menu_core::catalog::Catalog;

use crate::config::Config;
use crate::error::AppError;

const SAMPLE_CATALOG: &str = include_str!("../data/dishes.json");

pub fn load_catalog(config: &Config) -> Result<Catalog, AppError> {
    let Some(path) = &config.catalog_path else {
        return Ok(Catalog::from_json(SAMPLE_CATALOG)?);
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("failed to read {}: {e}", path.display())))?;
    Ok(Catalog::from_json(&content)?)
}
