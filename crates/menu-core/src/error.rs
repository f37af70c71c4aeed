/// Error types for the ordering core.
///
/// Only two places can fail: building the catalog and its tables at startup
/// (`Config`, `DuplicateDish`, `Catalog`), and the two intents that carry a
/// value the core cannot accept (`UnknownDish`, `InvalidPortions`). Filtering
/// and aggregation never fail; unresolvable entries are excluded instead.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(String),

    #[error("duplicate dish id: {0}")]
    DuplicateDish(String),

    #[error("dish not found: {0}")]
    UnknownDish(String),

    #[error("portions must be between 1 and 4, got {0}")]
    InvalidPortions(u8),

    #[error("catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),
}
