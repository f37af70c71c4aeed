use std::collections::HashMap;

use tracing::debug;

/// Per-session record of how many of each dish the user has chosen.
///
/// A quantity of zero means "not selected" and is indistinguishable from an
/// absent entry for every read operation. Identifiers are not checked
/// against the catalog.
#[derive(Debug, Clone, Default)]
pub struct SelectionLedger {
    entries: HashMap<String, u32>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 0/absent becomes 1, anything else becomes 0.
    pub fn toggle(&mut self, dish_id: &str) {
        let next = if self.quantity(dish_id) == 0 { 1 } else { 0 };
        self.entries.insert(dish_id.to_string(), next);
        debug!(dish_id, quantity = next, "selection toggled");
    }

    pub fn is_selected(&self, dish_id: &str) -> bool {
        self.quantity(dish_id) > 0
    }

    pub fn quantity(&self, dish_id: &str) -> u32 {
        self.entries.get(dish_id).copied().unwrap_or(0)
    }

    /// Read-only view of every entry, including zero-quantity ones.
    pub fn snapshot(&self) -> &HashMap<String, u32> {
        &self.entries
    }

    /// Sum of all stored quantities.
    pub fn total(&self) -> u64 {
        self.entries.values().map(|&q| u64::from(q)).sum()
    }

    /// Number of dishes currently selected.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|&&q| q > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for SelectionLedger {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(id, q)| (id.into(), q)).collect(),
        }
    }
}
