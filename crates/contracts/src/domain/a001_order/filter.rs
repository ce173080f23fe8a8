use super::aggregate::{IndexedOrder, OrderList, OrderRecord};
use serde::{Deserialize, Serialize};

/// Filter criteria. An empty criterion imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Inclusive lower bound, compared lexicographically against `date`
    pub date_from: String,
    /// Inclusive upper bound
    pub date_to: String,
    /// Case-insensitive substring of `full_name`
    pub name_query: String,
}

impl OrderFilter {
    pub fn is_empty(&self) -> bool {
        self.date_from.is_empty() && self.date_to.is_empty() && self.name_query.is_empty()
    }

    /// Number of criteria in use (for the filter badge)
    pub fn active_count(&self) -> usize {
        [&self.date_from, &self.date_to, &self.name_query]
            .iter()
            .filter(|c| !c.is_empty())
            .count()
    }

    pub fn matches(&self, record: &OrderRecord) -> bool {
        if !self.date_from.is_empty() && record.date.as_str() < self.date_from.as_str() {
            return false;
        }
        if !self.date_to.is_empty() && record.date.as_str() > self.date_to.as_str() {
            return false;
        }
        if !self.name_query.is_empty() {
            let needle = self.name_query.to_lowercase();
            if !record.full_name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Matching records in list order, each tagged with its source index
    pub fn apply(&self, list: &OrderList) -> Vec<IndexedOrder> {
        list.indexed().filter(|row| self.matches(&row.record)).collect()
    }

    /// Narrow an already indexed view; source indices are kept
    #[cfg(test)]
    pub fn refine(&self, rows: &[IndexedOrder]) -> Vec<IndexedOrder> {
        rows.iter()
            .filter(|row| self.matches(&row.record))
            .cloned()
            .collect()
    }
}
