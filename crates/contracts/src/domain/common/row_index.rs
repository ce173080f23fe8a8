use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Key used to address a record in the remote store.
///
/// The remote store only knows row positions today. Callers go through this
/// trait so a stable identifier can replace positions without touching them.
pub trait RecordKey: Clone + Copy + PartialEq + Eq + Hash + fmt::Debug {
    /// Value sent in the `index` query parameter
    fn as_query_value(&self) -> String;
}

/// 0-based position of a record in the post-header order list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowIndex(pub usize);

impl RowIndex {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl RecordKey for RowIndex {
    fn as_query_value(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
