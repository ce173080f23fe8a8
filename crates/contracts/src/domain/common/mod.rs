//! Common types shared by all records

pub mod row_index;

// Re-exports
pub use row_index::{RecordKey, RowIndex};
