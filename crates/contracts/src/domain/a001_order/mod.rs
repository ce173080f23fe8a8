//! Pedido (order) records mirrored from the remote spreadsheet store.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod form;
pub mod report;

pub use aggregate::{IndexedOrder, NumberCell, OrderList, OrderPayload, OrderRecord};
pub use error::{NumericField, OrderError};
pub use filter::OrderFilter;
pub use form::OrderForm;
pub use report::OrderReport;
