//! Pedido form (create / edit)
//!
//! - view_model.rs: edit state and save/delete commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::{OrderDetails, FORM_SECTION_ID};
pub use view_model::OrderDetailsViewModel;
