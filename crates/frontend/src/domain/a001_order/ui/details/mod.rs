//! Order details panel
//!
//! - view_model.rs: commands (edit, save, report) over the dashboard state
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsViewModel;
