pub mod api;
pub mod editor;
pub mod error;
pub mod report;
pub mod store;
pub mod ui;
