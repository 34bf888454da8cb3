pub mod api_utils;
pub mod components;
pub mod config;
pub mod export;
pub mod format;
pub mod icons;
pub mod modal;
pub mod pdf;
