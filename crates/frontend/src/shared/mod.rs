pub mod api_utils;
pub mod config;
pub mod dialogs;
pub mod export;
pub mod icons;
