pub mod api;
pub mod config;
pub mod files;
pub mod icons;
pub mod modal;
