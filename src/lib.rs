pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod palette;
pub mod routine;
pub mod services;
pub mod state;
