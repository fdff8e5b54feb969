pub mod api;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod tracker;
pub mod tui;

#[cfg(any(test, feature = "development"))]
pub mod dev;
