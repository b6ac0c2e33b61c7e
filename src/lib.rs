pub mod client;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod model;
pub mod normalize;
pub mod presentation;
pub mod ranking;
pub mod tui;

#[cfg(feature = "development")]
pub mod dev;
