//! ghtrack - a terminal dashboard for GitHub profiles and repositories
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod charts;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod github;
pub mod logging;
pub mod models;
pub mod render;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
