//! Beemo Exporter - republishes portal exports as CSV downloads
//!
//! Logs into the Beemo supervision portal once at startup, then periodically
//! downloads and reshapes three tabular exports (licenses, backup sets,
//! groups) and serves them as CSV files over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod datasets;
pub mod error;
pub mod portal;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_refresh_task;
