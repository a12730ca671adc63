//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Dataset Refresh: re-downloads and re-publishes the three portal exports
//!   at the configured interval

mod refresh;

pub use refresh::spawn_refresh_task;
