//! Cache Module
//!
//! In-memory store for the latest published CSV text of each dataset.

mod store;

pub use store::ExportCache;

use std::sync::Arc;

use tokio::sync::Mutex;

/// Cache handle shared between the refresh task and the HTTP handlers.
///
/// A plain mutex, not a reader/writer lock: every access, read or write, is
/// mutually exclusive, so requests serialize against refresh writes.
pub type SharedCache = Arc<Mutex<ExportCache>>;
