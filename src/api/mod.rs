//! API Module
//!
//! HTTP handlers and routing for the CSV download server.
//!
//! # Endpoints
//! - `GET /licenses.csv` - Download the latest licenses export
//! - `GET /backupsets.csv` - Download the latest backup sets export
//! - `GET /groups.csv` - Download the latest groups export
//!
//! Any other path returns 404; a matched path whose dataset has not been
//! refreshed yet returns 503.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
