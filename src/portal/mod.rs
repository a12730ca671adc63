//! Portal Module
//!
//! Authenticated access to the Beemo supervision portal: one form-based login
//! at startup, then plain GETs against the fixed CSV export endpoints.

mod session;

pub use session::PortalSession;
