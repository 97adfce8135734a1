//! HTTP server module for the Telescope Through Time backend.
//!
//! An axum-based REST API over the NASA event client and the star field
//! generator. The frontend drives the viewport locally and calls these
//! endpoints when a date needs resolving.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
