//! # Telescope Through Time — core engine
//!
//! Backend core for the "Telescope Through Time" star map: a clickable
//! calendar-year galaxy where each of the 365 days is a star, and pointing
//! the telescope at a star resolves that date to real astronomical events
//! fetched from NASA's public APIs.
//!
//! The crate provides two independent subsystems plus the glue a frontend
//! needs around them:
//!
//! - [`viewport`]: pan/zoom state for the virtual galaxy plane —
//!   screen ↔ plane coordinate transforms, center-preserving zoom, and
//!   hit-testing of the star under the telescope crosshair. Pure and
//!   synchronous, no I/O.
//! - [`client`]: the NASA event client — resolves an `MM-DD` date key to a
//!   non-empty list of normalized [`models::AstronomicalEvent`]s, retrying
//!   transient failures and degrading to a deterministic fallback record
//!   when the upstream API is unavailable. The caller never sees an error
//!   or an empty list for a valid date.
//! - [`models`]: shared domain types and the star field generator.
//! - [`services`]: orchestration above the client, currently the debounced
//!   hover watcher that turns crosshair detections into event fetches.
//! - [`http`]: axum REST API exposing the client and the star field
//!   (feature `http-server`).

pub mod client;
pub mod models;
pub mod services;
pub mod viewport;

#[cfg(feature = "http-server")]
pub mod http;
