//! Data Transfer Objects for the HTTP API.
//!
//! The domain types ([`crate::models::DayEvents`], [`crate::models::StarPoint`])
//! already derive Serialize and go over the wire as-is; the DTOs here cover
//! the remaining request/response envelopes.

use serde::{Deserialize, Serialize};

use crate::models::StarPoint;

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, always `"ok"` when reachable
    pub status: String,
    /// API version
    pub version: String,
    /// Upstream NASA connectivity: `pending`, `connected` or `degraded`
    pub upstream: String,
}

/// Query parameters for star field generation.
#[derive(Debug, Clone, Deserialize)]
pub struct StarFieldQuery {
    /// Container width in pixels
    pub width: f64,
    /// Container height in pixels
    pub height: f64,
}

/// Response carrying a generated star field.
#[derive(Debug, Clone, Serialize)]
pub struct StarFieldResponse {
    /// Calendar year the stars address
    pub year: i32,
    /// One star per day of the year
    pub stars: Vec<StarPoint>,
    /// Number of stars
    pub total: usize,
}
