//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the NASA
//! client or the star field generator. Note that event handlers cannot fail
//! with an upstream error — the client degrades to fallback records instead.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{HealthResponse, StarFieldQuery, StarFieldResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::{generate_star_field, DayEvents};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting upstream NASA connectivity as observed by
/// the most recent fetch.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        upstream: state.client.status().to_string(),
    }))
}

// =============================================================================
// Events
// =============================================================================

/// GET /v1/events/today
pub async fn get_todays_events(State(state): State<AppState>) -> HandlerResult<DayEvents> {
    Ok(Json(state.client.todays_events().await))
}

/// GET /v1/events/upcoming
///
/// Events for the next 7 days, in chronological order.
pub async fn get_upcoming_events(State(state): State<AppState>) -> HandlerResult<Vec<DayEvents>> {
    Ok(Json(state.client.upcoming_events().await))
}

/// GET /v1/events/{date}
///
/// Events for an `MM-DD` date key within the configured year.
pub async fn get_events_for_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> HandlerResult<DayEvents> {
    Ok(Json(state.client.events_for_date(&date).await))
}

/// GET /v1/events/month/{year}/{month}
///
/// Events for every day of a month. Requests upstream data in paced batches,
/// so this endpoint takes several seconds for a full month.
pub async fn get_events_for_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> HandlerResult<Vec<DayEvents>> {
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }

    Ok(Json(state.client.events_for_month(month, year).await))
}

// =============================================================================
// Star Field
// =============================================================================

/// GET /v1/starfield?width=&height=
///
/// Generate the 365-star field for a container of the given dimensions.
pub async fn get_star_field(
    State(state): State<AppState>,
    Query(query): Query<StarFieldQuery>,
) -> HandlerResult<StarFieldResponse> {
    if query.width <= 0.0 || query.height <= 0.0 {
        return Err(AppError::BadRequest(
            "width and height must be positive".to_string(),
        ));
    }

    let year = state.client.year();
    let stars = generate_star_field(query.width, query.height, year);
    let total = stars.len();

    Ok(Json(StarFieldResponse { year, stars, total }))
}
