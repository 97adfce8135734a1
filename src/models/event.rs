//! Normalized astronomical event records.
//!
//! Every upstream shape (APOD entries, near-Earth objects, space weather
//! notifications) is normalized into [`AstronomicalEvent`] before it leaves
//! the client, so the rest of the system never deals with raw NASA payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an astronomical event or star-map object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Star,
    Planet,
    Comet,
    Mission,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Star => "Star",
            Self::Planet => "Planet",
            Self::Comet => "Comet",
            Self::Mission => "Mission",
        };
        f.write_str(s)
    }
}

/// Display-ready equatorial coordinates.
///
/// These are presentation strings (e.g. `"06h 00m"` / `"+20°"`), not values
/// for physical computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    /// Right ascension, e.g. `"12h 30m"`
    pub ra: String,
    /// Declination, e.g. `"-05°"`
    pub dec: String,
}

/// A single normalized astronomical event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstronomicalEvent {
    /// Stable identifier, e.g. `"apod-03-15"` or `"neo-54321"`
    pub id: String,
    /// Display name
    pub name: String,
    /// Event category inferred from the source text
    pub category: EventCategory,
    /// Constellation or region label
    pub constellation: String,
    /// Free-text description, truncated at a word boundary
    pub description: String,
    /// An interesting fact to show alongside the event
    pub fact: String,
    /// Outbound reference link
    pub link: String,
    /// Apparent magnitude estimate, if one could be derived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    /// Display coordinates, if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<EquatorialCoordinates>,
}

/// All events resolved for a single calendar date.
///
/// `events` is guaranteed non-empty by the client: if every upstream lookup
/// fails, a single synthetic fallback record is substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEvents {
    /// Full date string, `YYYY-MM-DD`
    pub date: String,
    /// Ordered events for the date, upstream-sourced records first
    pub events: Vec<AstronomicalEvent>,
}

/// Coarse upstream connectivity derived from the most recent fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// No fetch has completed yet
    Pending,
    /// The most recent fetch returned at least one upstream record
    Connected,
    /// The most recent fetch fell back to the synthetic record
    Degraded,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Connected => "connected",
            Self::Degraded => "degraded",
        };
        f.write_str(s)
    }
}
