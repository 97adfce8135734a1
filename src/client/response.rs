//! Upstream NASA response shapes.
//!
//! Only the fields the normalizer consumes are declared; everything else in
//! the payloads is ignored during deserialization.

use serde::Deserialize;
use std::collections::HashMap;

/// Astronomy Picture of the Day entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ApodResponse {
    pub title: String,
    pub explanation: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Near-Earth object feed, keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize)]
pub struct NeoFeedResponse {
    #[serde(default)]
    pub element_count: u64,
    pub near_earth_objects: HashMap<String, Vec<NearEarthObject>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearEarthObject {
    pub id: String,
    pub name: String,
    pub estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    #[serde(default)]
    pub miss_distance: Option<MissDistance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}

/// DONKI space weather notification.
#[derive(Debug, Clone, Deserialize)]
pub struct DonkiNotification {
    #[serde(rename = "messageType", default)]
    pub message_type: String,
    #[serde(rename = "messageID", default)]
    pub message_id: String,
    #[serde(rename = "messageURL", default)]
    pub message_url: String,
    #[serde(rename = "messageBody", default)]
    pub message_body: String,
}
