//! Normalization of upstream payloads into [`AstronomicalEvent`] records.
//!
//! Category and constellation inference are keyword heuristics, isolated
//! here so a better classifier can replace them without touching the client.
//! Anything that needs an arbitrary choice (fallback constellation,
//! synthetic coordinates, default magnitude) hashes the stable record id,
//! so repeated normalization of the same input is identical.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::models::{AstronomicalEvent, EquatorialCoordinates, EventCategory, CONSTELLATIONS};

use super::response::{ApodResponse, DonkiNotification, NearEarthObject};

/// Maximum description length before word-boundary truncation.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

const APOD_FACTS: &[&str] = &[
    "NASA's Astronomy Picture of the Day has been inspiring people since 1995.",
    "Each APOD image is carefully selected by professional astronomers.",
    "The APOD archive contains over 9,000 astronomical images and explanations.",
    "Many APOD images are taken by amateur astronomers from around the world.",
    "APOD images often reveal phenomena invisible to the naked eye.",
    "The Hubble Space Telescope has contributed thousands of images to APOD.",
    "Some APOD images show objects billions of light-years away.",
    "APOD helps bridge the gap between professional astronomy and public education.",
];

/// Stable in-process hash used for deterministic selection.
fn stable_hash(seed: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    hasher.finish()
}

/// Infer the event category from title/description keywords.
///
/// Order matters: planet keywords win over comet keywords, which win over
/// mission keywords; anything else is a star.
pub fn infer_category(text: &str) -> EventCategory {
    let text = text.to_lowercase();

    const PLANET: &[&str] = &["planet", "mars", "venus", "jupiter", "saturn", "mercury"];
    const COMET: &[&str] = &["comet", "asteroid", "meteor"];
    const MISSION: &[&str] = &["mission", "spacecraft", "rover", "satellite", "launch"];

    if PLANET.iter().any(|k| text.contains(k)) {
        EventCategory::Planet
    } else if COMET.iter().any(|k| text.contains(k)) {
        EventCategory::Comet
    } else if MISSION.iter().any(|k| text.contains(k)) {
        EventCategory::Mission
    } else {
        EventCategory::Star
    }
}

/// Find a constellation mentioned in `text`, or deterministically pick one
/// from `seed` when none is mentioned.
pub fn extract_constellation(text: &str, seed: &str) -> String {
    let lower = text.to_lowercase();
    for constellation in CONSTELLATIONS {
        if lower.contains(&constellation.to_lowercase()) {
            return (*constellation).to_string();
        }
    }
    fallback_constellation(seed)
}

/// Deterministic constellation label derived from `seed`.
pub fn fallback_constellation(seed: &str) -> String {
    let index = (stable_hash(seed) as usize) % CONSTELLATIONS.len();
    CONSTELLATIONS[index].to_string()
}

/// Truncate `text` to at most `max_chars` characters, cutting at the last
/// word boundary and appending an ellipsis.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let prefix: String = text.chars().take(max_chars).collect();
    let cut = prefix
        .rfind(char::is_whitespace)
        .unwrap_or(prefix.len());
    let mut truncated = prefix[..cut].trim_end().to_string();
    truncated.push_str("...");
    truncated
}

/// Estimate an apparent magnitude from title keywords, falling back to a
/// deterministic value in `[2, 6)` derived from `seed`.
pub fn estimate_magnitude(title: &str, seed: &str) -> f64 {
    let text = title.to_lowercase();
    if text.contains("sun") || text.contains("solar") {
        return -26.7;
    }
    if text.contains("moon") || text.contains("lunar") {
        return -12.6;
    }
    if text.contains("venus") {
        return -4.6;
    }
    if text.contains("jupiter") || text.contains("mars") {
        return -2.9;
    }
    if text.contains("saturn") {
        return 0.7;
    }
    if text.contains("bright") || text.contains("brilliant") {
        return 1.0;
    }
    2.0 + (stable_hash(seed) % 4000) as f64 / 1000.0
}

/// Rough apparent magnitude for an asteroid of the given diameter.
pub fn asteroid_magnitude(diameter_km: f64) -> f64 {
    (15.0 - 2.5 * diameter_km.log10()).max(10.0)
}

/// Deterministic display coordinates derived from `seed`.
pub fn synthetic_coordinates(seed: &str) -> EquatorialCoordinates {
    let h = stable_hash(seed);
    let ra_hours = h % 24;
    let ra_minutes = (h / 24) % 60;
    let dec = ((h / 1440) % 180) as i64 - 90;

    EquatorialCoordinates {
        ra: format!("{ra_hours:02}h {ra_minutes:02}m"),
        dec: if dec >= 0 {
            format!("+{dec:02}°")
        } else {
            format!("{dec}°")
        },
    }
}

/// Normalize an APOD entry for `date_key` (`MM-DD`).
pub fn apod_event(apod: &ApodResponse, date_key: &str) -> AstronomicalEvent {
    let id = format!("apod-{date_key}");
    let text = format!("{} {}", apod.title, apod.explanation);
    let fact_index = (stable_hash(&id) as usize) % APOD_FACTS.len();

    AstronomicalEvent {
        category: infer_category(&text),
        name: apod.title.clone(),
        constellation: extract_constellation(&apod.explanation, &id),
        description: truncate_description(&apod.explanation, MAX_DESCRIPTION_CHARS),
        fact: APOD_FACTS[fact_index].to_string(),
        link: apod.url.clone(),
        magnitude: Some(estimate_magnitude(&apod.title, &id)),
        coordinates: Some(synthetic_coordinates(&id)),
        id,
    }
}

/// Normalize a near-Earth object record.
pub fn neo_event(neo: &NearEarthObject) -> AstronomicalEvent {
    let id = format!("neo-{}", neo.id);
    let name = neo.name.replace(['(', ')'], "");
    let diameter = &neo.estimated_diameter.kilometers;

    let description = format!(
        "Near-Earth asteroid {} makes its closest approach to Earth. \
         Estimated diameter: {:.1}-{:.1} km.",
        neo.name, diameter.estimated_diameter_min, diameter.estimated_diameter_max
    );

    let fact = if neo.is_potentially_hazardous_asteroid {
        "This asteroid is classified as potentially hazardous due to its size \
         and proximity to Earth's orbit."
            .to_string()
    } else {
        let miss_km = neo
            .close_approach_data
            .first()
            .and_then(|a| a.miss_distance.as_ref())
            .and_then(|m| m.kilometers.parse::<f64>().ok())
            .map(|km| km as u64);
        match miss_km {
            Some(km) => format!(
                "This asteroid will safely pass Earth at a distance of {} kilometers.",
                group_thousands(km)
            ),
            None => "This asteroid will safely pass Earth on its current orbit.".to_string(),
        }
    };

    AstronomicalEvent {
        name,
        category: EventCategory::Comet,
        constellation: fallback_constellation(&id),
        description,
        fact,
        link: "https://cneos.jpl.nasa.gov/sentry/".to_string(),
        magnitude: Some(asteroid_magnitude(diameter.estimated_diameter_max)),
        coordinates: Some(synthetic_coordinates(&id)),
        id,
    }
}

/// Normalize a DONKI space weather notification for `date_key`.
pub fn notification_event(
    notification: &DonkiNotification,
    date_key: &str,
    index: usize,
) -> AstronomicalEvent {
    let id = format!("space-weather-{date_key}-{index}");
    let link = if notification.message_url.is_empty() {
        "https://www.spaceweather.gov/".to_string()
    } else {
        notification.message_url.clone()
    };

    AstronomicalEvent {
        name: "Space Weather Event".to_string(),
        category: EventCategory::Mission,
        constellation: "Solar System".to_string(),
        description: truncate_description(&notification.message_body, MAX_DESCRIPTION_CHARS),
        fact: "Space weather can affect satellite communications, GPS systems, \
               and even power grids on Earth."
            .to_string(),
        link,
        magnitude: None,
        coordinates: Some(synthetic_coordinates(&id)),
        id,
    }
}

/// The synthetic record substituted when every upstream lookup fails.
///
/// Deterministic for a given `date_key`: repeated calls produce the exact
/// same record.
pub fn fallback_event(date_key: &str) -> AstronomicalEvent {
    let id = format!("fallback-{date_key}");

    AstronomicalEvent {
        name: "Astronomical Observation".to_string(),
        category: EventCategory::Star,
        constellation: fallback_constellation(&id),
        description: "General astronomical observation opportunity for this date. \
                      NASA data temporarily unavailable."
            .to_string(),
        fact: "NASA has been exploring space and advancing our understanding of \
               the universe since 1958."
            .to_string(),
        link: "https://www.nasa.gov/".to_string(),
        magnitude: Some(3.0),
        coordinates: Some(synthetic_coordinates(&id)),
        id,
    }
}

/// Format an integer with comma thousands separators.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
