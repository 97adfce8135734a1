//! Star field generation for the galaxy plane.
//!
//! Each of the 365 calendar days of the target year maps to exactly one
//! star, laid out along spiral arms around the container center. Generation
//! is parameterized by the container dimensions and is fully deterministic:
//! the same `(width, height, year)` always produces the same field, and a
//! star's category, constellation and brightness are fixed at creation and
//! never re-sampled.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::event::EventCategory;

/// Number of spiral arms in the generated galaxy.
const NUM_ARMS: usize = 5;

/// Days in the addressable date space (leap days are not addressable).
pub const DAYS_PER_YEAR: u32 = 365;

/// Constellation labels used for star and event annotation.
pub const CONSTELLATIONS: &[&str] = &[
    "Andromeda",
    "Aquarius",
    "Aries",
    "Cancer",
    "Capricornus",
    "Gemini",
    "Leo",
    "Libra",
    "Pisces",
    "Sagittarius",
    "Scorpius",
    "Taurus",
    "Virgo",
    "Orion",
    "Cassiopeia",
    "Ursa Major",
    "Ursa Minor",
    "Draco",
    "Cygnus",
];

/// A point of interest in the galaxy plane, addressable by calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarPoint {
    /// Stable identifier, `star-MM-DD`
    pub id: String,
    /// Calendar date key, `MM-DD`
    pub date: String,
    /// Plane-space x coordinate (not screen pixels)
    pub x: f64,
    /// Plane-space y coordinate (not screen pixels)
    pub y: f64,
    /// Brightness weight in `[0, 1]`
    pub brightness: f64,
    /// Category assigned once at generation
    pub category: EventCategory,
    /// Constellation label assigned once at generation
    pub constellation: String,
    /// Whether calendar events exist for this date
    pub has_events: bool,
}

/// Generate the 365-star field for `year`, laid out for a container of the
/// given pixel dimensions.
///
/// The field only depends on its arguments; regenerate it when the
/// container is resized and treat the result as immutable in between.
pub fn generate_star_field(width: f64, height: f64, year: i32) -> Vec<StarPoint> {
    let mut rng = StdRng::seed_from_u64(field_seed(width, height, year));

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let extent = width.min(height).max(1.0);

    // Spiral geometry scaled to the container: stars start near the core
    // and sweep outward along each arm.
    let inner_radius = extent / 12.0;
    let sweep = extent / 3.0;
    let radius_jitter = extent / 20.0;

    let stars_per_arm = (DAYS_PER_YEAR as usize).div_ceil(NUM_ARMS);
    let mut stars = Vec::with_capacity(DAYS_PER_YEAR as usize);

    for arm in 0..NUM_ARMS {
        for i in 0..stars_per_arm {
            let index = arm * stars_per_arm + i;
            if index >= DAYS_PER_YEAR as usize {
                break;
            }

            let date = date_key_for_ordinal(year, index as u32 + 1);

            let arm_angle = (arm as f64) * std::f64::consts::TAU / (NUM_ARMS as f64);
            let t = i as f64 / stars_per_arm as f64;
            let radius = inner_radius + t * sweep;
            let angle = arm_angle + t * 2.0 * std::f64::consts::PI;

            let radius = radius + (rng.gen::<f64>() - 0.5) * radius_jitter;
            let angle = angle + (rng.gen::<f64>() - 0.5) * 0.3;

            let brightness = 0.3 + rng.gen::<f64>() * 0.7;
            let category = sample_category(&mut rng);
            let constellation = CONSTELLATIONS[rng.gen_range(0..CONSTELLATIONS.len())];

            stars.push(StarPoint {
                id: format!("star-{date}"),
                date,
                x: center_x + radius * angle.cos(),
                y: center_y + radius * angle.sin(),
                brightness,
                category,
                constellation: constellation.to_string(),
                has_events: true,
            });
        }
    }

    stars
}

/// `MM-DD` key for the 1-based day-of-year `ordinal` of `year`.
fn date_key_for_ordinal(year: i32, ordinal: u32) -> String {
    // Ordinals 1..=365 are valid for every year.
    let date = NaiveDate::from_yo_opt(year, ordinal)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).expect("Jan 1 exists"));
    date.format("%m-%d").to_string()
}

/// Mix the generation parameters into a single RNG seed.
fn field_seed(width: f64, height: f64, year: i32) -> u64 {
    (year as u64)
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ width.to_bits().rotate_left(17)
        ^ height.to_bits().rotate_left(31)
}

/// Most stars are plain stars; a minority carry the other categories.
fn sample_category(rng: &mut StdRng) -> EventCategory {
    match rng.gen_range(0..10u32) {
        0 => EventCategory::Planet,
        1 => EventCategory::Comet,
        2 => EventCategory::Mission,
        _ => EventCategory::Star,
    }
}
