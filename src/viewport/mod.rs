//! Pan/zoom transform engine for the galaxy plane.
//!
//! The viewport maintains the affine transform between plane space (where
//! [`StarPoint`]s live) and screen space:
//!
//! ```text
//! screen = plane * zoom + offset
//! ```
//!
//! Its defining invariant is *center-preserving zoom*: changing the zoom
//! level recomputes the offset so that the plane point under the reference
//! screen point (the telescope crosshair at the view center) stays put.
//! Zooming that merely scales drifts the view off the content; that variant
//! is explicitly not implemented here.
//!
//! All operations are total: zoom clamps to its bounds, panning while idle
//! is a no-op, and nothing returns an error. The engine performs no I/O.

use serde::{Deserialize, Serialize};

use crate::models::{EquatorialCoordinates, StarPoint};

#[cfg(test)]
mod tests;

/// Default zoom level of the telescope view.
pub const DEFAULT_ZOOM: f64 = 3.0;

/// Default zoom bounds.
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 5.0;

/// A point in screen space (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in plane space (the virtual galaxy coordinate system).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state for the galaxy plane.
///
/// Two states: idle and dragging. [`Viewport::begin_pan`] is the only
/// transition into dragging; [`Viewport::end_pan`] the only one out of it.
/// Coordinate and zoom operations are valid in either state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Pan offset in screen pixels
    offset_x: f64,
    offset_y: f64,
    /// Current zoom factor
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    /// View dimensions in pixels
    width: f64,
    height: f64,
    /// Last pointer sample while dragging; `None` when idle
    drag_anchor: Option<ScreenPoint>,
}

impl Viewport {
    /// Create a viewport for a view of the given pixel dimensions, at the
    /// default zoom with no pan offset.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            width,
            height,
            drag_anchor: None,
        }
    }

    /// Override the zoom bounds. The current zoom is re-clamped.
    pub fn with_zoom_bounds(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
        self
    }

    /// The reference screen point: the geometric center of the view, where
    /// the telescope crosshair sits.
    pub fn reference_point(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset in screen pixels.
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Whether a pan gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Update the view dimensions (container resize). The pan offset and
    /// zoom are kept; the reference point moves with the new center.
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Start a pan gesture at the given pointer position.
    pub fn begin_pan(&mut self, point: ScreenPoint) {
        self.drag_anchor = Some(point);
    }

    /// Continue a pan gesture with a new pointer position.
    ///
    /// The offset moves by the delta from the immediately preceding pointer
    /// sample, so repeated small moves accumulate without drift. No-op when
    /// no gesture is in progress.
    pub fn continue_pan(&mut self, point: ScreenPoint) {
        if let Some(anchor) = self.drag_anchor {
            self.offset_x += point.x - anchor.x;
            self.offset_y += point.y - anchor.y;
            self.drag_anchor = Some(point);
        }
    }

    /// End the current pan gesture. Always safe to call.
    pub fn end_pan(&mut self) {
        self.drag_anchor = None;
    }

    /// Set the zoom level, clamped to the configured bounds.
    ///
    /// The offset is recomputed so the plane point currently under the
    /// reference screen point stays under it after the zoom change.
    pub fn set_zoom(&mut self, level: f64) {
        let level = level.clamp(self.min_zoom, self.max_zoom);
        let reference = self.reference_point();
        let anchored = self.to_plane_coordinates(reference);

        self.zoom = level;
        self.offset_x = reference.x - anchored.x * self.zoom;
        self.offset_y = reference.y - anchored.y * self.zoom;
    }

    /// Recenter the view so `point` lies under the reference screen point
    /// at the current zoom.
    pub fn focus_on(&mut self, point: PlanePoint) {
        let reference = self.reference_point();
        self.offset_x = reference.x - point.x * self.zoom;
        self.offset_y = reference.y - point.y * self.zoom;
    }

    /// Transform a plane point into screen space.
    pub fn to_screen_coordinates(&self, point: PlanePoint) -> ScreenPoint {
        ScreenPoint::new(
            point.x * self.zoom + self.offset_x,
            point.y * self.zoom + self.offset_y,
        )
    }

    /// Transform a screen point into plane space. Exact inverse of
    /// [`Viewport::to_screen_coordinates`] for the same viewport state.
    pub fn to_plane_coordinates(&self, point: ScreenPoint) -> PlanePoint {
        PlanePoint::new(
            (point.x - self.offset_x) / self.zoom,
            (point.y - self.offset_y) / self.zoom,
        )
    }

    /// The plane point currently under the reference screen point.
    pub fn reference_coordinate(&self) -> PlanePoint {
        self.to_plane_coordinates(self.reference_point())
    }

    /// Find the star whose screen position lies within `radius_px` of the
    /// reference screen point, choosing the strictly closest one.
    ///
    /// Ties are broken by iteration order of `stars` (first encountered
    /// wins), deterministically. Linear scan over the field.
    pub fn find_object_near<'a>(
        &self,
        stars: &'a [StarPoint],
        radius_px: f64,
    ) -> Option<&'a StarPoint> {
        let reference = self.reference_point();
        let mut best: Option<(&StarPoint, f64)> = None;

        for star in stars {
            let screen = self.to_screen_coordinates(PlanePoint::new(star.x, star.y));
            let dx = screen.x - reference.x;
            let dy = screen.y - reference.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance <= radius_px && best.map_or(true, |(_, d)| distance < d) {
                best = Some((star, distance));
            }
        }

        best.map(|(star, _)| star)
    }

    /// Display-ready RA/Dec for a plane point, mapping the plane extent of
    /// the view onto 0–24h of right ascension and ±90° of declination.
    pub fn display_coordinates(&self, point: PlanePoint) -> EquatorialCoordinates {
        let width = self.width.max(1.0);
        let half_height = (self.height / 2.0).max(1.0);

        let ra = (point.x / width) * 24.0;
        let dec = ((point.y - half_height) / half_height) * 90.0;

        EquatorialCoordinates {
            ra: format!("{ra:.1}h"),
            dec: if dec > 0.0 {
                format!("+{dec:.1}°")
            } else {
                format!("{dec:.1}°")
            },
        }
    }

    /// Display-ready RA/Dec of the reference coordinate.
    pub fn reference_display(&self) -> EquatorialCoordinates {
        self.display_coordinates(self.reference_coordinate())
    }
}
