//! Unit tests for the viewport transform engine.

use super::*;
use crate::models::EventCategory;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn star_at(id: &str, date: &str, x: f64, y: f64) -> StarPoint {
    StarPoint {
        id: id.to_string(),
        date: date.to_string(),
        x,
        y,
        brightness: 0.8,
        category: EventCategory::Star,
        constellation: "Orion".to_string(),
        has_events: true,
    }
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPS, "expected {a} ≈ {b}");
}

#[test]
fn screen_and_plane_transforms_are_inverses() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.begin_pan(ScreenPoint::new(0.0, 0.0));
    vp.continue_pan(ScreenPoint::new(37.5, -12.25));
    vp.end_pan();
    vp.set_zoom(2.5);

    let p = PlanePoint::new(123.456, -78.9);
    let round_trip = vp.to_plane_coordinates(vp.to_screen_coordinates(p));
    assert_close(round_trip.x, p.x);
    assert_close(round_trip.y, p.y);
}

#[test]
fn zoom_clamps_to_bounds() {
    let mut vp = Viewport::new(800.0, 600.0);

    vp.set_zoom(100.0);
    assert_eq!(vp.zoom(), MAX_ZOOM);

    vp.set_zoom(0.0);
    assert_eq!(vp.zoom(), MIN_ZOOM);

    vp.set_zoom(-3.0);
    assert_eq!(vp.zoom(), MIN_ZOOM);

    let mut vp = Viewport::new(800.0, 600.0).with_zoom_bounds(1.0, 4.0);
    vp.set_zoom(0.5);
    assert_eq!(vp.zoom(), 1.0);
}

#[test]
fn zoom_preserves_the_reference_coordinate() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.begin_pan(ScreenPoint::new(10.0, 10.0));
    vp.continue_pan(ScreenPoint::new(52.0, -17.0));
    vp.end_pan();

    let before = vp.reference_coordinate();
    for level in [0.5, 1.0, 2.0, 3.7, 5.0] {
        vp.set_zoom(level);
        let after = vp.reference_coordinate();
        assert_close(after.x, before.x);
        assert_close(after.y, before.y);
    }
}

#[test]
fn pan_deltas_are_additive() {
    let deltas = [(10.0, -5.0), (3.0, 3.0), (-7.5, 12.0), (0.25, -0.25)];

    let mut stepped = Viewport::new(800.0, 600.0);
    let mut cursor = ScreenPoint::new(100.0, 100.0);
    stepped.begin_pan(cursor);
    for (dx, dy) in deltas {
        cursor = ScreenPoint::new(cursor.x + dx, cursor.y + dy);
        stepped.continue_pan(cursor);
    }
    stepped.end_pan();

    let total: (f64, f64) = deltas
        .iter()
        .fold((0.0, 0.0), |(x, y), (dx, dy)| (x + dx, y + dy));
    let mut single = Viewport::new(800.0, 600.0);
    single.begin_pan(ScreenPoint::new(100.0, 100.0));
    single.continue_pan(ScreenPoint::new(100.0 + total.0, 100.0 + total.1));
    single.end_pan();

    let (sx, sy) = stepped.offset();
    let (ox, oy) = single.offset();
    assert_close(sx, ox);
    assert_close(sy, oy);
}

#[test]
fn continue_pan_is_a_noop_while_idle() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.continue_pan(ScreenPoint::new(500.0, 500.0));
    assert_eq!(vp.offset(), (0.0, 0.0));
    assert!(!vp.is_dragging());
}

#[test]
fn end_pan_is_always_safe() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.end_pan();
    vp.end_pan();
    assert!(!vp.is_dragging());

    vp.begin_pan(ScreenPoint::new(0.0, 0.0));
    assert!(vp.is_dragging());
    vp.end_pan();
    assert!(!vp.is_dragging());
}

#[test]
fn focus_on_moves_the_point_under_the_crosshair() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(2.0);

    let target = PlanePoint::new(250.0, 140.0);
    vp.focus_on(target);

    let screen = vp.to_screen_coordinates(target);
    let reference = vp.reference_point();
    assert_close(screen.x, reference.x);
    assert_close(screen.y, reference.y);

    let r = vp.reference_coordinate();
    assert_close(r.x, target.x);
    assert_close(r.y, target.y);
}

#[test]
fn pan_then_zoom_keeps_the_crosshair_target_fixed() {
    // Viewport at offset (0,0), zoom 3; pan by (10,-5); zoom to 5.
    let mut vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.zoom(), 3.0);

    vp.begin_pan(ScreenPoint::new(400.0, 300.0));
    vp.continue_pan(ScreenPoint::new(410.0, 295.0));
    vp.end_pan();
    assert_eq!(vp.offset(), (10.0, -5.0));

    let anchored = vp.reference_coordinate();
    vp.set_zoom(5.0);

    let screen = vp.to_screen_coordinates(anchored);
    let reference = vp.reference_point();
    assert_close(screen.x, reference.x);
    assert_close(screen.y, reference.y);
}

#[test]
fn find_object_near_returns_closest_within_radius() {
    let vp = Viewport::new(800.0, 600.0); // zoom 3, offset 0; center (400, 300)
    let stars = vec![
        star_at("far", "01-01", 200.0, 200.0),
        star_at("near", "01-02", 132.0, 100.0), // screen (396, 300): 4 px away
        star_at("nearer", "01-03", 133.0, 100.0), // screen (399, 300): 1 px away
    ];

    let hit = vp.find_object_near(&stars, 15.0);
    assert_eq!(hit.map(|s| s.id.as_str()), Some("nearer"));
}

#[test]
fn find_object_near_respects_the_radius() {
    let vp = Viewport::new(800.0, 600.0);
    let stars = vec![star_at("off", "01-01", 150.0, 100.0)]; // screen (450, 300): 50 px away

    assert!(vp.find_object_near(&stars, 15.0).is_none());
    assert!(vp.find_object_near(&stars, 50.0).is_some());
}

#[test]
fn equidistant_hits_break_ties_by_iteration_order() {
    let vp = Viewport::new(800.0, 600.0); // center (400, 300)
    // Both stars land exactly 6 px from the crosshair, on opposite sides.
    let stars = vec![
        star_at("left", "06-01", 394.0 / 3.0, 100.0),
        star_at("right", "06-02", 406.0 / 3.0, 100.0),
    ];

    for _ in 0..10 {
        let hit = vp.find_object_near(&stars, 15.0);
        assert_eq!(hit.map(|s| s.id.as_str()), Some("left"));
    }

    let reversed: Vec<StarPoint> = stars.iter().rev().cloned().collect();
    let hit = vp.find_object_near(&reversed, 15.0);
    assert_eq!(hit.map(|s| s.id.as_str()), Some("right"));
}

#[test]
fn display_coordinates_match_the_view_mapping() {
    let vp = Viewport::new(800.0, 600.0);

    let center = vp.display_coordinates(PlanePoint::new(400.0, 300.0));
    assert_eq!(center.ra, "12.0h");
    assert_eq!(center.dec, "0.0°");

    let north_east = vp.display_coordinates(PlanePoint::new(800.0, 600.0));
    assert_eq!(north_east.ra, "24.0h");
    assert_eq!(north_east.dec, "+90.0°");

    let south_west = vp.display_coordinates(PlanePoint::new(0.0, 0.0));
    assert_eq!(south_west.ra, "0.0h");
    assert_eq!(south_west.dec, "-90.0°");
}

proptest! {
    #[test]
    fn prop_round_trip_transform(
        px in -2_000.0..2_000.0_f64,
        py in -2_000.0..2_000.0_f64,
        ox in -500.0..500.0_f64,
        oy in -500.0..500.0_f64,
        zoom in 0.5..5.0_f64,
    ) {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.begin_pan(ScreenPoint::new(0.0, 0.0));
        vp.continue_pan(ScreenPoint::new(ox, oy));
        vp.end_pan();
        vp.set_zoom(zoom);

        let p = PlanePoint::new(px, py);
        let round_trip = vp.to_plane_coordinates(vp.to_screen_coordinates(p));
        prop_assert!((round_trip.x - p.x).abs() < 1e-6);
        prop_assert!((round_trip.y - p.y).abs() < 1e-6);
    }

    #[test]
    fn prop_zoom_preserves_reference(
        ox in -500.0..500.0_f64,
        oy in -500.0..500.0_f64,
        first in 0.5..5.0_f64,
        second in 0.5..5.0_f64,
    ) {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.begin_pan(ScreenPoint::new(0.0, 0.0));
        vp.continue_pan(ScreenPoint::new(ox, oy));
        vp.end_pan();
        vp.set_zoom(first);

        let before = vp.reference_coordinate();
        vp.set_zoom(second);
        let after = vp.reference_coordinate();

        prop_assert!((after.x - before.x).abs() < 1e-6);
        prop_assert!((after.y - before.y).abs() < 1e-6);
    }
}
