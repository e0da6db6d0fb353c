//! Integration tests for the region algebra.
//!
//! Regions here are laid out on a small integer grid where `top_left(lat, lng)`
//! and `bot_right(lat, lng)` name corners in whole degrees, so each fixture can
//! be drawn as a picture of boxes on the lat/lng axes.
//!
//! Run with: `cargo test --test region_algebra`

use std::thread;

use tilegrid::region::{
    at_center, bot_right, lat_lng, region, region_at_lat_lng, regions_in, top_left,
};
use tilegrid::{LatLng, Region};

// ============================================================================
// Helper Functions
// ============================================================================

/// Asserts the overlap result in both directions.
fn assert_overlap(a: &Region, b: &Region, expected: bool) {
    assert_eq!(a.overlaps(b), expected, "{} overlaps {}", a, b);
    assert_eq!(b.overlaps(a), expected, "{} overlaps {}", b, a);
}

const WESTMINSTER: LatLng = lat_lng(51.5007541, -0.11688530);

// ============================================================================
// Overlap
// ============================================================================

#[test]
fn overlap_region_self() {
    let region = region(1, top_left(2, 1), bot_right(1, 2));
    assert!(region.overlaps(&region));
}

#[test]
fn non_overlapping_regions_side_by_side() {
    let left = region(1, top_left(2, 1), bot_right(1, 2));
    let right = region(1, top_left(2, 3), bot_right(1, 4));
    assert_overlap(&left, &right, false);
}

#[test]
fn non_overlapping_regions_above_and_below() {
    let above = region(1, top_left(5, 3), bot_right(4, 4));
    let below = region(1, top_left(2, 3), bot_right(1, 4));
    assert_overlap(&above, &below, false);
}

#[test]
fn non_overlapping_regions_lower_left_and_upper_right() {
    let lower_left = region(1, top_left(2, 1), bot_right(1, 2));
    let upper_right = region(1, top_left(4, 3), bot_right(3, 4));
    assert_overlap(&lower_left, &upper_right, false);
}

#[test]
fn overlapping_nested_regions() {
    let outside = region(1, top_left(4, 1), bot_right(1, 4));
    let inside = region(1, top_left(3, 2), bot_right(2, 3));
    assert_overlap(&outside, &inside, true);
}

#[test]
fn adjoining_regions_do_not_overlap() {
    let center = region(1, top_left(3, 2), bot_right(2, 3));
    let upper = region(1, top_left(4, 2), bot_right(3, 3));
    let lower = region(1, top_left(2, 2), bot_right(1, 3));
    let left = region(1, top_left(3, 1), bot_right(2, 2));
    let right = region(1, top_left(3, 3), bot_right(2, 4));

    for neighbour in [upper, lower, left, right] {
        assert_overlap(&center, &neighbour, false);
    }
}

#[test]
fn adjoining_column_spans_do_not_overlap() {
    // Columns [1,2] and [2,3] on the same rows share one edge
    let first = region(1, top_left(3, 1), bot_right(1, 2));
    let second = region(1, top_left(3, 2), bot_right(1, 3));
    assert_overlap(&first, &second, false);
}

#[test]
fn partially_overlapping_regions() {
    let lower_left = region(1, top_left(3, 1), bot_right(1, 3));
    let upper_right = region(1, top_left(4, 2), bot_right(2, 4));
    assert_overlap(&lower_left, &upper_right, true);
}

// ============================================================================
// Projection round trips
// ============================================================================

#[test]
fn region_at_lat_lng_contains_lat_lng() {
    let region = region_at_lat_lng(18, WESTMINSTER).unwrap();

    assert!(region.top_left.lat >= WESTMINSTER.lat);
    assert!(region.bot_right.lat <= WESTMINSTER.lat);
    assert!(region.top_left.lng <= WESTMINSTER.lng);
    assert!(region.bot_right.lng >= WESTMINSTER.lng);
}

#[test]
fn at_center_is_center_of_region() {
    let region_start = region_at_lat_lng(18, WESTMINSTER).unwrap();
    let center = at_center(&region_start);
    let region_center = region_at_lat_lng(region_start.zoom, center).unwrap();

    assert!(region_start.contains(WESTMINSTER));
    assert!(region_center.contains(center));
    assert_eq!(region_start, region_center);
}

#[test]
fn zoom_zero_covers_the_world() {
    let world = region_at_lat_lng(0, WESTMINSTER).unwrap();
    let antipode = region_at_lat_lng(0, lat_lng(-51.5, 179.9)).unwrap();

    assert_eq!(world, antipode);
    assert_eq!(region_at_lat_lng(0, at_center(&world)).unwrap(), world);
}

#[test]
fn region_at_lat_lng_contains_mercator_limits() {
    use tilegrid::coord::{MAX_LAT, MIN_LAT};

    for zoom in [0, 9, 18] {
        for point in [lat_lng(MAX_LAT, 10.0), lat_lng(MIN_LAT, -10.0)] {
            assert!(region_at_lat_lng(zoom, point).unwrap().contains(point));
        }
    }
}

#[test]
fn region_at_lat_lng_contains_points_beside_equator_and_prime_meridian() {
    for point in [
        lat_lng(1e-16, 1.0),
        lat_lng(-1e-16, -1.0),
        lat_lng(10.0, -1e-14),
        lat_lng(-10.0, 1e-14),
    ] {
        for zoom in 1..=18 {
            let region = region_at_lat_lng(zoom, point).unwrap();
            assert!(region.contains(point), "{:?} not in {}", point, region);
        }
    }
}

// ============================================================================
// Area enumeration
// ============================================================================

#[test]
fn regions_in_area_contains_regions() {
    let top_left = lat_lng(85.24439622732126, -168.04687500000003);
    let bot_right = lat_lng(-85.24439622732126, 167.87109375000003);
    let area = Region::new(5, top_left, bot_right);

    let regions: Vec<Region> = regions_in(&area).unwrap().collect();
    assert!(!regions.is_empty());

    for region in &regions {
        assert_eq!(region.zoom, 5);
        assert_eq!(region_at_lat_lng(5, at_center(region)).unwrap(), *region);
    }
}

#[test]
fn regions_in_covers_every_point_of_area() {
    let area = region(9, lat_lng(51.7, -0.6), lat_lng(51.3, 0.3));
    let regions: Vec<Region> = regions_in(&area).unwrap().collect();

    for step_lat in 0..=10 {
        for step_lng in 0..=10 {
            let point = lat_lng(
                51.3 + 0.4 * f64::from(step_lat) / 10.0,
                -0.6 + 0.9 * f64::from(step_lng) / 10.0,
            );
            assert!(
                regions.iter().any(|r| r.contains(point)),
                "{} not covered",
                point
            );
        }
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn operations_run_concurrently_without_coordination() {
    let area = region(6, lat_lng(60.0, -20.0), lat_lng(30.0, 40.0));
    let expected: Vec<Region> = regions_in(&area).unwrap().collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| regions_in(&area).unwrap().collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
