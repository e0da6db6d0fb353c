//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and Web Mercator tile coordinates on the slippy-map grid, where zoom `z`
//! divides the world into `2^z × 2^z` tiles numbered from the north-west.
//!
//! Latitudes beyond the Mercator limit (±85.05112878°) are clamped before
//! projecting. Everything else outside the valid ranges is rejected.

mod types;

pub use types::{
    CoordError, LatLng, TileCoord, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM,
};

use std::f64::consts::PI;

/// Number of tiles along each axis at `zoom`.
///
/// `zoom` must not exceed [`MAX_ZOOM`]; every public entry point checks this
/// before calling here.
#[inline]
pub fn tiles_per_side(zoom: u8) -> u32 {
    1u32 << zoom
}

/// Clamps a latitude into the range the Mercator projection can represent.
#[inline]
pub fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(MIN_LAT, MAX_LAT)
}

/// Returns the tile column containing `lng` at `zoom`.
///
/// # Arguments
///
/// * `zoom` - Zoom level (0 to 18)
/// * `lng` - Longitude in degrees (-180.0 to 180.0)
///
/// The east edge (180°) belongs to the last column.
pub fn tile_x(zoom: u8, lng: f64) -> Result<u32, CoordError> {
    check_zoom(zoom)?;
    if !(MIN_LON..=MAX_LON).contains(&lng) {
        return Err(CoordError::InvalidLongitude(lng));
    }

    let n = tiles_per_side(zoom);
    let col = grid_index((lng + 180.0) / 360.0, n);

    // Settle rounding at grid lines against the edges tile_bounds reports.
    if col > 0 && lng < col_edge(col, n) {
        Ok(col - 1)
    } else if col + 1 < n && lng >= col_edge(col + 1, n) {
        Ok(col + 1)
    } else {
        Ok(col)
    }
}

/// Returns the tile row containing `lat` at `zoom`.
///
/// # Arguments
///
/// * `zoom` - Zoom level (0 to 18)
/// * `lat` - Latitude in degrees (-90.0 to 90.0, clamped to the Mercator range)
pub fn tile_y(zoom: u8, lat: f64) -> Result<u32, CoordError> {
    check_zoom(zoom)?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }

    let lat = clamp_latitude(lat);
    let n = tiles_per_side(zoom);
    let row = grid_index(lat_to_mercator_y(lat), n);

    if row > 0 && lat > row_edge(row, n) {
        Ok(row - 1)
    } else if row + 1 < n && lat <= row_edge(row + 1, n) {
        Ok(row + 1)
    } else {
        Ok(row)
    }
}

/// Converts geographic coordinates to tile coordinates.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-90.0 to 90.0, clamped to the Mercator range)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level (0 to 18)
///
/// # Returns
///
/// A `Result` containing the tile coordinates or an error if inputs are invalid.
#[inline]
pub fn to_tile_coords(lat: f64, lon: f64, zoom: u8) -> Result<TileCoord, CoordError> {
    let row = tile_y(zoom, lat)?;
    let col = tile_x(zoom, lon)?;

    Ok(TileCoord { row, col, zoom })
}

/// Converts tile coordinates back to geographic coordinates.
///
/// Returns the latitude/longitude of the tile's northwest corner.
#[inline]
pub fn tile_to_lat_lon(tile: &TileCoord) -> (f64, f64) {
    let corner = grid_corner(tile.row, tile.col, tile.zoom);
    (corner.lat, corner.lng)
}

/// Geographic box covered by a tile, as `(top_left, bot_right)`.
///
/// Longitude edges are linear in the column index. Latitude edges come from
/// the inverse Mercator formula, so rows get taller in degrees towards the
/// equator.
pub fn tile_bounds(tile: &TileCoord) -> (LatLng, LatLng) {
    let top_left = grid_corner(tile.row, tile.col, tile.zoom);
    let bot_right = grid_corner(tile.row + 1, tile.col + 1, tile.zoom);
    (top_left, bot_right)
}

/// Projects a latitude to its Mercator y position in `[0, 1]`, 0 at the north edge.
///
/// `ln(tan φ + sec φ)` is written as `asinh(tan φ)`.
#[inline]
pub(crate) fn lat_to_mercator_y(lat: f64) -> f64 {
    let lat_rad = lat * PI / 180.0;
    (1.0 - lat_rad.tan().asinh() / PI) / 2.0
}

/// Inverse of [`lat_to_mercator_y`].
#[inline]
pub(crate) fn mercator_y_to_lat(y: f64) -> f64 {
    let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();
    lat_rad * 180.0 / PI
}

/// Grid line intersection at `(row, col)`; row and col may equal `2^zoom`.
fn grid_corner(row: u32, col: u32, zoom: u8) -> LatLng {
    let n = tiles_per_side(zoom);
    LatLng::new(row_edge(row, n), col_edge(col, n))
}

/// Longitude of the west edge of column `col`.
fn col_edge(col: u32, n: u32) -> f64 {
    f64::from(col) / f64::from(n) * 360.0 - 180.0
}

/// Latitude of the north edge of row `row`.
///
/// The outer grid lines are pinned to the clamp limits so every accepted
/// latitude lies within the grid.
fn row_edge(row: u32, n: u32) -> f64 {
    if row == 0 {
        MAX_LAT
    } else if row >= n {
        MIN_LAT
    } else {
        mercator_y_to_lat(f64::from(row) / f64::from(n))
    }
}

/// Maps a position in `[0, 1]` to a cell index in `[0, n - 1]`.
fn grid_index(fraction: f64, n: u32) -> u32 {
    let index = (fraction * f64::from(n)).floor();
    if index <= 0.0 {
        0
    } else if index >= f64::from(n - 1) {
        n - 1
    } else {
        index as u32
    }
}

fn check_zoom(zoom: u8) -> Result<(), CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }
    Ok(())
}
