//! Tile-grid regions and the rectangle algebra over them.
//!
//! A [`Region`] is the geographic box of one slippy-map tile plus its zoom
//! level. Regions built with [`Region::from_tile`] or [`region_at_lat_lng`]
//! have corners exactly on the grid; [`Region::new`] accepts arbitrary corners
//! and is used to describe query areas for [`regions_in`].
//!
//! # Example
//!
//! ```
//! use tilegrid::region::{at_center, lat_lng, region_at_lat_lng};
//!
//! let westminster = lat_lng(51.5007541, -0.1168853);
//! let region = region_at_lat_lng(18, westminster).unwrap();
//!
//! assert!(region.contains(westminster));
//! assert_eq!(region_at_lat_lng(18, at_center(&region)).unwrap(), region);
//! ```
//!
//! Longitude intervals are never wrapped: areas crossing the antimeridian
//! must be split by the caller.

mod area;

pub use area::RegionsIn;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::{
    self, clamp_latitude, lat_to_mercator_y, mercator_y_to_lat, CoordError, LatLng, TileCoord,
};

/// A rectangle on the map at a zoom level.
///
/// `top_left` is the north-west corner and `bot_right` the south-east one.
/// Equality is field-wise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub zoom: u8,
    pub top_left: LatLng,
    pub bot_right: LatLng,
}

impl Region {
    /// Creates a region from arbitrary corners.
    #[inline]
    pub const fn new(zoom: u8, top_left: LatLng, bot_right: LatLng) -> Self {
        Self {
            zoom,
            top_left,
            bot_right,
        }
    }

    /// Creates the grid-aligned region covering `tile`.
    pub fn from_tile(tile: TileCoord) -> Self {
        let (top_left, bot_right) = coord::tile_bounds(&tile);
        Self::new(tile.zoom, top_left, bot_right)
    }

    /// True if the two rectangles share an area of positive size.
    ///
    /// Regions that only touch along an edge or at a corner do not overlap.
    /// Zoom levels are not compared, so a tile overlaps its own children.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.top_left.lng < other.bot_right.lng
            && other.top_left.lng < self.bot_right.lng
            && self.bot_right.lat < other.top_left.lat
            && other.bot_right.lat < self.top_left.lat
    }

    /// True if `point` lies inside the region or on its boundary.
    pub fn contains(&self, point: LatLng) -> bool {
        self.bot_right.lat <= point.lat
            && point.lat <= self.top_left.lat
            && self.top_left.lng <= point.lng
            && point.lng <= self.bot_right.lng
    }

    /// Center of the region; see [`at_center`].
    #[inline]
    pub fn center(&self) -> LatLng {
        at_center(self)
    }

    /// The grid tile this region covers, located through its center.
    pub fn tile(&self) -> Result<TileCoord, CoordError> {
        let center = self.center();
        coord::to_tile_coords(center.lat, center.lng, self.zoom)
    }

    /// The four grid regions one zoom level finer that tile this one.
    ///
    /// Ordered NW, NE, SW, SE. Returns `None` at the finest zoom level.
    pub fn sub_regions(&self) -> Result<Option<[Region; 4]>, CoordError> {
        let children = self.tile()?.children();
        Ok(children.map(|tiles| tiles.map(Region::from_tile)))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zoom {} [{}] - [{}]",
            self.zoom, self.top_left, self.bot_right
        )
    }
}

/// Creates a point from latitude and longitude in degrees.
#[inline]
pub const fn lat_lng(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

/// Creates a region from arbitrary corners.
#[inline]
pub const fn region(zoom: u8, top_left: LatLng, bot_right: LatLng) -> Region {
    Region::new(zoom, top_left, bot_right)
}

/// North-west corner at whole-degree grid units.
#[inline]
pub fn top_left(lat: i32, lng: i32) -> LatLng {
    LatLng::new(f64::from(lat), f64::from(lng))
}

/// South-east corner at whole-degree grid units.
#[inline]
pub fn bot_right(lat: i32, lng: i32) -> LatLng {
    LatLng::new(f64::from(lat), f64::from(lng))
}

/// Returns the grid region at `zoom` that contains `point`.
///
/// Latitudes past the Mercator limit resolve to the northern- or
/// southern-most row, whose box stops at the limit.
pub fn region_at_lat_lng(zoom: u8, point: LatLng) -> Result<Region, CoordError> {
    let tile = coord::to_tile_coords(point.lat, point.lng, zoom)?;
    Ok(Region::from_tile(tile))
}

/// Center of `region`.
///
/// Longitude is the plain midpoint. Latitude is the midpoint in Mercator y,
/// which is what keeps the center inside the same grid tile: tile rows are
/// evenly spaced in y, not in degrees.
pub fn at_center(region: &Region) -> LatLng {
    let lng = (region.top_left.lng + region.bot_right.lng) / 2.0;

    let north = lat_to_mercator_y(clamp_latitude(region.top_left.lat));
    let south = lat_to_mercator_y(clamp_latitude(region.bot_right.lat));
    let lat = mercator_y_to_lat((north + south) / 2.0);

    LatLng::new(lat, lng)
}

/// Enumerates every grid region at `area.zoom` that overlaps or touches `area`.
///
/// Regions come out row by row from the north-west. The returned iterator
/// is finite and can be cloned to walk the same regions again.
pub fn regions_in(area: &Region) -> Result<RegionsIn, CoordError> {
    RegionsIn::new(area)
}
