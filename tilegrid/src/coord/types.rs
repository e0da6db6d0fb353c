//! Coordinate type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Supported zoom levels
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 18;

/// A geographic point in degrees.
///
/// Latitude runs north-positive, longitude east-positive. Values are stored
/// as given; range checks happen at the projection boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Tile coordinates in Web Mercator / Slippy Map system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// Y coordinate (north-south), 0 at north
    pub row: u32,
    /// X coordinate (east-west), 0 at west
    pub col: u32,
    /// Zoom level (0-18)
    pub zoom: u8,
}

impl TileCoord {
    /// Creates a tile coordinate, checking it lies on the grid at `zoom`.
    pub fn new(row: u32, col: u32, zoom: u8) -> Result<Self, CoordError> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }
        let n = super::tiles_per_side(zoom);
        if row >= n || col >= n {
            return Err(CoordError::InvalidTile { row, col, zoom });
        }
        Ok(Self { row, col, zoom })
    }

    /// Geographic corners `(top_left, bot_right)` of this tile.
    #[inline]
    pub fn bounds(&self) -> (LatLng, LatLng) {
        super::tile_bounds(self)
    }

    /// Center of this tile, halfway across in projected space.
    pub fn center(&self) -> LatLng {
        let n = f64::from(super::tiles_per_side(self.zoom));
        let lng = (f64::from(self.col) + 0.5) / n * 360.0 - 180.0;
        let lat = super::mercator_y_to_lat((f64::from(self.row) + 0.5) / n);
        LatLng::new(lat, lng)
    }

    /// The tile one zoom level coarser that contains this one.
    ///
    /// Returns `None` at zoom 0.
    pub fn parent(&self) -> Option<TileCoord> {
        if self.zoom == MIN_ZOOM {
            return None;
        }
        Some(TileCoord {
            row: self.row / 2,
            col: self.col / 2,
            zoom: self.zoom - 1,
        })
    }

    /// The four tiles one zoom level finer that make up this one.
    ///
    /// Ordered NW, NE, SW, SE. Returns `None` at [`MAX_ZOOM`].
    pub fn children(&self) -> Option<[TileCoord; 4]> {
        if self.zoom >= MAX_ZOOM {
            return None;
        }
        let zoom = self.zoom + 1;
        let (row, col) = (self.row * 2, self.col * 2);
        Some([
            TileCoord { row, col, zoom },
            TileCoord { row, col: col + 1, zoom },
            TileCoord { row: row + 1, col, zoom },
            TileCoord { row: row + 1, col: col + 1, zoom },
        ])
    }
}

/// Formats as `zoom/col/row`, the usual `z/x/y` tile path order.
impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.col, self.row)
    }
}

impl FromStr for TileCoord {
    type Err = CoordError;

    /// Parses `z/x/y` and checks the tile exists at that zoom.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordError::InvalidTileSpec(s.to_string());

        let mut parts = s.trim().split('/');
        let (Some(z), Some(x), Some(y), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let zoom: u8 = z.parse().map_err(|_| invalid())?;
        let col: u32 = x.parse().map_err(|_| invalid())?;
        let row: u32 = y.parse().map_err(|_| invalid())?;

        TileCoord::new(row, col, zoom)
    }
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is outside -90 to 90 or not a number
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    /// Longitude is outside valid range (-180.0 to 180.0)
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    /// Zoom level is outside valid range (0 to 18)
    #[error("Invalid zoom level: {0} (must be between 0 and 18)")]
    InvalidZoom(u8),

    /// Tile row or column does not exist at the zoom level
    #[error("Invalid tile: row {row}, col {col} is outside the grid at zoom {zoom}")]
    InvalidTile { row: u32, col: u32, zoom: u8 },

    /// Tile string is not in `z/x/y` form
    #[error("Invalid tile '{0}' (expected z/x/y, e.g. 12/2046/1362)")]
    InvalidTileSpec(String),

    /// Area corners are swapped or cross the antimeridian
    #[error("Invalid area: top-left ({top_left}) must be north-west of bottom-right ({bot_right})")]
    InvalidArea { top_left: LatLng, bot_right: LatLng },
}
