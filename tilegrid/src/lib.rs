//! TileGrid - slippy-map tile regions for geospatial indexing
//!
//! Maps latitude/longitude to the rectangular region of the Web Mercator
//! tile that contains it at a zoom level, and provides the rectangle algebra
//! on those regions: overlap, containment, center, and enumeration of every
//! tile region under an arbitrary area.
//!
//! - [`coord`]: projection between geographic points and tile indices
//! - [`region`]: the [`Region`](region::Region) type and its operations
//! - [`config`] and [`logging`]: ambient setup used by the command-line tool
//!
//! All operations are pure functions over `Copy` values and can be called
//! from any number of threads without coordination.

pub mod config;
pub mod coord;
pub mod logging;
pub mod region;

pub use coord::{CoordError, LatLng, TileCoord};
pub use region::{at_center, region_at_lat_lng, regions_in, Region, RegionsIn};
