//! Locate command - find the region containing a point.

use tilegrid::{region_at_lat_lng, LatLng};

use super::common::Context;
use crate::error::CliError;
use crate::output::{emit, RegionReport};

/// Build the report for the region holding `(lat, lon)`.
pub fn report(ctx: &Context, lat: f64, lon: f64) -> Result<RegionReport, CliError> {
    let point = LatLng::new(lat, lon);
    let region = region_at_lat_lng(ctx.zoom, point)?;
    let tile = region.tile()?;

    tracing::debug!(%point, %tile, "Located point");
    Ok(RegionReport::new(tile))
}

pub fn run(ctx: &Context, lat: f64, lon: f64) -> Result<(), CliError> {
    emit(ctx.format, &report(ctx, lat, lon)?)
}
