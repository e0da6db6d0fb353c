//! Overlap and containment checks between tiles and points.

use tilegrid::{LatLng, TileCoord};

use super::common::Context;
use crate::error::CliError;
use crate::output::{emit, ContainsReport, OverlapReport, RegionReport};

pub fn overlap_report(first: TileCoord, second: TileCoord) -> OverlapReport {
    let first = RegionReport::new(first);
    let second = RegionReport::new(second);
    let overlaps = first.region.overlaps(&second.region);

    OverlapReport {
        first,
        second,
        overlaps,
    }
}

pub fn contains_report(tile: TileCoord, point: LatLng) -> ContainsReport {
    let region = RegionReport::new(tile);
    let contains = region.region.contains(point);

    ContainsReport {
        region,
        point,
        contains,
    }
}

pub fn run_overlap(ctx: &Context, first: TileCoord, second: TileCoord) -> Result<(), CliError> {
    emit(ctx.format, &overlap_report(first, second))
}

pub fn run_contains(ctx: &Context, tile: TileCoord, lat: f64, lon: f64) -> Result<(), CliError> {
    emit(ctx.format, &contains_report(tile, LatLng::new(lat, lon)))
}
