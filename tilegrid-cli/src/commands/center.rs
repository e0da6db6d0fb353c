//! Center command - bounds and center of a tile.

use tilegrid::TileCoord;

use super::common::Context;
use crate::error::CliError;
use crate::output::{emit, RegionReport};

pub fn run(ctx: &Context, tile: TileCoord) -> Result<(), CliError> {
    emit(ctx.format, &RegionReport::new(tile))
}
