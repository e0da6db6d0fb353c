//! Cover command - enumerate every region under an area.

use tilegrid::{regions_in, LatLng, Region};

use super::common::Context;
use crate::error::CliError;
use crate::output::{emit, CoverReport, RegionReport};

/// Default cap on regions printed by one `cover` call.
pub const DEFAULT_MAX_REGIONS: usize = 10_000;

/// Geographic box given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub north: f64,
    pub west: f64,
    pub south: f64,
    pub east: f64,
}

impl Bounds {
    fn to_area(self, zoom: u8) -> Region {
        Region::new(
            zoom,
            LatLng::new(self.north, self.west),
            LatLng::new(self.south, self.east),
        )
    }
}

/// Build the report, refusing areas that expand past `max_regions`.
pub fn report(ctx: &Context, bounds: Bounds, max_regions: usize) -> Result<CoverReport, CliError> {
    let area = bounds.to_area(ctx.zoom);
    let regions = regions_in(&area)?;

    let count = regions.len();
    if count > max_regions {
        return Err(CliError::TooManyRegions {
            count,
            limit: max_regions,
        });
    }

    let regions = regions
        .map(|region| region.tile().map(RegionReport::new))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(zoom = ctx.zoom, count, "Covered area");
    Ok(CoverReport {
        area,
        count,
        regions,
    })
}

pub fn run(ctx: &Context, bounds: Bounds, max_regions: usize) -> Result<(), CliError> {
    emit(ctx.format, &report(ctx, bounds, max_regions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid::config::OutputFormat;
    use tilegrid::CoordError;

    fn ctx(zoom: u8) -> Context {
        Context {
            zoom,
            format: OutputFormat::Json,
        }
    }

    const GREATER_LONDON: Bounds = Bounds {
        north: 51.7,
        west: -0.6,
        south: 51.3,
        east: 0.3,
    };

    #[test]
    fn test_cover_counts_regions() {
        let report = report(&ctx(9), GREATER_LONDON, DEFAULT_MAX_REGIONS).unwrap();
        assert_eq!(report.count, report.regions.len());
        assert!(report.count >= 2);
        for entry in &report.regions {
            assert!(entry.region.overlaps(&report.area) || report.area.contains(entry.center));
        }
    }

    #[test]
    fn test_cover_enforces_limit() {
        let err = report(&ctx(16), GREATER_LONDON, 100).unwrap_err();
        assert!(matches!(err, CliError::TooManyRegions { limit: 100, .. }));
    }

    #[test]
    fn test_cover_rejects_swapped_corners() {
        let swapped = Bounds {
            north: 51.3,
            south: 51.7,
            ..GREATER_LONDON
        };
        let err = report(&ctx(9), swapped, DEFAULT_MAX_REGIONS).unwrap_err();
        assert!(matches!(err, CliError::Coord(CoordError::InvalidArea { .. })));
    }
}
