//! Result rendering for command output.
//!
//! Every command builds a report value; this module turns it into either
//! human-readable lines or pretty JSON according to the selected format.

use serde::Serialize;
use tilegrid::config::OutputFormat;
use tilegrid::{LatLng, Region, TileCoord};

use crate::error::CliError;

/// A command result that can be printed as text.
pub trait TextReport {
    /// Lines printed in text mode, without trailing newlines.
    fn text_lines(&self) -> Vec<String>;
}

/// One grid region along with the tile it covers and its center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionReport {
    pub tile: TileCoord,
    pub region: Region,
    pub center: LatLng,
}

impl RegionReport {
    pub fn new(tile: TileCoord) -> Self {
        let region = Region::from_tile(tile);
        Self {
            tile,
            center: region.center(),
            region,
        }
    }

    fn line(&self) -> String {
        format!(
            "{}  nw [{}]  se [{}]  center [{}]",
            self.tile, self.region.top_left, self.region.bot_right, self.center
        )
    }
}

impl TextReport for RegionReport {
    fn text_lines(&self) -> Vec<String> {
        vec![self.line()]
    }
}

/// All regions under an area.
#[derive(Debug, Clone, Serialize)]
pub struct CoverReport {
    pub area: Region,
    pub count: usize,
    pub regions: Vec<RegionReport>,
}

impl TextReport for CoverReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{} regions at zoom {} under [{}] - [{}]",
            self.count, self.area.zoom, self.area.top_left, self.area.bot_right
        )];
        lines.extend(self.regions.iter().map(RegionReport::line));
        lines
    }
}

/// Overlap test between two tile regions.
#[derive(Debug, Clone, Serialize)]
pub struct OverlapReport {
    pub first: RegionReport,
    pub second: RegionReport,
    pub overlaps: bool,
}

impl TextReport for OverlapReport {
    fn text_lines(&self) -> Vec<String> {
        let verdict = if self.overlaps { "overlap" } else { "do not overlap" };
        vec![
            self.first.line(),
            self.second.line(),
            format!("{} and {} {}", self.first.tile, self.second.tile, verdict),
        ]
    }
}

/// Point containment test against a tile region.
#[derive(Debug, Clone, Serialize)]
pub struct ContainsReport {
    pub region: RegionReport,
    pub point: LatLng,
    pub contains: bool,
}

impl TextReport for ContainsReport {
    fn text_lines(&self) -> Vec<String> {
        let verdict = if self.contains { "contains" } else { "does not contain" };
        vec![
            self.region.line(),
            format!("{} {} [{}]", self.region.tile, verdict, self.point),
        ]
    }
}

/// Render a report in the requested format.
pub fn render<T: Serialize + TextReport>(format: OutputFormat, report: &T) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(report.text_lines().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Render a report and print it to stdout.
pub fn emit<T: Serialize + TextReport>(format: OutputFormat, report: &T) -> Result<(), CliError> {
    println!("{}", render(format, report)?);
    Ok(())
}
