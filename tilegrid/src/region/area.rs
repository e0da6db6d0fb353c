//! Enumeration of grid regions under an arbitrary area.

use crate::coord::{self, CoordError, TileCoord};

use super::Region;

/// Iterator over the grid regions covering an area.
///
/// Yields regions in row-major order (north row first, west to east within
/// a row). The tile range is fixed at construction, so the iterator is
/// finite and a clone replays the same sequence.
#[derive(Debug, Clone)]
pub struct RegionsIn {
    zoom: u8,
    first_col: u32,
    last_col: u32,
    row: u32,
    col: u32,
    remaining: usize,
}

impl RegionsIn {
    pub(super) fn new(area: &Region) -> Result<Self, CoordError> {
        let zoom = area.zoom;
        let first_col = coord::tile_x(zoom, area.top_left.lng)?;
        let last_col = coord::tile_x(zoom, area.bot_right.lng)?;
        let first_row = coord::tile_y(zoom, area.top_left.lat)?;
        let last_row = coord::tile_y(zoom, area.bot_right.lat)?;

        if area.top_left.lng > area.bot_right.lng || area.top_left.lat < area.bot_right.lat {
            return Err(CoordError::InvalidArea {
                top_left: area.top_left,
                bot_right: area.bot_right,
            });
        }

        let cols = (last_col - first_col + 1) as usize;
        let rows = (last_row - first_row + 1) as usize;

        tracing::debug!(
            zoom,
            first_col,
            last_col,
            first_row,
            last_row,
            count = cols * rows,
            "Enumerating regions in area"
        );

        Ok(Self {
            zoom,
            first_col,
            last_col,
            row: first_row,
            col: first_col,
            remaining: cols * rows,
        })
    }

    /// Zoom level of the regions produced.
    #[inline]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }
}

impl Iterator for RegionsIn {
    type Item = Region;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let tile = TileCoord {
            row: self.row,
            col: self.col,
            zoom: self.zoom,
        };

        self.remaining -= 1;
        if self.col == self.last_col {
            self.col = self.first_col;
            self.row += 1;
        } else {
            self.col += 1;
        }

        Some(Region::from_tile(tile))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RegionsIn {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl std::iter::FusedIterator for RegionsIn {}
