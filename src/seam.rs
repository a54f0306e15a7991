// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams and their orientation
//!
//! A seam is a list of positions, one per stage.  For a vertical seam
//! the stages are rows and each entry is a column; for a horizontal
//! seam the stages are columns and each entry is a row.

use crate::error::{Result, SeamError};
use crate::pixelgrid::PixelGrid;
use std::fmt;
use std::ops::Deref;

/// Which way a seam runs through the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Top to bottom, one pixel per row.  Removing it narrows the grid.
    Vertical,
    /// Left to right, one pixel per column.  Removing it shortens the grid.
    Horizontal,
}

impl Orientation {
    /// The number of (stages, positions) a seam of this orientation
    /// has on a grid of the given dimensions.
    pub fn axes(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (height, width),
            Orientation::Horizontal => (width, height),
        }
    }

    /// Map a (stage, position) pair to a (column, row) pair.
    pub fn coordinate(self, stage: u32, position: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (position, stage),
            Orientation::Horizontal => (stage, position),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// An ordered path through the grid, stage 0 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    orientation: Orientation,
    positions: Vec<u32>,
}

impl Seam {
    pub fn new(orientation: Orientation, positions: Vec<u32>) -> Self {
        Seam {
            orientation,
            positions,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    /// The (column, row) address of every pixel on the seam, in stage
    /// order.
    pub fn coordinates<'a>(&'a self) -> impl Iterator<Item = (u32, u32)> + 'a {
        let orientation = self.orientation;
        self.positions
            .iter()
            .enumerate()
            .map(move |(stage, &position)| orientation.coordinate(stage as u32, position))
    }

    /// Check that this seam fits the grid's current geometry: one entry
    /// per stage, every entry a real position, and no entry more than
    /// one step away from its neighbour.
    pub fn validate(&self, grid: &PixelGrid) -> Result<()> {
        let orientation = self.orientation;
        let (stages, positions) = orientation.axes(grid.width(), grid.height());

        if self.positions.len() != stages as usize {
            return Err(SeamError::SeamLength {
                orientation,
                expected: stages,
                found: self.positions.len(),
            });
        }

        if let Some((stage, &position)) = self
            .positions
            .iter()
            .enumerate()
            .find(|(_, p)| **p >= positions)
        {
            return Err(SeamError::SeamPosition {
                orientation,
                stage,
                position,
                limit: positions,
            });
        }

        match self
            .positions
            .windows(2)
            .position(|pair| pair[0].max(pair[1]) - pair[0].min(pair[1]) > 1)
        {
            Some(stage) => Err(SeamError::SeamDiscontinuity {
                orientation,
                stage: stage + 1,
                from: self.positions[stage],
                to: self.positions[stage + 1],
            }),
            None => Ok(()),
        }
    }
}

impl Deref for Seam {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    fn grid(width: u32, height: u32) -> PixelGrid {
        PixelGrid::new(
            width,
            height,
            vec![Pixel::default(); (width * height) as usize],
        )
        .unwrap()
    }

    #[test]
    fn orientation_maps_stage_and_position() {
        assert_eq!(Orientation::Vertical.axes(5, 4), (4, 5));
        assert_eq!(Orientation::Horizontal.axes(5, 4), (5, 4));
        assert_eq!(Orientation::Vertical.coordinate(3, 1), (1, 3));
        assert_eq!(Orientation::Horizontal.coordinate(3, 1), (3, 1));
    }

    #[test]
    fn coordinates_follow_orientation() {
        let seam = Seam::new(Orientation::Horizontal, vec![0, 1, 1]);
        let coords: Vec<_> = seam.coordinates().collect();
        assert_eq!(coords, [(0, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn validate_accepts_a_connected_seam() {
        let seam = Seam::new(Orientation::Vertical, vec![2, 3, 4, 3]);
        assert_eq!(seam.validate(&grid(5, 4)), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_length() {
        let seam = Seam::new(Orientation::Horizontal, vec![0, 1, 0]);
        assert_eq!(
            seam.validate(&grid(5, 4)),
            Err(SeamError::SeamLength {
                orientation: Orientation::Horizontal,
                expected: 5,
                found: 3
            })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_entries() {
        let seam = Seam::new(Orientation::Vertical, vec![4, 5, 4, 4]);
        assert_eq!(
            seam.validate(&grid(5, 4)),
            Err(SeamError::SeamPosition {
                orientation: Orientation::Vertical,
                stage: 1,
                position: 5,
                limit: 5
            })
        );
    }

    #[test]
    fn validate_rejects_jumps() {
        let seam = Seam::new(Orientation::Vertical, vec![0, 1, 3, 3]);
        assert_eq!(
            seam.validate(&grid(5, 4)),
            Err(SeamError::SeamDiscontinuity {
                orientation: Orientation::Vertical,
                stage: 2,
                from: 1,
                to: 3
            })
        );
    }
}
