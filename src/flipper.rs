// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grid orientation flipper
//!
//! A view of a pixel grid in seam-search terms.  The search walks
//! "stages" and picks a "position" in each; for a vertical seam the
//! stages are rows, and for a horizontal seam the view is flipped 90°
//! so the stages are columns.  Nothing else in the search has to know
//! which way it is running.

use crate::energy::pixel_energy;
use crate::error::Result;
use crate::pixelgrid::PixelGrid;
use crate::seam::Orientation;

pub struct Flipper<'a> {
    pub grid: &'a PixelGrid,
    pub orientation: Orientation,
}

impl<'a> Flipper<'a> {
    pub fn new(grid: &'a PixelGrid, orientation: Orientation) -> Self {
        Flipper { grid, orientation }
    }

    /// (stages, positions)
    pub fn dimensions(&self) -> (u32, u32) {
        self.orientation.axes(self.grid.width(), self.grid.height())
    }

    pub fn stages(&self) -> u32 {
        self.dimensions().0
    }

    pub fn positions(&self) -> u32 {
        self.dimensions().1
    }

    /// The energy of the pixel at `position` in `stage`.
    pub fn energy(&self, stage: u32, position: u32) -> Result<f64> {
        let (column, row) = self.orientation.coordinate(stage, position);
        pixel_energy(self.grid, column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    #[test]
    fn flipping_swaps_the_axes() {
        let grid = PixelGrid::new(3, 2, vec![Pixel::default(); 6]).unwrap();
        assert_eq!(Flipper::new(&grid, Orientation::Vertical).dimensions(), (2, 3));
        let flipped = Flipper::new(&grid, Orientation::Horizontal);
        assert_eq!((flipped.stages(), flipped.positions()), (3, 2));
    }

    #[test]
    fn flipped_energy_reads_the_transposed_pixel() {
        let mut pixels = vec![Pixel::default(); 9];
        pixels[5] = Pixel::new(90, 0, 0); // column 2, row 1
        let grid = PixelGrid::new(3, 3, pixels).unwrap();
        let upright = Flipper::new(&grid, Orientation::Vertical);
        let flipped = Flipper::new(&grid, Orientation::Horizontal);
        // Column 1, row 1 sits next to the red pixel horizontally.
        assert_eq!(upright.energy(1, 1).unwrap(), 90.0);
        assert_eq!(flipped.energy(1, 1).unwrap(), 90.0);
        // Column 2, row 0 sits above it.
        assert_eq!(upright.energy(0, 2).unwrap(), flipped.energy(2, 0).unwrap());
    }
}
