// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel
//!
//! The energy of a pixel is the magnitude of the colour gradient
//! across it: the difference between its left and right neighbours,
//! and between the ones above and below.  Neighbours come from the
//! grid's toroidal addressing, so the first column's left neighbour is
//! the last column and there is no special case for the border.
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! Nothing is cached.  The seam search's cost table is the only
//! memoisation there is.

use crate::error::Result;
use crate::pixel::Pixel;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use itertools::zip_eq;

// Takes the channels (R,G,B) from two pixels, squares the difference
// of each, and sums them.  An i32 difference needs 33 bits and its
// square 65, so the sum is kept in an i128.
#[inline]
fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> i128 {
    zip_eq(&p1.channels(), &p2.channels())
        .map(|(c1, c2)| i128::from(*c2) - i128::from(*c1))
        .fold(0, |acc, d| acc + d * d)
}

/// The gradient energy at (column, row).
pub fn pixel_energy(grid: &PixelGrid, column: u32, row: u32) -> Result<f64> {
    let (x, y) = (i64::from(column), i64::from(row));
    let across = energy_of_pair(&grid.get(x - 1, y)?, &grid.get(x + 1, y)?);
    let down = energy_of_pair(&grid.get(x, y - 1)?, &grid.get(x, y + 1)?);
    Ok(((across + down) as f64).sqrt())
}

/// Compute the energy of every pixel in the grid, addressed as
/// (column, row).
pub fn calculate_energy(grid: &PixelGrid) -> Result<TwoDimensionalMap<f64>> {
    let (width, height) = grid.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            emap[(x, y)] = pixel_energy(grid, x, y)?;
        }
    }
    Ok(emap)
}
