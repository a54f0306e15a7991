// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - removing seams
//!
//! Seam removal works in place on the grid's buffer: pixels past the
//! seam slide one step toward it, and the grid's logical width or
//! height drops by one.  Nothing is reallocated.  Every removal checks
//! the seam against the grid before it touches a pixel, so a bad seam
//! leaves the grid exactly as it was.

use crate::cumulative::GradientSeamFinder;
use crate::error::{Result, SeamError};
use crate::pixelgrid::PixelGrid;
use crate::seam::{Orientation, Seam};
use crate::seamfinder::SeamFinder;
use log::debug;

fn check(grid: &PixelGrid, seam: &Seam, expected: Orientation) -> Result<()> {
    if seam.orientation() != expected {
        return Err(SeamError::OrientationMismatch {
            expected,
            found: seam.orientation(),
        });
    }
    seam.validate(grid)?;
    let (_, across) = expected.axes(grid.width(), grid.height());
    if across < 2 {
        return Err(SeamError::LastLine {
            orientation: expected,
        });
    }
    Ok(())
}

/// Remove one pixel from every row, narrowing the grid by a column.
pub fn remove_vertical_seam(grid: &mut PixelGrid, seam: &Seam) -> Result<()> {
    check(grid, seam, Orientation::Vertical)?;
    let last = grid.width() - 1;
    for (y, &x) in seam.iter().enumerate() {
        let (start, end) = (grid.get_index(x, y as u32), grid.get_index(last, y as u32));
        grid.buffer_mut().copy_within(start + 1..=end, start);
    }
    grid.drop_last_column();
    Ok(())
}

/// Remove one pixel from every column, shortening the grid by a row.
pub fn remove_horizontal_seam(grid: &mut PixelGrid, seam: &Seam) -> Result<()> {
    check(grid, seam, Orientation::Horizontal)?;
    let last = grid.height() - 1;
    for (x, &seam_row) in seam.iter().enumerate() {
        let x = x as u32;
        for y in seam_row..last {
            let (to, from) = (grid.get_index(x, y), grid.get_index(x, y + 1));
            let buffer = grid.buffer_mut();
            buffer[to] = buffer[from];
        }
    }
    grid.drop_last_row();
    Ok(())
}

/// Remove a seam in whichever direction it runs.
pub fn remove_seam(grid: &mut PixelGrid, seam: &Seam) -> Result<()> {
    match seam.orientation() {
        Orientation::Vertical => remove_vertical_seam(grid, seam),
        Orientation::Horizontal => remove_horizontal_seam(grid, seam),
    }
}

// Which dimension a single carve shrinks.  Carving width takes out a
// vertical seam, carving height a horizontal one.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        match self {
            Carve::Width => Carve::Height,
            Carve::Height => Carve::Width,
        }
    }
}

/// Owns a grid for the whole of its carving.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    pub fn image(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_image(self) -> PixelGrid {
        self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn find_vertical_seam(&self) -> Result<Seam> {
        GradientSeamFinder::new(&self.grid).find_vertical_seam()
    }

    pub fn find_horizontal_seam(&self) -> Result<Seam> {
        GradientSeamFinder::new(&self.grid).find_horizontal_seam()
    }

    pub fn remove_vertical_seam(&mut self, seam: &Seam) -> Result<()> {
        remove_vertical_seam(&mut self.grid, seam)
    }

    pub fn remove_horizontal_seam(&mut self, seam: &Seam) -> Result<()> {
        remove_horizontal_seam(&mut self.grid, seam)
    }

    /// Find and remove one seam, returning the seam that went.
    pub fn carve_once(&mut self, direction: Carve) -> Result<Seam> {
        let seam = match direction {
            Carve::Width => self.find_vertical_seam()?,
            Carve::Height => self.find_horizontal_seam()?,
        };
        remove_seam(&mut self.grid, &seam)?;
        Ok(seam)
    }

    // The whole energy map and cost table are rebuilt for every seam.
    // Only the pixels next to the removed seam actually change.

    /// Repeatedly carve seams until the grid is `new_width` by
    /// `new_height`, alternating directions while both are too big.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = self.grid.dimensions();
        if width < new_width || height < new_height || new_width == 0 || new_height == 0 {
            return Err(SeamError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }

        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
            debug!("B: {}, {}", self.width(), self.height());
        }
        while self.width() > new_width {
            self.carve_once(Carve::Width)?;
            debug!("W: {}, {}", self.width(), self.height());
        }
        while self.height() > new_height {
            self.carve_once(Carve::Height)?;
            debug!("H: {}, {}", self.width(), self.height());
        }
        Ok(())
    }
}
