// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! A rectangle of pixels stored row by row in one buffer.  The buffer
//! never shrinks: the stride stays at the width the grid was built
//! with, and removing a seam just slides pixels down the buffer and
//! decrements the logical width or height.  Anything past the logical
//! edge is garbage and is never read.
//!
//! Neighbour lookups are toroidal, but only one step deep: column -1
//! is the last column, column `width` is column 0, and likewise for
//! rows.  That is all the energy function ever asks for.

use crate::error::{Result, SeamError};
use crate::pixel::Pixel;
use image::{GenericImageView, Primitive, RgbImage};
use std::ops::Index;

#[derive(Debug, Clone)]
pub struct PixelGrid {
    stride: u32,
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

/// Map a signed index at most one step outside `0..size` back into
/// range.
pub fn wrap(index: i64, size: u32) -> Option<u32> {
    let size = i64::from(size);
    match index {
        -1 => Some(size - 1),
        i if i == size => Some(0),
        i if i >= 0 && i < size => Some(i),
        _ => None,
    }
    .map(|i| i as u32)
}

impl PixelGrid {
    /// Build a grid from pixels given in row-major order.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyGrid {
                width: width as usize,
                height: height as usize,
            });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(SeamError::BufferSize {
                width,
                height,
                expected,
                found: pixels.len(),
            });
        }
        Ok(PixelGrid {
            stride: width,
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from a list of columns, each a list of rows.
    pub fn from_columns(columns: Vec<Vec<Pixel>>) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyGrid { width, height });
        }
        if let Some((column, found)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != height)
        {
            return Err(SeamError::RaggedColumns {
                column,
                expected: height,
                found,
            });
        }

        let pixels = (0..height)
            .flat_map(|row| columns.iter().map(move |column| column[row]))
            .collect();
        PixelGrid::new(width as u32, height as u32, pixels)
    }

    /// Copy an image into a grid.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: image::Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .map(|(_, _, p)| Pixel::from_image_pixel(&p))
            .collect::<Result<Vec<_>>>()?;
        PixelGrid::new(width, height, pixels)
    }

    /// Copy the grid's logical contents out to an 8-bit RGB image,
    /// clamping every channel.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| self[(x, y)].to_rgb8())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The pixel at (column, row), wrapping once around either edge.
    pub fn get(&self, column: i64, row: i64) -> Result<Pixel> {
        match (wrap(column, self.width), wrap(row, self.height)) {
            (Some(x), Some(y)) => Ok(self.pixels[self.get_index(x, y)]),
            _ => Err(SeamError::OutOfBounds {
                column,
                row,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Every pixel with its (column, row), row by row.
    pub fn pixels<'a>(&'a self) -> impl Iterator<Item = (u32, u32, Pixel)> + 'a {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self[(x, y)])))
    }

    pub(crate) fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.stride as usize) + (x as usize)
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub(crate) fn drop_last_column(&mut self) {
        self.width -= 1;
    }

    pub(crate) fn drop_last_row(&mut self) {
        self.height -= 1;
    }
}

// Two grids are equal when what they show is equal.  The stride and
// whatever sits past the logical edge don't count.
impl PartialEq for PixelGrid {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.pixels().eq(other.pixels())
    }
}

impl Index<(u32, u32)> for PixelGrid {
    type Output = Pixel;

    /// In-bounds addressing only; panics past the logical edge.
    fn index(&self, (x, y): (u32, u32)) -> &Pixel {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside a {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        &self.pixels[self.get_index(x, y)]
    }
}
