// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every way a caller can hand the carver a grid or a seam that does
//! not fit.  Nothing here is recoverable in the sense of "try again";
//! these are contract violations reported before any state is touched.

use crate::seam::Orientation;
use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum SeamError {
    #[fail(display = "a pixel grid needs at least one column and one row, got {}x{}", width, height)]
    EmptyGrid { width: usize, height: usize },

    #[fail(display = "column {} has {} rows, expected {}", column, found, expected)]
    RaggedColumns {
        column: usize,
        expected: usize,
        found: usize,
    },

    #[fail(display = "pixel buffer holds {} pixels, a {}x{} grid needs {}", found, width, height, expected)]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        found: usize,
    },

    #[fail(display = "({}, {}) is more than one step outside a {}x{} grid", column, row, width, height)]
    OutOfBounds {
        column: i64,
        row: i64,
        width: u32,
        height: u32,
    },

    #[fail(display = "expected a {} seam, got a {} seam", expected, found)]
    OrientationMismatch {
        expected: Orientation,
        found: Orientation,
    },

    #[fail(display = "{} seam has {} entries, the grid needs {}", orientation, found, expected)]
    SeamLength {
        orientation: Orientation,
        expected: u32,
        found: usize,
    },

    #[fail(display = "{} seam entry {} is {}, which is not below {}", orientation, stage, position, limit)]
    SeamPosition {
        orientation: Orientation,
        stage: usize,
        position: u32,
        limit: u32,
    },

    #[fail(display = "{} seam jumps from {} to {} at stage {}", orientation, from, to, stage)]
    SeamDiscontinuity {
        orientation: Orientation,
        stage: usize,
        from: u32,
        to: u32,
    },

    #[fail(display = "cannot remove a {} seam from a grid only one pixel across", orientation)]
    LastLine { orientation: Orientation },

    #[fail(display = "cannot carve a {}x{} image up to {}x{}", width, height, new_width, new_height)]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },

    #[fail(display = "pixel channel value does not fit in an i32")]
    Channel,
}

/// Results from every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, SeamError>;
