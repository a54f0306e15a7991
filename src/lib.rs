// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving over RGB pixel grids.
//!
//! Build a [`PixelGrid`], ask a [`SeamFinder`] for the cheapest seam,
//! hand the seam to [`remove_seam`], and repeat; or let a
//! [`SeamCarver`] do the repeating.

mod ternary;

pub mod cumulative;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod pixel;
pub mod pixelgrid;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use cumulative::{find_seam, GradientSeamFinder};
pub use energy::{calculate_energy, pixel_energy};
pub use error::{Result, SeamError};
pub use pixel::Pixel;
pub use pixelgrid::PixelGrid;
pub use seam::{Orientation, Seam};
pub use seamcarver::{remove_horizontal_seam, remove_seam, remove_vertical_seam, Carve, SeamCarver};
pub use seamfinder::SeamFinder;
