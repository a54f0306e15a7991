// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A plain RGB pixel
//!
//! Three independent signed channels.  They are conventionally in
//! 0..=255, but nothing here clamps or validates them; arithmetic on
//! out-of-range values just carries through.  The only place values
//! are squeezed back into a byte is on the way out to an `image`
//! buffer.

use crate::error::{Result, SeamError};
use image::{Primitive, Rgb};
use num_traits::NumCast;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Pixel {
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Pixel { red, green, blue }
    }

    pub fn channels(&self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }

    /// Convert any pixel the `image` crate understands.  Grey, alpha
    /// and wider subpixel types all go through `to_rgb` first; alpha is
    /// dropped.
    pub fn from_image_pixel<P, S>(pixel: &P) -> Result<Self>
    where
        P: image::Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let channel = |c: S| <i32 as NumCast>::from(c).ok_or(SeamError::Channel);
        let [red, green, blue] = pixel.to_rgb().0;
        Ok(Pixel::new(channel(red)?, channel(green)?, channel(blue)?))
    }

    /// Clamp each channel into a byte.
    pub fn to_rgb8(&self) -> Rgb<u8> {
        let clamp = |c: i32| c.max(0).min(255) as u8;
        Rgb([clamp(self.red), clamp(self.green), clamp(self.blue)])
    }
}

impl From<[i32; 3]> for Pixel {
    fn from([red, green, blue]: [i32; 3]) -> Self {
        Pixel::new(red, green, blue)
    }
}
