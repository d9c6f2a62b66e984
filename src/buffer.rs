// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid the renderer writes into.

use image::{Rgb, RgbImage};
use std::slice::ChunksMut;

use crate::color;

/// A fixed-size grid of packed `0x00RRGGBB` values, stored column by
/// column so that each column is one contiguous slice.  The size never
/// changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl PixelBuffer {
    /// An all-black buffer.
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            cells: vec![0 as u32; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The packed value at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of range", x, y);
        self.cells[x * self.height + y]
    }

    /// The color at column `x`, row `y`.
    pub fn rgb(&self, x: usize, y: usize) -> Rgb<u8> {
        color::unpack(self.get(x, y))
    }

    /// One mutable slice per column, in column order.  The slices are
    /// disjoint, so they may be handed to different threads.
    pub fn columns_mut(&mut self) -> ChunksMut<'_, u32> {
        // chunks_mut rejects a zero chunk size; an empty buffer has no
        // cells so any non-zero size yields no columns.
        self.cells.chunks_mut(self.height.max(1))
    }

    /// Copies the buffer into a row-major RGB image.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.rgb(x as usize, y as usize)
        })
    }
}
