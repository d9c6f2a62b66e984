// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps escape values and pixel positions to colors.
//!
//! Escape values are colored through HSB with the hue taken as the
//! ratio `DEPTH / n`.  Points close to the boundary escape slowly, get
//! a small `n`, and so a hue that wraps around the color wheel many
//! times; the resulting banding is part of the look of the image.

use image::Rgb;

use crate::escape::DEPTH;

/// Converts hue, saturation and brightness to RGB.  Only the fractional
/// part of `hue` is significant.  All arithmetic is single precision
/// and each channel is rounded with `x * 255 + 0.5` truncation.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Rgb<u8> {
    let channel = |v: f32| (v * 255.0 + 0.5) as u8;

    if saturation == 0.0 {
        let v = channel(brightness);
        return Rgb([v, v, v]);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - (saturation * (1.0 - f)));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    Rgb([channel(r), channel(g), channel(b)])
}

/// The color of an escape value: black for points that never escaped,
/// otherwise a fully saturated, fully bright hue of `DEPTH / n`.
pub fn escape_color(n: u32) -> Rgb<u8> {
    if n == 0 {
        return Rgb([0, 0, 0]);
    }
    hsb_to_rgb(DEPTH as f32 / n as f32, 1.0, 1.0)
}

/// The diagnostic gradient: red follows the column, green follows the
/// row, blue is always zero.
pub fn gradient(x: usize, y: usize, width: usize, height: usize) -> Rgb<u8> {
    let r = ((x as f64) / (width as f64) * 256.0) as u8;
    let g = ((y as f64) / (height as f64) * 256.0) as u8;
    Rgb([r, g, 0])
}

/// Packs a color as `0x00RRGGBB`.
#[inline]
pub fn pack(rgb: Rgb<u8>) -> u32 {
    let Rgb([r, g, b]) = rgb;
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Unpacks a `0x00RRGGBB` value; the top byte is ignored.
#[inline]
pub fn unpack(packed: u32) -> Rgb<u8> {
    Rgb([(packed >> 16) as u8, (packed >> 8) as u8, packed as u8])
}
