#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot and Julia bitmap renderer
//!
//! Every pixel of an image is mapped to a point on the complex plane
//! and a quadratic recurrence is iterated from it until the orbit
//! leaves the circle of radius two, or until [`escape::DEPTH`]
//! iterations have passed.  How quickly the orbit escaped picks the
//! pixel's hue; points that never escape are black.
//!
//! The Mandelbrot set iterates `z^2 + c` from zero with `c` taken from
//! the pixel.  The Julia set iterates the same map starting at the
//! pixel, with `c` fixed to a constant that the user nudges from the
//! keyboard.  Each new constant gives a different member of the Julia
//! family.
//!
//! Rendering fans columns out to a pool of worker threads and joins
//! them before returning.  A [`controller::Controller`] owns the image
//! and the parameters and reacts to input one message at a time, so no
//! render ever races a parameter change or a repaint.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate log;
extern crate num;

pub mod buffer;
pub mod color;
pub mod controller;
pub mod errors;
pub mod escape;
pub mod params;
pub mod planes;
pub mod render;
pub mod surface;
pub mod version;

pub use buffer::PixelBuffer;
pub use controller::{Controller, Flow, Input};
pub use errors::RenderError;
pub use params::FractalParameters;
pub use render::{FractalRenderer, Mode};
pub use surface::Surface;
