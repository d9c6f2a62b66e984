// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The fractal renderer.
//!
//! A render fills every pixel of a [`PixelBuffer`] from its mapped
//! point on the complex plane.  Columns are independent: each one is a
//! disjoint slice of the buffer, and a pool of scoped worker threads
//! pulls column indices off a shared iterator until it runs dry.  The
//! render returns once every worker has joined, so the caller never
//! sees a half-written buffer.

use image::Rgb;
use log::{debug, info};
use num::Complex;
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::Mutex;
use std::time::Instant;

use crate::buffer::PixelBuffer;
use crate::color::{escape_color, gradient, pack};
use crate::errors::RenderError;
use crate::escape::{julia, mandelbrot};
use crate::params::FractalParameters;
use crate::planes::PlaneMapper;

type ColumnQueue<'a> = Mutex<Enumerate<ChunksMut<'a, u32>>>;

/// Which image to draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The Julia set of the current constant.
    Julia,
    /// The Mandelbrot set.
    Mandelbrot,
    /// A red/green diagnostic gradient.
    Colors,
}

impl Mode {
    /// Every mode, in the order they are offered on the command line.
    pub const ALL: [Mode; 3] = [Mode::Julia, Mode::Mandelbrot, Mode::Colors];

    /// Long name, also used as the command line argument name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Julia => "julia",
            Mode::Mandelbrot => "mandelbrot",
            Mode::Colors => "colors",
        }
    }

    /// The single-letter flag selecting this mode.
    pub fn short(self) -> &'static str {
        match self {
            Mode::Julia => "j",
            Mode::Mandelbrot => "m",
            Mode::Colors => "c",
        }
    }
}

/// Renders images with a fixed number of worker threads.  The renderer
/// holds no image state; every render is a pure function of the buffer
/// size, the mode and the parameters.
#[derive(Debug, Clone)]
pub struct FractalRenderer {
    threads: usize,
}

impl FractalRenderer {
    /// A renderer using `threads` workers; zero is treated as one.
    pub fn new(threads: usize) -> FractalRenderer {
        FractalRenderer {
            threads: threads.max(1),
        }
    }

    /// The number of workers each render spawns.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Fills `buffer` using the worker pool, blocking until every column
    /// is written.
    pub fn render(
        &self,
        buffer: &mut PixelBuffer,
        mode: Mode,
        params: &FractalParameters,
    ) -> Result<(), RenderError> {
        let plane = plane_for(buffer)?;
        let constant = params.constant();
        let started = Instant::now();

        let columns: ColumnQueue = Mutex::new(buffer.columns_mut().enumerate());
        crossbeam::scope(|spawner| {
            for worker in 0..self.threads {
                let columns = &columns;
                let plane = &plane;
                spawner.spawn(move |_| {
                    let mut rendered = 0;
                    loop {
                        let next = match columns.lock() {
                            Ok(mut queue) => queue.next(),
                            Err(_) => break,
                        };
                        match next {
                            Some((x, column)) => {
                                fill_column(plane, mode, constant, x, column);
                                rendered += 1;
                            }
                            None => break,
                        }
                    }
                    debug!("worker {} rendered {} columns", worker, rendered);
                });
            }
        })
        .map_err(|_| RenderError::WorkerPanicked)?;

        info!(
            "{} {}x{} done in {}ms",
            mode.name(),
            plane.integral_plane.0,
            plane.integral_plane.1,
            started.elapsed().as_millis()
        );
        Ok(())
    }

    /// Fills `buffer` on the calling thread.  Produces exactly the same
    /// pixels as [`FractalRenderer::render`].
    pub fn render_single(
        &self,
        buffer: &mut PixelBuffer,
        mode: Mode,
        params: &FractalParameters,
    ) -> Result<(), RenderError> {
        let plane = plane_for(buffer)?;
        let constant = params.constant();
        for (x, column) in buffer.columns_mut().enumerate() {
            fill_column(&plane, mode, constant, x, column);
        }
        Ok(())
    }
}

fn plane_for(buffer: &PixelBuffer) -> Result<PlaneMapper, RenderError> {
    let (width, height) = (buffer.width(), buffer.height());
    let plane = PlaneMapper::standard(width, height)
        .map_err(|_| RenderError::EmptyBuffer(width, height))?;
    debug!("mapping {} pixels onto {:?}", plane.len(), plane.complex_plane);
    Ok(plane)
}

fn fill_column(
    plane: &PlaneMapper,
    mode: Mode,
    constant: Complex<f64>,
    x: usize,
    column: &mut [u32],
) {
    let re = plane.column_to_re(x);
    for (y, cell) in column.iter_mut().enumerate() {
        *cell = pack(pixel_color(plane, mode, constant, re, x, y));
    }
}

#[inline]
fn pixel_color(
    plane: &PlaneMapper,
    mode: Mode,
    constant: Complex<f64>,
    re: f64,
    x: usize,
    y: usize,
) -> Rgb<u8> {
    match mode {
        Mode::Mandelbrot => escape_color(mandelbrot(Complex::new(re, plane.row_to_im(y)))),
        Mode::Julia => escape_color(julia(Complex::new(re, plane.row_to_im(y)), constant)),
        Mode::Colors => gradient(x, y, plane.integral_plane.0, plane.integral_plane.1),
    }
}
