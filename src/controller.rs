// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns input messages into parameter changes and re-renders.
//!
//! The controller is the only writer of the parameters and the buffer.
//! It handles one message at a time, so a parameter change always
//! happens before the render that reads it, and a render always
//! finishes before the surface is asked to repaint.

use log::info;

use crate::buffer::PixelBuffer;
use crate::errors::RenderError;
use crate::params::{FractalParameters, KeyEffect};
use crate::planes::{Pixel, PlaneMapper};
use crate::render::{FractalRenderer, Mode};
use crate::surface::Surface;

/// A discrete input event forwarded by the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    /// A key carrying `char` was released.
    KeyReleased(char),
    /// A mouse button was clicked over the image.
    MouseClicked {
        /// Column of the clicked image pixel.
        x: u32,
        /// Row of the clicked image pixel.
        y: u32,
        /// 1 for the primary button, 2 middle, 3 secondary.
        button: u16,
    },
    /// The window is closing.
    Close,
}

/// Whether the dispatch loop keeps going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Wait for the next input.
    Continue,
    /// Stop the loop.
    Exit,
}

/// Owns the image buffer, the parameters and the renderer.
pub struct Controller {
    renderer: FractalRenderer,
    buffer: PixelBuffer,
    params: FractalParameters,
    mode: Mode,
}

impl Controller {
    /// A controller drawing `mode` into a black `width` x `height`
    /// buffer with default parameters.  Nothing is rendered until
    /// [`Controller::start`].
    pub fn new(renderer: FractalRenderer, width: usize, height: usize, mode: Mode) -> Controller {
        Controller {
            renderer,
            buffer: PixelBuffer::new(width, height),
            params: FractalParameters::default(),
            mode,
        }
    }

    /// The initial render.
    pub fn start(&mut self) -> Result<(), RenderError> {
        self.renderer.render(&mut self.buffer, self.mode, &self.params)
    }

    /// The most recently completed image.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The current parameters.
    pub fn params(&self) -> &FractalParameters {
        &self.params
    }

    /// The mode of the image currently in the buffer.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Handles one input.  Moving the Julia constant re-renders the
    /// Julia set, whatever mode the program started in, and then asks
    /// the surface to repaint.
    pub fn handle<S: Surface>(&mut self, input: Input, surface: &mut S) -> Result<Flow, RenderError> {
        match input {
            Input::Close => return Ok(Flow::Exit),
            Input::MouseClicked { x, y, button } => self.log_click(x, y, button),
            Input::KeyReleased(key) => {
                let effect = self.params.apply(key);
                info!("key released {:?}: {}", key, self.params);
                if effect == KeyEffect::Constant {
                    self.mode = Mode::Julia;
                    self.renderer
                        .render(&mut self.buffer, self.mode, &self.params)?;
                    surface.request_repaint();
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn log_click(&self, x: u32, y: u32, button: u16) {
        match PlaneMapper::standard(self.buffer.width(), self.buffer.height()) {
            Ok(plane) => {
                let point = plane.pixel_to_point(&Pixel(x as usize, y as usize));
                info!("x={}, y={}, button={} at {}", x, y, button, point);
            }
            Err(_) => info!("x={}, y={}, button={}", x, y, button),
        }
    }
}

/// Feeds `inputs` to the controller one at a time, stopping at the
/// first input that ends the loop.
pub fn run<I, S>(controller: &mut Controller, inputs: I, surface: &mut S) -> Result<Flow, RenderError>
where
    I: IntoIterator<Item = Input>,
    S: Surface,
{
    for input in inputs {
        if controller.handle(input, surface)? == Flow::Exit {
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        repaints: usize,
    }

    impl Surface for CountingSurface {
        fn request_repaint(&mut self) {
            self.repaints += 1;
        }
    }

    fn controller(mode: Mode) -> Controller {
        let mut controller = Controller::new(FractalRenderer::new(2), 80, 60, mode);
        controller.start().unwrap();
        controller
    }

    #[test]
    fn delta_keys_do_not_repaint() {
        let mut c = controller(Mode::Julia);
        let mut surface = CountingSurface::default();
        let before = c.buffer().clone();
        let flow = run(
            &mut c,
            vec![Input::KeyReleased('+'), Input::KeyReleased('-'), Input::KeyReleased('q')],
            &mut surface,
        )
        .unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(surface.repaints, 0);
        assert_eq!(c.buffer(), &before);
    }

    #[test]
    fn constant_keys_rerender_and_repaint() {
        let mut c = controller(Mode::Julia);
        let mut surface = CountingSurface::default();
        let before = c.buffer().clone();
        run(
            &mut c,
            vec![Input::KeyReleased('+'), Input::KeyReleased('X')],
            &mut surface,
        )
        .unwrap();
        assert_eq!(surface.repaints, 1);
        assert!((c.params().delta - 0.04).abs() < 1e-12);
        assert!((c.params().cx - -0.72).abs() < 1e-12);
        assert_ne!(c.buffer(), &before);
    }

    #[test]
    fn each_axis_key_repaints() {
        let mut c = controller(Mode::Julia);
        let mut surface = CountingSurface::default();
        let keys = "xXyY".chars().map(Input::KeyReleased);
        run(&mut c, keys, &mut surface).unwrap();
        assert_eq!(surface.repaints, 4);
        let defaults = FractalParameters::default();
        assert!((c.params().cx - defaults.cx).abs() < 1e-12);
        assert!((c.params().cy - defaults.cy).abs() < 1e-12);
    }

    #[test]
    fn constant_keys_switch_to_julia() {
        let mut c = controller(Mode::Mandelbrot);
        let mut surface = CountingSurface::default();
        c.handle(Input::KeyReleased('y'), &mut surface).unwrap();
        assert_eq!(c.mode(), Mode::Julia);

        let mut expected = PixelBuffer::new(80, 60);
        FractalRenderer::new(1)
            .render_single(&mut expected, Mode::Julia, c.params())
            .unwrap();
        assert_eq!(c.buffer(), &expected);
    }

    #[test]
    fn close_stops_the_loop() {
        let mut c = controller(Mode::Julia);
        let mut surface = CountingSurface::default();
        let flow = run(
            &mut c,
            vec![Input::Close, Input::KeyReleased('X')],
            &mut surface,
        )
        .unwrap();
        assert_eq!(flow, Flow::Exit);
        assert_eq!(surface.repaints, 0);
        assert_eq!(c.params(), &FractalParameters::default());
    }

    #[test]
    fn clicks_leave_the_image_alone() {
        let mut c = controller(Mode::Colors);
        let mut surface = CountingSurface::default();
        let before = c.buffer().clone();
        let flow = c
            .handle(Input::MouseClicked { x: 10, y: 20, button: 1 }, &mut surface)
            .unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(surface.repaints, 0);
        assert_eq!(c.buffer(), &before);
        assert_eq!(c.mode(), Mode::Colors);
    }
}
