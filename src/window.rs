// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The window: owns the event loop, translates window events into
//! controller inputs and paints the controller's buffer.

use failure::format_err;
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use std::collections::HashMap;
use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use juliabrot::controller::{Controller, Flow, Input};
use juliabrot::surface::{blit, Surface};

const TITLE: &str = "Fractal Bitmap Demo";

struct WindowSurface<'a> {
    window: &'a Window,
}

impl<'a> Surface for WindowSurface<'a> {
    fn request_repaint(&mut self) {
        debug!("repaint requested");
        self.window.request_redraw();
    }
}

/// Keeps just enough state to turn raw window events into inputs:
/// the cursor position, and which character each held key produced so
/// that it can be reported when the key comes back up.
struct Translator {
    cursor: PhysicalPosition<f64>,
    size: PhysicalSize<u32>,
    image: (usize, usize),
    last_pressed: Option<u32>,
    held: HashMap<u32, char>,
}

impl Translator {
    fn new(size: PhysicalSize<u32>, image: (usize, usize)) -> Translator {
        Translator {
            cursor: PhysicalPosition::new(0.0, 0.0),
            size,
            image,
            last_pressed: None,
            held: HashMap::new(),
        }
    }

    fn key(&mut self, scancode: u32, state: ElementState) -> Option<Input> {
        match state {
            ElementState::Pressed => {
                self.last_pressed = Some(scancode);
                None
            }
            ElementState::Released => match self.held.remove(&scancode) {
                Some(c) => Some(Input::KeyReleased(c)),
                None => {
                    debug!("key released scancode={} without a character", scancode);
                    None
                }
            },
        }
    }

    fn character(&mut self, c: char) {
        if let Some(scancode) = self.last_pressed.take() {
            self.held.insert(scancode, c);
        }
    }

    /// Maps the cursor from window pixels to image pixels; the image is
    /// stretched over the whole window.
    fn click(&self, button: MouseButton) -> Input {
        let scale = |pos: f64, window: u32, image: usize| -> u32 {
            let pixel = pos / f64::from(window.max(1)) * image as f64;
            pixel.max(0.0).min((image.max(1) - 1) as f64) as u32
        };
        Input::MouseClicked {
            x: scale(self.cursor.x, self.size.width, self.image.0),
            y: scale(self.cursor.y, self.size.height, self.image.1),
            button: match button {
                MouseButton::Left => 1,
                MouseButton::Middle => 2,
                MouseButton::Right => 3,
                MouseButton::Other(n) => n,
            },
        }
    }
}

/// Opens the window and runs the event loop until the window closes.
pub fn show(mut controller: Controller) -> Result<(), failure::Error> {
    let (width, height) = (controller.buffer().width(), controller.buffer().height());
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(width as f64, height as f64))
        .with_position(LogicalPosition::new(50.0, 50.0))
        .with_resizable(true)
        .build(&event_loop)
        .map_err(|e| format_err!("cannot open window: {}", e))?;

    let size = window.inner_size();
    let mut pixels = {
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        Pixels::new(size.width, size.height, surface_texture)
            .map_err(|e| format_err!("cannot create pixel surface: {}", e))?
    };

    let mut translator = Translator::new(size, (width, height));
    let mut pending: Vec<Input> = Vec::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => pending.push(Input::Close),
                WindowEvent::KeyboardInput { input, .. } => {
                    if let Some(input) = translator.key(input.scancode, input.state) {
                        pending.push(input);
                    }
                }
                WindowEvent::ReceivedCharacter(c) => translator.character(c),
                WindowEvent::CursorMoved { position, .. } => translator.cursor = position,
                WindowEvent::MouseInput {
                    state: ElementState::Released,
                    button,
                    ..
                } => pending.push(translator.click(button)),
                WindowEvent::Resized(new_size) => {
                    if new_size.width == 0 || new_size.height == 0 {
                        return;
                    }
                    info!("resized to {}x{}", new_size.width, new_size.height);
                    if let Err(e) = pixels.resize_surface(new_size.width, new_size.height) {
                        error!("resize surface failed: {}", e);
                    }
                    match pixels.resize_buffer(new_size.width, new_size.height) {
                        Ok(()) => translator.size = new_size,
                        Err(e) => error!("resize buffer failed: {}", e),
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if pending.is_empty() {
                    return;
                }
                let mut surface = WindowSurface { window: &window };
                match juliabrot::controller::run(&mut controller, pending.drain(..), &mut surface) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => *control_flow = ControlFlow::Exit,
                    Err(e) => {
                        error!("render failed: {}", e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            Event::RedrawRequested(_) => {
                let PhysicalSize { width, height } = translator.size;
                debug!("paint {}x{}", width, height);
                blit(controller.buffer(), width, height, pixels.frame_mut());
                if let Err(e) = pixels.render() {
                    error!("pixels.render() failed: {}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
