// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The display side of the program: whatever owns the window.

use image::imageops::{self, FilterType};

use crate::buffer::PixelBuffer;

/// Something that shows the rendered buffer.  The controller only asks
/// it to repaint; the surface decides when to read the buffer, and it
/// only ever does so between renders.
pub trait Surface {
    /// Schedules a repaint from the controller's buffer.
    fn request_repaint(&mut self);
}

/// Scales `buffer` to `width` x `height` and writes it into `frame` as
/// RGBA bytes with opaque alpha.  The whole image always fills the
/// frame, whatever the window size.
///
/// # Panics
///
/// Panics if `frame` is not exactly `width * height * 4` bytes.
pub fn blit(buffer: &PixelBuffer, width: u32, height: u32, frame: &mut [u8]) {
    assert_eq!(frame.len(), (width as usize) * (height as usize) * 4);
    let image = buffer.to_rgb_image();
    let scaled = if image.dimensions() == (width, height) {
        image
    } else {
        imageops::resize(&image, width, height, FilterType::Nearest)
    };
    for (dst, src) in frame.chunks_exact_mut(4).zip(scaled.pixels()) {
        dst[..3].copy_from_slice(&src.0);
        dst[3] = 0xff;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(2, 2);
        {
            let mut columns = buffer.columns_mut();
            let left = columns.next().unwrap();
            left[0] = 0x00ff_0000;
            left[1] = 0x0000_ff00;
            let right = columns.next().unwrap();
            right[0] = 0x0000_00ff;
            right[1] = 0x00ff_ffff;
        }
        buffer
    }

    #[test]
    fn same_size_copies_with_alpha() {
        let mut frame = vec![0u8; 2 * 2 * 4];
        blit(&two_by_two(), 2, 2, &mut frame);
        assert_eq!(
            frame,
            vec![255, 0, 0, 255, 0, 0, 255, 255, 0, 255, 0, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn larger_frames_repeat_pixels() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        blit(&two_by_two(), 4, 4, &mut frame);
        let at = |x: usize, y: usize| {
            let i = (y * 4 + x) * 4;
            [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
        };
        assert_eq!(at(0, 0), [255, 0, 0, 255]);
        assert_eq!(at(1, 1), [255, 0, 0, 255]);
        assert_eq!(at(3, 0), [0, 0, 255, 255]);
        assert_eq!(at(0, 3), [0, 255, 0, 255]);
        assert_eq!(at(3, 3), [255, 255, 255, 255]);
    }

    #[test]
    #[should_panic]
    fn wrong_frame_size_panics() {
        let mut frame = vec![0u8; 3];
        blit(&two_by_two(), 2, 2, &mut frame);
    }
}
