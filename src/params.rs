// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Julia constant and the step used to nudge it.

use num::Complex;
use std::fmt;

/// Parameters read by a render pass.  Only the controller mutates
/// them, and never while a render is running.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FractalParameters {
    /// Real part of the Julia constant.
    pub cx: f64,
    /// Imaginary part of the Julia constant.
    pub cy: f64,
    /// How far a single keypress moves `cx` or `cy`.
    pub delta: f64,
}

/// What a key did to the parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum KeyEffect {
    /// The step was doubled or halved; the image is unchanged.
    Delta,
    /// The Julia constant moved; the image must be redrawn.
    Constant,
    /// Not a recognised key.
    Ignored,
}

impl Default for FractalParameters {
    fn default() -> Self {
        FractalParameters {
            cx: -0.76,
            cy: 0.2,
            delta: 0.02,
        }
    }
}

impl FractalParameters {
    /// The Julia constant as a complex number.
    pub fn constant(&self) -> Complex<f64> {
        Complex::new(self.cx, self.cy)
    }

    /// Applies one key command: `+` and `-` double and halve the step,
    /// `x`/`X` move `cx` down/up by the step, `y`/`Y` do the same for
    /// `cy`.
    pub fn apply(&mut self, key: char) -> KeyEffect {
        match key {
            '+' => self.delta *= 2.0,
            '-' => self.delta /= 2.0,
            'x' => self.cx -= self.delta,
            'X' => self.cx += self.delta,
            'y' => self.cy -= self.delta,
            'Y' => self.cy += self.delta,
            _ => return KeyEffect::Ignored,
        }
        match key {
            '+' | '-' => KeyEffect::Delta,
            _ => KeyEffect::Constant,
        }
    }
}

impl fmt::Display for FractalParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CX={}, CY={}, delta={}", self.cx, self.cy, self.delta)
    }
}
