// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time functions.
//!
//! Both functions iterate a quadratic recurrence for at most [`DEPTH`]
//! steps and report how early the orbit left the circle of radius 2.
//! The encoding is inverted relative to the usual iteration count: an
//! orbit that escapes on iteration `i` returns `DEPTH - i`, so fast
//! escapes produce large values and `0` is reserved for points that
//! never escaped at all.

use num::Complex;

/// The maximum number of iterations before a point is deemed to be
/// inside the set.
pub const DEPTH: u32 = 256;

/// Iterates `z <- z^2 + c` starting from `z = 0`, the column value
/// supplying the real part of `c` and the row value the imaginary part.
#[inline]
pub fn mandelbrot(c: Complex<f64>) -> u32 {
    let mut z = 0.0_f64;
    let mut zi = 0.0_f64;
    for i in 0..DEPTH {
        let zi_t = 2.0 * z * zi;
        let z_t = z * z - zi * zi;
        z = z_t + c.re;
        zi = zi_t + c.im;
        if z * z + zi * zi >= 4.0 {
            return DEPTH - i;
        }
    }
    0
}

/// Iterates the pixel's own point `z` under `z <- z^2 + k`, where `k`
/// is the fixed Julia constant rather than the pixel coordinate.
#[inline]
pub fn julia(z: Complex<f64>, k: Complex<f64>) -> u32 {
    let mut c = z.re;
    let mut ci = z.im;
    for i in 0..DEPTH {
        let tmp = c * c - ci * ci + k.re;
        ci = 2.0 * c * ci + k.im;
        c = tmp;
        if c * c + ci * ci >= 4.0 {
            return DEPTH - i;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(mandelbrot(Complex::new(0.0, 0.0)), 0);
    }

    #[test]
    fn known_interior_points_never_escape() {
        assert_eq!(mandelbrot(Complex::new(-1.0, 0.0)), 0);
        assert_eq!(mandelbrot(Complex::new(-0.1, 0.1)), 0);
        assert_eq!(mandelbrot(Complex::new(0.25, 0.0)), 0);
    }

    #[test]
    fn far_points_escape_immediately() {
        // |c|^2 >= 4 after the very first step.
        assert_eq!(mandelbrot(Complex::new(2.0, 0.0)), DEPTH);
        assert_eq!(mandelbrot(Complex::new(-2.0, -1.5)), DEPTH);
        assert_eq!(julia(Complex::new(2.0, 1.5), Complex::new(-0.76, 0.2)), DEPTH);
    }

    #[test]
    fn slow_escape_yields_small_values() {
        // c = 1 runs 0, 1, 2: |z|^2 reaches 4 on the second step.
        assert_eq!(mandelbrot(Complex::new(1.0, 0.0)), DEPTH - 1);
        let near_cusp = mandelbrot(Complex::new(0.26, 0.0));
        assert!(near_cusp > 0 && near_cusp < DEPTH - 10);
    }

    #[test]
    fn mandelbrot_is_mirror_symmetric() {
        for &(re, im) in &[(-0.75, 0.1), (0.3, 0.5), (-1.25, 0.02), (-0.1, 0.95), (0.37, 0.3)] {
            assert_eq!(
                mandelbrot(Complex::new(re, im)),
                mandelbrot(Complex::new(re, -im))
            );
        }
    }

    #[test]
    fn julia_with_zero_constant_is_the_unit_disc() {
        let k = Complex::new(0.0, 0.0);
        assert_eq!(julia(Complex::new(0.5, 0.5), k), 0);
        assert!(julia(Complex::new(1.1, 0.0), k) > 0);
    }

    #[test]
    fn julia_uses_the_constant_not_the_pixel() {
        let z = Complex::new(0.0, 0.0);
        assert_eq!(julia(z, Complex::new(0.0, 0.0)), 0);
        assert!(julia(z, Complex::new(1.0, 0.0)) > 0);
    }

    #[test]
    fn values_stay_in_range() {
        let k = Complex::new(-0.76, 0.2);
        for x in 0..40 {
            for y in 0..30 {
                let p = Complex::new(x as f64 / 10.0 - 2.0, y as f64 / 10.0 - 1.5);
                assert!(mandelbrot(p) <= DEPTH);
                assert!(julia(p, k) <= DEPTH);
            }
        }
    }
}
