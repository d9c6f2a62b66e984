// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners of the
//! complex plane.
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

impl ComplexPlane {
    /// The region every mode is drawn over: real axis [-2, 2],
    /// imaginary axis [-1.5, 1.5].
    pub fn standard() -> ComplexPlane {
        ComplexPlane(Complex::new(-2.0, -1.5), Complex::new(2.0, 1.5))
    }

    /// Horizontal and vertical extent of the region.
    pub fn span(&self) -> (f64, f64) {
        (self.1.re - self.0.re, self.1.im - self.0.im)
    }
}

/// Describes the x, y of a pixel in a region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps points from one to the other.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    span: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and two
    /// points describing the complex plane.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, String> {
        if rightupper.re < leftlower.re {
            return Err(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            );
        }

        if rightupper.im < leftlower.im {
            return Err(
                "The left lower corner is not lower than the right upper corner".to_string(),
            );
        }

        if width == 0 || height == 0 {
            return Err(format!("The integral plane {}x{} is empty", width, height));
        }

        let complex_plane = ComplexPlane(leftlower, rightupper);
        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane,
            span: complex_plane.span(),
        })
    }

    /// Maps a pixel grid of any size onto the standard region, so a
    /// larger or smaller window still covers the same part of the plane.
    pub fn standard(width: usize, height: usize) -> Result<PlaneMapper, String> {
        let ComplexPlane(leftlower, rightupper) = ComplexPlane::standard();
        PlaneMapper::new(width, height, leftlower, rightupper)
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// The real coordinate of a pixel column.  The operation order
    /// (divide, scale, shift) is fixed so that the 800 pixel wide
    /// reference grid produces exactly `x / 800 * 4 - 2`.
    #[inline]
    pub fn column_to_re(&self, column: usize) -> f64 {
        (column as f64) / (self.integral_plane.0 as f64) * self.span.0 + self.complex_plane.0.re
    }

    /// The imaginary coordinate of a pixel row.
    #[inline]
    pub fn row_to_im(&self, row: usize) -> f64 {
        (row as f64) / (self.integral_plane.1 as f64) * self.span.1 + self.complex_plane.0.im
    }

    /// Given a pixel on the integral cartesian plane, map that to the
    /// matching point on the complex cartesian plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(self.column_to_re(pixel.0), self.row_to_im(pixel.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_empty_grid() {
        assert!(PlaneMapper::standard(0, 600).is_err());
        assert!(PlaneMapper::standard(800, 0).is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
    }

    #[test]
    fn reference_grid_matches_fixed_formula() {
        let pm = PlaneMapper::standard(800, 600).unwrap();
        for x in &[0usize, 1, 199, 400, 555, 799] {
            assert_eq!(pm.column_to_re(*x), (*x as f64) / 800.0 * 4.0 - 2.0);
        }
        for y in &[0usize, 1, 150, 300, 451, 599] {
            assert_eq!(pm.row_to_im(*y), (*y as f64) / 600.0 * 3.0 - 1.5);
        }
    }

    #[test]
    fn centre_pixel_is_origin() {
        let pm = PlaneMapper::standard(800, 600).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(400, 300)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -1.5));
    }

    #[test]
    fn other_sizes_cover_the_same_region() {
        let small = PlaneMapper::standard(80, 60).unwrap();
        let large = PlaneMapper::standard(1600, 1200).unwrap();
        assert_eq!(small.pixel_to_point(&Pixel(40, 30)), Complex::new(0.0, 0.0));
        assert_eq!(large.pixel_to_point(&Pixel(800, 600)), Complex::new(0.0, 0.0));
        assert_eq!(large.pixel_to_point(&Pixel(0, 0)), small.pixel_to_point(&Pixel(0, 0)));
    }

    #[test]
    fn len_counts_every_pixel() {
        let pm = PlaneMapper::standard(8, 6).unwrap();
        assert_eq!(pm.len(), 48);
    }
}
