// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and the fixed window of the complex plane in which the whole
//! Buddhabrot lives: real parts from -2 to 1, imaginary parts from -1
//! to 1.
use num::Complex;

/// The left edge of the complex window.
pub const RE_MIN: f64 = -2.0;
/// The width of the complex window along the real axis.
pub const RE_SPAN: f64 = 3.0;
/// The bottom edge of the complex window.
pub const IM_MIN: f64 = -1.0;
/// The height of the complex window along the imaginary axis.
pub const IM_SPAN: f64 = 2.0;

/// Describes the x, y of a cell in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel(pub usize, pub usize);

/// Maps points between a W×H integral plane and the complex window.
/// Going from pixels to points is exact; coming back truncates toward
/// zero, and may land well outside the grid for orbits that have
/// wandered away.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
}

impl PlaneMapper {
    /// Constructor.  The integral plane is assumed to start at 0,0.
    pub fn new(width: usize, height: usize) -> PlaneMapper {
        PlaneMapper { width, height }
    }

    /// Width of the integral plane.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the integral plane.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Given a pixel on the integral cartesian plane, map it to the
    /// corresponding point on the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            (RE_SPAN / (self.width as f64) * (pixel.0 as f64)) + RE_MIN,
            (IM_SPAN / (self.height as f64) * (pixel.1 as f64)) + IM_MIN,
        )
    }

    /// Given a complex number, map that as closely as possible to a
    /// point on the integral cartesian plane.  The result is signed
    /// because nothing stops the point from lying outside the window.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> (i64, i64) {
        let left = (point.re - RE_MIN) * (self.width as f64) / RE_SPAN;
        let top = (point.im - IM_MIN) * (self.height as f64) / IM_SPAN;
        (left as i64, top as i64)
    }

    /// Since the Buddhabrot tracks the progress of a complex number as
    /// it orbits, we have to map those complex numbers back to the
    /// pixel plane, and then increment those points on the pixel plane
    /// as the orbit passes through them.  This function takes a point,
    /// maps it to pixel coordinates, then returns the linear offset
    /// from the root of the image buffer in memory, or None if the
    /// pixel is not on the grid.
    pub fn point_to_offset(&self, point: &Complex<f64>) -> Option<usize> {
        let (left, top) = self.point_to_pixel(point);
        if left < 0 || top < 0 || left >= self.width as i64 || top >= self.height as i64 {
            return None;
        }
        Some((top as usize) * self.width + (left as usize))
    }

    /// The linear offset of a pixel known to be on the grid.
    pub fn pixel_to_offset(&self, pixel: &Pixel) -> usize {
        pixel.1 * self.width + pixel.0
    }
}
