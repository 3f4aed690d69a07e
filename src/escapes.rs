// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The first pass: find every seed pixel whose orbit leaves the
//! Mandelbrot set before the budget runs out.  Only those seeds
//! contribute to the Buddhabrot.

use itertools::iproduct;

use crate::errors::{allocate, BuddhaError};
use crate::orbit::Orbit;
use crate::planes::{Pixel, PlaneMapper};

/// One flag per cell: true if the orbit seeded there escapes.
#[derive(Debug)]
pub struct EscapeMask {
    width: usize,
    height: usize,
    escapes: Vec<bool>,
}

impl EscapeMask {
    /// Run `orbit` once for every pixel of `plane`, without a visitor.
    pub fn classify<O: Orbit + ?Sized>(
        plane: &PlaneMapper,
        orbit: &O,
    ) -> Result<EscapeMask, BuddhaError> {
        let mut escapes = allocate(plane.len(), false, "escape mask")?;
        let limit = orbit.limit();
        for (row, column) in iproduct!(0..plane.height(), 0..plane.width()) {
            let pixel = Pixel(column, row);
            let offset = plane.pixel_to_offset(&pixel);
            escapes[offset] = orbit.iterate(plane, &pixel, None) != limit;
        }
        Ok(EscapeMask {
            width: plane.width(),
            height: plane.height(),
            escapes,
        })
    }

    /// Does the orbit seeded at this pixel escape?
    pub fn escapes(&self, pixel: &Pixel) -> bool {
        self.escapes[pixel.1 * self.width + pixel.0]
    }

    /// Every escaping seed, in row-major order.
    pub fn seeds<'a>(&'a self) -> impl Iterator<Item = Pixel> + 'a {
        iproduct!(0..self.height, 0..self.width)
            .map(|(row, column)| Pixel(column, row))
            .filter(move |pixel| self.escapes(pixel))
    }

    /// The number of escaping seeds.
    pub fn count(&self) -> usize {
        self.escapes.iter().filter(|&&e| e).count()
    }

    /// Number of cells in the mask.
    pub fn len(&self) -> usize {
        self.escapes.len()
    }

    /// True for a zero-sized grid.
    pub fn is_empty(&self) -> bool {
        self.escapes.is_empty()
    }
}
