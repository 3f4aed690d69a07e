// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The second pass, and the one that actually draws the Buddhabrot.
//! Every escaping seed is run again, and each point its orbit passes
//! through is mapped back onto the grid and counted.

use crate::errors::{allocate, BuddhaError};
use crate::escapes::EscapeMask;
use crate::orbit::Orbit;
use crate::planes::PlaneMapper;
use num::Complex;

/// How often each cell was visited by an escaping orbit.
#[derive(Debug, Clone)]
pub struct CountGrid {
    width: usize,
    height: usize,
    counts: Vec<u32>,
    max: u32,
    discarded: u64,
}

impl CountGrid {
    /// An empty grid the size of the plane.
    pub fn new(plane: &PlaneMapper) -> Result<CountGrid, BuddhaError> {
        Ok(CountGrid {
            width: plane.width(),
            height: plane.height(),
            counts: allocate(plane.len(), 0, "count grid")?,
            max: 0,
            discarded: 0,
        })
    }

    /// Build a grid directly from counts, mostly useful for exercising
    /// the statistics and coloring on hand-made data.
    pub fn from_counts(
        width: usize,
        height: usize,
        counts: Vec<u32>,
    ) -> Result<CountGrid, BuddhaError> {
        if width.checked_mul(height) != Some(counts.len()) {
            return Err(BuddhaError::InvalidConfig(format!(
                "{} counts do not fill a {}x{} grid",
                counts.len(),
                width,
                height
            )));
        }
        let max = counts.iter().cloned().max().unwrap_or(0);
        Ok(CountGrid {
            width,
            height,
            counts,
            max,
            discarded: 0,
        })
    }

    /// Re-run the orbit of every escaping seed in `mask`, counting the
    /// cells its points land on.  Points that fall off the grid are
    /// dropped.
    pub fn accumulate<O: Orbit + ?Sized>(
        &mut self,
        plane: &PlaneMapper,
        orbit: &O,
        mask: &EscapeMask,
    ) {
        for seed in mask.seeds() {
            let counts = &mut self.counts;
            let max = &mut self.max;
            let discarded = &mut self.discarded;
            let mut visit = |z: Complex<f64>| match plane.point_to_offset(&z) {
                Some(offset) => {
                    let count = counts[offset].saturating_add(1);
                    counts[offset] = count;
                    if count > *max {
                        *max = count;
                    }
                }
                None => *discarded += 1,
            };
            orbit.iterate(plane, &seed, Some(&mut visit));
        }
    }

    /// The largest count anywhere on the grid.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// The raw counts, row-major.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of orbit points that landed outside the grid.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }
}
