// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Statistics over the finished count grid.  The counts of a
//! Buddhabrot are wildly skewed: nearly every visited cell is visited
//! a handful of times, and a few cells along the main cardioid are
//! visited thousands of times.  Coloring by raw count wastes the
//! palette, so we look at how the counts are distributed first.

use std::fmt;
use std::str::FromStr;

use crate::density::CountGrid;
use crate::errors::{allocate, BuddhaError};

/// Number of percentile cutoffs: the 10th, 20th, ... 100th.
pub const PERCENTILES: usize = 10;

/// Number of rows in the max-relative histogram of the report.
pub const RANGES: usize = 20;

/// How the mean count is computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeanMode {
    /// Integer division of the sum by the number of visited cells.
    Truncated,
    /// Floating point division.
    Exact,
}

impl Default for MeanMode {
    fn default() -> Self {
        MeanMode::Truncated
    }
}

impl FromStr for MeanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncated" => Ok(MeanMode::Truncated),
            "exact" => Ok(MeanMode::Exact),
            _ => Err(format!("Unknown mean mode '{}'", s)),
        }
    }
}

/// The mean count over visited cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mean {
    /// Truncated toward zero.
    Truncated(u64),
    /// Unrounded.
    Exact(f64),
}

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Mean::Truncated(m) => write!(f, "{}", m),
            Mean::Exact(m) => write!(f, "{:.3}", m),
        }
    }
}

/// The distribution of counts over the visited (nonzero) cells of a
/// count grid.
#[derive(Debug, Clone)]
pub struct Statistics {
    width: usize,
    height: usize,
    max: u32,
    nonzero: u64,
    sum: u64,
    mean: Mean,
    histogram: Vec<u64>,
    percentiles: [u32; PERCENTILES],
}

impl Statistics {
    /// Scan the grid once for the sum, the number of visited cells, and
    /// the frequency of each count; then walk the frequencies for the
    /// percentile cutoffs.  A grid nobody visited has no distribution
    /// and is reported as such.
    pub fn compute(grid: &CountGrid, mode: MeanMode) -> Result<Statistics, BuddhaError> {
        let max = grid.max();
        let mut histogram = allocate(max as usize + 1, 0u64, "frequency table")?;
        let (mut sum, mut nonzero) = (0u64, 0u64);
        for &count in grid.counts().iter().filter(|&&c| c != 0) {
            sum += u64::from(count);
            nonzero += 1;
            histogram[count as usize] += 1;
        }
        if nonzero == 0 {
            return Err(BuddhaError::DegenerateDistribution);
        }

        let mean = match mode {
            MeanMode::Truncated => Mean::Truncated(sum / nonzero),
            MeanMode::Exact => Mean::Exact(sum as f64 / nonzero as f64),
        };
        let percentiles = percentiles(&histogram, nonzero, max);

        Ok(Statistics {
            width: grid.width(),
            height: grid.height(),
            max,
            nonzero,
            sum,
            mean,
            histogram,
            percentiles,
        })
    }

    /// The largest count.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// How many cells were visited at least once.
    pub fn nonzero(&self) -> u64 {
        self.nonzero
    }

    /// The total of all counts.
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// The mean count over visited cells.
    pub fn mean(&self) -> Mean {
        self.mean
    }

    /// Number of cells holding each count, indexed by count, from 0 to
    /// `max` inclusive.  Slot 0 is always empty.
    pub fn histogram(&self) -> &[u64] {
        &self.histogram
    }

    /// The count at each tenth of the distribution.  The last is always
    /// `max`.
    pub fn percentiles(&self) -> &[u32; PERCENTILES] {
        &self.percentiles
    }

    /// Cells per twentieth of `max`.  Bucket `j` holds counts in
    /// `[max·j/20, max·(j+1)/20)`; a count of exactly `max` goes in the
    /// last bucket.
    pub fn ranges(&self) -> [u64; RANGES] {
        let mut ranges = [0u64; RANGES];
        let twentieth = f64::from(self.max) / RANGES as f64;
        for (count, &cells) in self.histogram.iter().enumerate().skip(1) {
            let c = count as f64;
            let bucket = (1..=RANGES)
                .find(|&j| c < twentieth * j as f64)
                .unwrap_or(RANGES);
            ranges[bucket - 1] += cells;
        }
        ranges
    }

    /// A printable summary of the run.
    pub fn report(&self, iterations: usize) -> Report {
        Report {
            stats: self,
            iterations,
        }
    }
}

/// Walk the frequency table, recording the count at which the running
/// total first passes each tenth of the visited cells.
fn percentiles(histogram: &[u64], nonzero: u64, max: u32) -> [u32; PERCENTILES] {
    let mut limits = [max; PERCENTILES];
    let step = nonzero as f64 / PERCENTILES as f64;
    let mut cumulative = 0u64;
    let mut next = 0;
    for (count, &cells) in histogram.iter().enumerate().skip(1) {
        cumulative += cells;
        while next < PERCENTILES && cumulative as f64 > step * (next + 1) as f64 {
            limits[next] = count as u32;
            next += 1;
        }
        if next == PERCENTILES {
            break;
        }
    }
    limits[PERCENTILES - 1] = max;
    limits
}

/// The statistics report, as printed by the command line tool.
pub struct Report<'a> {
    stats: &'a Statistics,
    iterations: usize,
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self.stats;
        let cells = (s.width * s.height) as f64;
        writeln!(f, "Iterations: {}", self.iterations)?;
        writeln!(f, "Dimensions: {}x{}px", s.width, s.height)?;
        writeln!(f, "Mean count: {}", s.mean)?;
        writeln!(f, "Max count: {}", s.max)?;
        writeln!(
            f,
            "Escaping points: {} ({:.2}%)",
            s.nonzero,
            s.nonzero as f64 / cells * 100.0
        )?;
        writeln!(f)?;

        let twentieth = f64::from(s.max) / RANGES as f64;
        let mut cumulative = 0.0;
        for (i, &c) in s.ranges().iter().enumerate() {
            let low = (twentieth * i as f64) as u64;
            let high = (twentieth * (i + 1) as f64) as u64;
            let pct = c as f64 / s.nonzero as f64 * 100.0;
            cumulative += pct;
            writeln!(
                f,
                "{:2} {:4}   - {:4} {:15}  {:3.2}  {:3.2}",
                i + 1,
                low,
                high,
                c,
                pct,
                cumulative
            )?;
        }
        Ok(())
    }
}
