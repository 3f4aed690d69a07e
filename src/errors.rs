// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The things that can go wrong during a render.  An orbit wandering
//! off the edge of the image is not one of them; those visits are
//! simply dropped.

use failure::Fail;
use std::io;

/// Everything a rendering run can report to its caller.
#[derive(Debug, Fail)]
pub enum BuddhaError {
    /// One of the per-run buffers could not be reserved.  Nothing has
    /// been computed when this is returned.
    #[fail(display = "could not allocate the {} buffer", buffer)]
    Allocation {
        /// Which buffer failed.
        buffer: &'static str,
    },

    /// No cell was ever visited by an escaping orbit, so there is no
    /// mean, no histogram, and no percentiles to color with.
    #[fail(display = "no escaping orbits: the count distribution is empty")]
    DegenerateDistribution,

    /// The image sink could not encode or write the raster.
    #[fail(display = "could not write image: {}", cause)]
    Sink {
        /// The underlying I/O failure.
        #[cause]
        cause: io::Error,
    },

    /// The configuration was rejected before the run began.
    #[fail(display = "invalid configuration: {}", _0)]
    InvalidConfig(String),
}

impl From<io::Error> for BuddhaError {
    fn from(cause: io::Error) -> Self {
        BuddhaError::Sink { cause }
    }
}

/// Reserve exactly `len` slots of `value`, reporting failure instead of
/// aborting the process.
pub(crate) fn allocate<T: Clone>(
    len: usize,
    value: T,
    buffer: &'static str,
) -> Result<Vec<T>, BuddhaError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| BuddhaError::Allocation { buffer })?;
    v.resize(len, value);
    Ok(v)
}
