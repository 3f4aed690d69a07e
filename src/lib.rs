#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Buddhabrot renderer
//!
//! The Buddhabrot is a variant of the Mandelbrot set that looks at the
//! journey rather than the destination.  The Mandelbrot takes a point
//! on the complex plane and repeatedly squares it and adds the
//! original, measuring how quickly that number goes to infinity.
//!
//! Each iteration creates a new complex number that itself may be
//! used as a coordinate on the complex plane.  By mapping that
//! coordinate to the nearest integral pixel and incrementing that
//! pixel by one, we can plot the "orbit" of every point that
//! eventually escapes.  Piling up all of those orbits gives a density
//! map, and the density map, suitably colored, is the Buddhabrot.
//!
//! A run has a fixed order:
//!
//! 1. [`EscapeMask::classify`] finds every seed pixel that escapes.
//! 2. [`CountGrid::accumulate`] replays those orbits and counts visits.
//! 3. [`Statistics::compute`] looks at how the counts are distributed.
//! 4. [`Palette`] and [`rasterize`] turn counts into RGB bytes.
//!
//! [`Buddhabrot::render`] does all four and hands back a [`Rendering`],
//! which can be written to any [`ImageSink`].

use log::{debug, info};

pub mod config;
pub mod density;
pub mod errors;
pub mod escapes;
pub mod orbit;
pub mod palette;
pub mod planes;
pub mod render;
pub mod sink;
pub mod stats;

pub use crate::config::RenderConfig;
pub use crate::density::CountGrid;
pub use crate::errors::BuddhaError;
pub use crate::escapes::EscapeMask;
pub use crate::orbit::{Mandelbrot, Orbit};
pub use crate::palette::{Palette, Scheme};
pub use crate::planes::{Pixel, PlaneMapper};
pub use crate::render::{paint, rasterize};
pub use crate::sink::{ImageSink, PnmSink};
pub use crate::stats::{Mean, MeanMode, Statistics};

/// A configured renderer.  Generic over the orbit so that the whole
/// pipeline can be driven by something other than the Mandelbrot
/// iteration.
#[derive(Debug)]
pub struct Buddhabrot<O: Orbit = Mandelbrot> {
    config: RenderConfig,
    plane: PlaneMapper,
    orbit: O,
}

impl Buddhabrot<Mandelbrot> {
    /// A renderer for the Mandelbrot orbit with the configured budget.
    pub fn new(config: RenderConfig) -> Result<Self, BuddhaError> {
        Buddhabrot::with_orbit(config, Mandelbrot::new(config.iterations))
    }
}

impl<O: Orbit> Buddhabrot<O> {
    /// A renderer for an arbitrary orbit.  The orbit's own budget
    /// governs escape; the configured budget is only reported.
    pub fn with_orbit(config: RenderConfig, orbit: O) -> Result<Self, BuddhaError> {
        config.validate()?;
        Ok(Buddhabrot {
            plane: PlaneMapper::new(config.width, config.height),
            config,
            orbit,
        })
    }

    /// The configuration this renderer was built with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Run both orbit passes, take the statistics, and paint the
    /// raster.  The grid-sized buffers are all reserved before the
    /// first orbit is run.
    pub fn render(&self) -> Result<Rendering, BuddhaError> {
        info!(
            "rendering {}x{}, {} iterations, {} colors",
            self.config.width, self.config.height, self.config.iterations, self.config.scheme
        );
        let mut counts = CountGrid::new(&self.plane)?;
        let mut raster = errors::allocate(self.plane.len() * render::CHANNELS, 0u8, "raster")?;

        let mask = EscapeMask::classify(&self.plane, &self.orbit)?;
        debug!("{} of {} seeds escape", mask.count(), mask.len());

        counts.accumulate(&self.plane, &self.orbit, &mask);
        debug!(
            "max count {}, {} orbit points fell outside the image",
            counts.max(),
            counts.discarded()
        );

        let stats = Statistics::compute(&counts, self.config.mean_mode)?;
        debug!(
            "{} cells visited, mean count {}, percentiles {:?}",
            stats.nonzero(),
            stats.mean(),
            stats.percentiles()
        );

        let palette = Palette::new(self.config.scheme, &stats);
        paint(&counts, &palette, &mut raster);
        info!("render complete");

        Ok(Rendering {
            width: self.config.width,
            height: self.config.height,
            escaping: mask.count(),
            counts,
            stats,
            raster,
        })
    }
}

/// The products of one run.
#[derive(Debug)]
pub struct Rendering {
    width: usize,
    height: usize,
    escaping: usize,
    counts: CountGrid,
    stats: Statistics,
    raster: Vec<u8>,
}

impl Rendering {
    /// The density map.
    pub fn counts(&self) -> &CountGrid {
        &self.counts
    }

    /// The distribution of the density map.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Packed RGB, row-major, three bytes per pixel.
    pub fn raster(&self) -> &[u8] {
        &self.raster
    }

    /// Number of seed pixels whose orbits escaped.
    pub fn escaping(&self) -> usize {
        self.escaping
    }

    /// Image width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Hand the raster to a sink.
    pub fn write<S: ImageSink + ?Sized>(&self, sink: &mut S) -> Result<(), BuddhaError> {
        sink.write(&self.raster, self.width, self.height)
    }
}
