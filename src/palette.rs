// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turning counts into colors.  Three schemes are offered.  Two of them
//! cut the range of counts into bands and blend linearly between a pair
//! of colors within each band; they differ only in where the band edges
//! fall.  The third is a smooth curve with no bands at all.

use std::fmt;
use std::str::FromStr;

use crate::stats::Statistics;

/// A color with each channel in [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub f64, pub f64, pub f64);

const BLACK: Color = Color(0.0, 0.0, 0.0);
const DARK_BLUE: Color = Color(0.0, 0.0, 0.5);
const BLUE: Color = Color(0.0, 0.0, 1.0);
const PURPLE: Color = Color(1.0, 0.0, 1.0);
const RED: Color = Color(1.0, 0.0, 0.0);
const YELLOW: Color = Color(1.0, 1.0, 0.0);
const GREEN: Color = Color(0.0, 1.0, 0.0);
const CYAN: Color = Color(0.0, 1.0, 1.0);
const WHITE: Color = Color(1.0, 1.0, 1.0);

impl Color {
    /// Linear blend from `self` to `other`; `a` is expected in [0, 1].
    pub fn lerp(self, other: Color, a: f64) -> Color {
        Color(
            self.0 + (other.0 - self.0) * a,
            self.1 + (other.1 - self.1) * a,
            self.2 + (other.2 - self.2) * a,
        )
    }

    /// Scale each channel to 0..255, truncating.
    pub fn to_rgb(self) -> [u8; 3] {
        [
            (self.0 * 255.0) as u8,
            (self.1 * 255.0) as u8,
            (self.2 * 255.0) as u8,
        ]
    }
}

/// A stretch of counts from `lo` up to (but not including) `hi`, and
/// the two colors it blends between.  The rank within the band is
/// measured against `span`, which is usually `hi - lo` but may be
/// supplied directly when the edges are multiples of a common step.
#[derive(Copy, Clone, Debug)]
struct Band {
    lo: f64,
    hi: f64,
    span: f64,
    from: Color,
    to: Color,
}

impl Band {
    fn new(lo: f64, hi: f64, from: Color, to: Color) -> Band {
        Band::with_span(lo, hi, hi - lo, from, to)
    }

    fn with_span(lo: f64, hi: f64, span: f64, from: Color, to: Color) -> Band {
        Band {
            lo,
            hi,
            span,
            from,
            to,
        }
    }

    /// Where `count` sits within the band.  An empty band has nothing
    /// to blend across and yields its upper color.
    fn rank(&self, count: f64) -> f64 {
        if self.span <= 0.0 {
            1.0
        } else {
            (count - self.lo) / self.span
        }
    }

    fn color(&self, count: f64) -> Color {
        self.from.lerp(self.to, self.rank(count))
    }
}

/// Choose the first band whose upper edge lies above `count`, falling
/// through to the last band for counts at the very top.
fn banded(bands: &[Band], count: f64) -> Color {
    bands
        .iter()
        .find(|band| count < band.hi)
        .or_else(|| bands.last())
        .map_or(BLACK, |band| band.color(count))
}

/// The available color schemes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// Bands at the percentiles of the count distribution.  Gives every
    /// part of the distribution a fair share of the palette no matter
    /// how skewed it is.
    Percentile,
    /// Bands at fixed fractions of the maximum count.
    MaxRelative,
    /// `(a³, a³, a)` for `a = count / max`: a blue glow that whitens
    /// only at the very densest cells.
    GammaCubic,
}

impl Default for Scheme {
    fn default() -> Self {
        Scheme::MaxRelative
    }
}

impl Scheme {
    /// Every scheme, in the order they are listed to users.
    pub const ALL: [Scheme; 3] = [Scheme::Percentile, Scheme::MaxRelative, Scheme::GammaCubic];

    /// The name the scheme is known by on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Percentile => "percentile",
            Scheme::MaxRelative => "max-relative",
            Scheme::GammaCubic => "gamma-cubic",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .iter()
            .cloned()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| format!("Unknown color scheme '{}'", s))
    }
}

/// A scheme fitted to one run's statistics.  The band edges are
/// computed once here rather than for every pixel.
#[derive(Clone, Debug)]
pub struct Palette {
    scheme: Scheme,
    max: f64,
    bands: Vec<Band>,
}

impl Palette {
    /// Fit `scheme` to the distribution described by `stats`.
    pub fn new(scheme: Scheme, stats: &Statistics) -> Palette {
        let max = f64::from(stats.max());
        let bands = match scheme {
            Scheme::Percentile => percentile_bands(stats.percentiles()),
            Scheme::MaxRelative => max_relative_bands(max),
            Scheme::GammaCubic => vec![],
        };
        Palette { scheme, max, bands }
    }

    /// The scheme in use.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The color of a cell visited `count` times.  Unvisited cells are
    /// always black.
    pub fn color(&self, count: u32) -> Color {
        if count == 0 {
            return BLACK;
        }
        let c = f64::from(count);
        match self.scheme {
            Scheme::GammaCubic => {
                let a = c / self.max;
                let a3 = a * a * a;
                Color(a3, a3, a)
            }
            _ => banded(&self.bands, c),
        }
    }

    /// The color of a cell, as bytes.
    pub fn rgb(&self, count: u32) -> [u8; 3] {
        self.color(count).to_rgb()
    }
}

fn percentile_bands(p: &[u32; 10]) -> Vec<Band> {
    let p: Vec<f64> = p.iter().map(|&v| f64::from(v)).collect();
    vec![
        Band::new(0.0, p[0], DARK_BLUE, BLUE),
        Band::new(p[0], p[1], BLUE, PURPLE),
        Band::new(p[1], p[3], PURPLE, RED),
        Band::new(p[3], p[4], RED, YELLOW),
        Band::new(p[4], p[5], YELLOW, GREEN),
        Band::new(p[5], p[6], GREEN, CYAN),
        Band::new(p[6], p[8], CYAN, WHITE),
        Band::new(p[8], p[9], WHITE, WHITE),
    ]
}

// Nearly all visited cells sit below 15% of the max, so most of the
// palette is spent there.  Edges and spans are whole multiples of a
// twentieth of the max, so a count on an edge ranks exactly 0.
fn max_relative_bands(max: f64) -> Vec<Band> {
    let t = max / 20.0;
    vec![
        Band::with_span(0.0, t, t, DARK_BLUE, BLUE),
        Band::with_span(t, t * 2.0, t, BLUE, PURPLE),
        Band::with_span(t * 2.0, t * 3.0, t, PURPLE, RED),
        Band::with_span(t * 3.0, t * 10.0, t * 7.0, RED, YELLOW),
        Band::with_span(t * 10.0, max, t * 10.0, YELLOW, WHITE),
    ]
}
