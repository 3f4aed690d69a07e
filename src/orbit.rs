// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iteration at the heart of everything.  Both passes
//! of the renderer run the same orbit; the first just wants to know
//! whether it escapes, the second wants to see every point along the
//! way.

use crate::planes::{Pixel, PlaneMapper};
use num::Complex;

/// An orbit whose modulus reaches this has escaped.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// A visitor is handed every point of an orbit that has not (yet)
/// escaped.
pub type Visitor<'a> = &'a mut dyn FnMut(Complex<f64>);

/// Anything that can run an orbit for a seed pixel.  The renderer is
/// written against this trait rather than the Mandelbrot iteration
/// directly, so that tests can substitute orbits whose trajectories
/// are known in advance.
pub trait Orbit {
    /// The iteration budget.  A seed that never escapes reports
    /// exactly this many iterations.
    fn limit(&self) -> usize;

    /// Run the orbit seeded at `pixel`, returning the iteration count
    /// at which it escaped, or `limit()` if it never did.  If a
    /// visitor is supplied, it sees every point of the orbit except
    /// the one that escapes.
    fn iterate(&self, plane: &PlaneMapper, pixel: &Pixel, visit: Option<Visitor>) -> usize;
}

/// The classic z ← z² + c iteration, starting from zero.
#[derive(Copy, Clone, Debug)]
pub struct Mandelbrot {
    limit: usize,
}

impl Mandelbrot {
    /// An orbit with the given iteration budget.
    pub fn new(limit: usize) -> Self {
        Mandelbrot { limit }
    }
}

impl Orbit for Mandelbrot {
    fn limit(&self) -> usize {
        self.limit
    }

    fn iterate(&self, plane: &PlaneMapper, pixel: &Pixel, mut visit: Option<Visitor>) -> usize {
        let c = plane.pixel_to_point(pixel);
        let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
        let mut i = 1;
        while i < self.limit {
            z = z * z + c;
            if z.norm() >= ESCAPE_RADIUS {
                break;
            }
            if let Some(ref mut visit) = visit {
                visit(z);
            }
            i += 1;
        }
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // On a 3×2 grid every pixel maps to an integral point of the window.
    fn small() -> PlaneMapper {
        PlaneMapper::new(3, 2)
    }

    #[test]
    fn origin_never_escapes() {
        // Pixel (2, 1) is 0 + 0i.
        assert_eq!(Mandelbrot::new(50).iterate(&small(), &Pixel(2, 1), None), 50);
    }

    #[test]
    fn escaping_seed_reports_the_escape_step() {
        // Pixel (0, 0) is -2 - 1i: z1 = c, |c|² = 5, out on the first step.
        assert_eq!(Mandelbrot::new(50).iterate(&small(), &Pixel(0, 0), None), 1);
        // Pixel (1, 0) is -1 - 1i: z1 = c, z2 = -1 + i, then z3 = -1 - 3i escapes.
        assert_eq!(Mandelbrot::new(50).iterate(&small(), &Pixel(1, 0), None), 3);
        // Pixel (2, 0) is -i, which falls into a cycle and stays bounded.
        assert_eq!(Mandelbrot::new(50).iterate(&small(), &Pixel(2, 0), None), 50);
    }

    #[test]
    fn visitor_sees_everything_but_the_escaping_point() {
        let mut seen = vec![];
        let steps = {
            let mut visit = |z: Complex<f64>| seen.push(z);
            Mandelbrot::new(50).iterate(&small(), &Pixel(1, 0), Some(&mut visit))
        };
        assert_eq!(steps, 3);
        assert_eq!(seen, vec![Complex::new(-1.0, -1.0), Complex::new(-1.0, 1.0)]);
    }

    #[test]
    fn budget_of_one_never_iterates() {
        let mut calls = 0;
        let steps = {
            let mut visit = |_: Complex<f64>| calls += 1;
            Mandelbrot::new(1).iterate(&small(), &Pixel(0, 0), Some(&mut visit))
        };
        assert_eq!(steps, 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn modulus_of_exactly_two_escapes() {
        // Pixel (0, 1) on 3×2 is -2, which sits right on the radius.
        assert_eq!(Mandelbrot::new(50).iterate(&small(), &Pixel(0, 1), None), 1);
    }

    #[test]
    fn escape_is_judged_on_the_modulus() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let plane = PlaneMapper::new(rng.gen_range(1, 500), rng.gen_range(1, 500));
            let pixel = Pixel(
                rng.gen_range(0, plane.width()),
                rng.gen_range(0, plane.height()),
            );
            let c = plane.pixel_to_point(&pixel);
            let mut z = Complex::new(0.0, 0.0);
            let mut expected = 1;
            while expected < 200 {
                z = z * z + c;
                if z.norm() >= 2.0 {
                    break;
                }
                expected += 1;
            }
            assert_eq!(Mandelbrot::new(200).iterate(&plane, &pixel, None), expected);
        }
    }

    #[test]
    fn result_is_always_within_budget() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let width = rng.gen_range(1, 64);
            let height = rng.gen_range(1, 64);
            let limit = rng.gen_range(1, 100);
            let plane = PlaneMapper::new(width, height);
            let pixel = Pixel(rng.gen_range(0, width), rng.gen_range(0, height));
            let i = Mandelbrot::new(limit).iterate(&plane, &pixel, None);
            assert!(i >= 1 && i <= limit, "{} outside [1, {}]", i, limit);
        }
    }
}
