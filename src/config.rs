// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs for a single rendering run.

use crate::errors::BuddhaError;
use crate::palette::Scheme;
use crate::render::CHANNELS;
use crate::stats::MeanMode;

/// Default image width: a 1440×900 screen, doubled.
pub const DEFAULT_WIDTH: usize = 1440 * 2;
/// Default image height.
pub const DEFAULT_HEIGHT: usize = 900 * 2;
/// Default iteration budget per orbit.
pub const DEFAULT_ITERATIONS: usize = 20_000;

/// Everything a run needs to know.  Fixed for the duration of the run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Iteration budget per orbit.
    pub iterations: usize,
    /// How counts become colors.
    pub scheme: Scheme,
    /// How the mean count is reported.
    pub mean_mode: MeanMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            iterations: DEFAULT_ITERATIONS,
            scheme: Scheme::default(),
            mean_mode: MeanMode::default(),
        }
    }
}

impl RenderConfig {
    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> Result<(), BuddhaError> {
        if self.width == 0 || self.height == 0 {
            return Err(BuddhaError::InvalidConfig(format!(
                "image size {}x{} is empty",
                self.width, self.height
            )));
        }
        if self.iterations == 0 {
            return Err(BuddhaError::InvalidConfig(
                "the iteration budget must be at least 1".to_string(),
            ));
        }
        if self
            .width
            .checked_mul(self.height)
            .and_then(|cells| cells.checked_mul(CHANNELS))
            .is_none()
        {
            return Err(BuddhaError::InvalidConfig(format!(
                "image size {}x{} is too large",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
