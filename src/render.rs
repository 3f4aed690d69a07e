// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Paint the count grid into a packed RGB raster: row-major, three
//! bytes per pixel, top row first, no padding.

use crate::density::CountGrid;
use crate::errors::{allocate, BuddhaError};
use crate::palette::Palette;

/// Bytes per pixel in the raster.
pub const CHANNELS: usize = 3;

/// Color every cell of `grid` with `palette`, into a raster the caller
/// has already sized at three bytes per cell.
pub fn paint(grid: &CountGrid, palette: &Palette, raster: &mut [u8]) {
    assert_eq!(raster.len(), grid.counts().len() * CHANNELS);
    for (pixel, &count) in raster.chunks_mut(CHANNELS).zip(grid.counts().iter()) {
        pixel.copy_from_slice(&palette.rgb(count));
    }
}

/// Color every cell of `grid` with `palette` into a fresh raster.
pub fn rasterize(grid: &CountGrid, palette: &Palette) -> Result<Vec<u8>, BuddhaError> {
    let mut raster = allocate(grid.counts().len() * CHANNELS, 0u8, "raster")?;
    paint(grid, palette, &mut raster);
    Ok(raster)
}
