// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where finished rasters go.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::errors::BuddhaError;

/// Accepts a packed RGB raster (row-major, three bytes per pixel, top
/// row first) and does something permanent with it.  The raster is
/// only borrowed; a failed write leaves it untouched.
pub trait ImageSink {
    /// Encode and store the raster.
    fn write(&mut self, raster: &[u8], width: usize, height: usize) -> Result<(), BuddhaError>;
}

/// Writes a binary PPM file.
#[derive(Debug)]
pub struct PnmSink {
    path: PathBuf,
}

impl PnmSink {
    /// A sink that will create (or replace) the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        PnmSink {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSink for PnmSink {
    fn write(&mut self, raster: &[u8], width: usize, height: usize) -> Result<(), BuddhaError> {
        let output = File::create(&self.path)?;
        let mut encoder =
            PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
        encoder.encode(raster, width as u32, height as u32, ColorType::RGB(8))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_a_binary_pixmap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.ppm");
        let raster = [255, 0, 0, 0, 255, 0, 0, 0, 255, 9, 9, 9];
        PnmSink::new(&path).write(&raster, 2, 2).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6"));
        assert!(bytes.ends_with(&raster));
    }

    #[test]
    fn unwritable_path_is_a_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.ppm");
        let raster = [0u8; 3];
        match PnmSink::new(&path).write(&raster, 1, 1) {
            Err(BuddhaError::Sink { .. }) => (),
            other => panic!("expected a sink error, got {:?}", other),
        }
        assert_eq!(raster, [0u8; 3]);
    }
}
