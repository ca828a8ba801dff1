// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as a greyscale picture, brightest where the
//! energy is highest.  Handy for seeing what the carver will avoid.

use crate::energy::EnergyMap;
use crate::error::{CarveError, Result};
use image::{GrayImage, ImageFormat, Luma};
use std::path::Path;

/// Scale `energy` so its maximum is white.  An all-zero map is
/// black.  Rows of the map are rows of the picture.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let factor = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    GrayImage::from_fn(energy.cols() as u32, energy.rows() as u32, |x, y| {
        let e = energy[(y as usize, x as usize)];
        let level = if factor > 0.0 { e * 255.0 / factor } else { 0.0 };
        Luma([level.round().min(255.0) as u8])
    })
}

/// Write the greyscale rendering of `energy` to `path` as a PNG.
pub fn save_energy<P: AsRef<Path>>(energy: &EnergyMap, path: P) -> Result<()> {
    let path = path.as_ref();
    energy_to_image(energy)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|cause| CarveError::ImageSave {
            path: path.display().to_string(),
            cause,
        })
}
