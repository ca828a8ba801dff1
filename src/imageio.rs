// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting pixels in and out of image files.
//!
//! Anything the `image` crate can decode is accepted, and flattened
//! to 8-bit RGB on the way in.  Carved images always go out as PNG.

use crate::error::{CarveError, Result};
use crate::flipper::{ImageColumns, ImageRows};
use crate::pixel::Pixel;
use crate::twodmap::TwoDimensionalMap;
use image::{ImageFormat, RgbImage};
use log::info;
use std::path::Path;

/// Decoded pixels, one row per image row.
pub fn rows_from_image(image: &RgbImage) -> ImageRows {
    let (width, height) = image.dimensions();
    ImageRows::new(TwoDimensionalMap::from_fn(
        height as usize,
        width as usize,
        |y, x| Pixel::from(*image.get_pixel(x as u32, y as u32)),
    ))
}

/// Carved pixels back into an image buffer, x-major.
pub fn columns_to_image(columns: &ImageColumns) -> RgbImage {
    RgbImage::from_fn(
        columns.width() as u32,
        columns.height() as u32,
        |x, y| columns.get(x as usize, y as usize).into(),
    )
}

/// Load and decode an image file.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageRows> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|cause| CarveError::ImageLoad {
        path: path.display().to_string(),
        cause,
    })?;
    let rows = rows_from_image(&decoded.to_rgb8());
    info!(
        "loaded {} ({}x{})",
        path.display(),
        rows.width(),
        rows.height()
    );
    Ok(rows)
}

/// Write a carved image to `path` as a PNG.
pub fn save_image<P: AsRef<Path>>(columns: &ImageColumns, path: P) -> Result<()> {
    let path = path.as_ref();
    columns_to_image(columns)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|cause| CarveError::ImageSave {
            path: path.display().to_string(),
            cause,
        })?;
    info!(
        "wrote {} ({}x{})",
        path.display(),
        columns.width(),
        columns.height()
    );
    Ok(())
}
