// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong before, or around, a carve.
//!
//! The carving algorithms themselves cannot fail once their inputs
//! have been checked, so every variant here is either a rejected
//! input or an I/O problem at the image codec boundary.

use failure::Fail;

/// The crate's error type.
#[derive(Debug, Fail)]
pub enum CarveError {
    /// A grid with no rows, or with rows containing no pixels.
    #[fail(display = "an image must be at least 1x1 pixels")]
    EmptyGrid,

    /// A grid whose rows are not all the same length.
    #[fail(
        display = "row {} has {} pixels, but the first row has {}",
        row, found, expected
    )]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Asked to carve an axis down to nothing (or less).
    #[fail(
        display = "cannot remove {} seams from an image {} pixels in {}; at most {} can be removed",
        requested, available, axis, limit
    )]
    ReductionTooLarge {
        axis: &'static str,
        requested: usize,
        available: usize,
        limit: usize,
    },

    #[fail(display = "failed to load image from {}", path)]
    ImageLoad {
        path: String,
        #[cause]
        cause: image::ImageError,
    },

    #[fail(display = "failed to save image to {}", path)]
    ImageSave {
        path: String,
        #[cause]
        cause: image::ImageError,
    },
}

/// Result alias for everything in this crate.
pub type Result<T> = std::result::Result<T, CarveError>;
