// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! The carver only knows how to remove a column from each row of a
//! grid.  To shrink the other axis, the grid is flipped 90° so that
//! the old columns become rows, and carving carries on as before.
//!
//! A bare `PixelGrid` doesn't say which way round it is, so the two
//! orientations get their own types.  Both answer `get(x, y)` in
//! image coordinates, and `flip` is the only way between them.

use crate::error::Result;
use crate::pixel::Pixel;
use crate::twodmap::TwoDimensionalMap;

/// A rectangle of pixels with no fixed orientation.
pub type PixelGrid = TwoDimensionalMap<Pixel>;

/// An image stored as a list of rows: the outer index is y, the
/// inner index is x.  This is how images come out of the decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRows(pub(crate) PixelGrid);

/// An image stored as a list of columns: the outer index is x, the
/// inner index is y.  This is how a finished carve comes out.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageColumns(pub(crate) PixelGrid);

impl ImageRows {
    /// Wrap a grid whose rows are image rows.
    pub fn new(grid: PixelGrid) -> Self {
        ImageRows(grid)
    }

    /// Build from nested rows, top row first.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        TwoDimensionalMap::from_rows(rows).map(ImageRows)
    }

    pub fn width(&self) -> usize {
        self.0.cols()
    }

    pub fn height(&self) -> usize {
        self.0.rows()
    }

    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.0[(y, x)]
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.0
    }

    pub fn into_grid(self) -> PixelGrid {
        self.0
    }

    pub fn flip(self) -> ImageColumns {
        ImageColumns(self.0.transpose())
    }
}

impl ImageColumns {
    /// Wrap a grid whose rows are image columns.
    pub fn new(grid: PixelGrid) -> Self {
        ImageColumns(grid)
    }

    pub fn width(&self) -> usize {
        self.0.rows()
    }

    pub fn height(&self) -> usize {
        self.0.cols()
    }

    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.0[(x, y)]
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.0
    }

    pub fn into_grid(self) -> PixelGrid {
        self.0
    }

    pub fn flip(self) -> ImageRows {
        ImageRows(self.0.transpose())
    }
}
