// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A dense two-dimensional map
//!
//! Everything the carver works on is a rectangle of something: the
//! pixels themselves, the energy of each pixel, and the shift table
//! the seam search backtracks through.  They all share this one
//! row-major container.

use crate::error::{CarveError, Result};
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of `P`, stored row after
/// row.  "Row" and "column" mean whatever the current orientation
/// of the data says they mean; the map itself has no notion of x and
/// y.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    rows: usize,
    cols: usize,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map of the given shape with every cell set to the content
    /// type's default.
    pub fn new(rows: usize, cols: usize) -> Self {
        TwoDimensionalMap {
            rows,
            cols,
            data: vec![P::default(); rows * cols],
        }
    }

    /// Build a map by calling `f(row, col)` for every cell, in row
    /// order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> P,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        TwoDimensionalMap { rows, cols, data }
    }

    /// Build a map from nested rows, checking that there is at least
    /// one cell and that every row is as long as the first.
    pub fn from_rows(rows: Vec<Vec<P>>) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(CarveError::EmptyGrid),
        };
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != cols)
        {
            return Err(CarveError::RaggedGrid {
                row,
                expected: cols,
                found,
            });
        }
        let height = rows.len();
        Ok(TwoDimensionalMap {
            rows: height,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows (the outer index).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (the inner index).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if the map holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// One whole row as a slice.
    pub fn row(&self, row: usize) -> &[P] {
        let start = self.get_index(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Every cell, in row order.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// Every cell, in row order, for bulk writing.
    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Swap the roles of rows and columns: cell `(r, c)` of the
    /// result is cell `(c, r)` of `self`.
    pub fn transpose(&self) -> Self {
        TwoDimensionalMap::from_fn(self.cols, self.rows, |row, col| self[(col, row)])
    }

    /// Hand the cells back as nested rows.
    pub fn into_rows(self) -> Vec<Vec<P>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[P]>::to_vec).collect()
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    /// Address a cell as `(row, col)`.
    fn index(&self, (row, col): (usize, usize)) -> &P {
        let index = self.get_index(row, col);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut P {
        let index = self.get_index(row, col);
        &mut self.data[index]
    }
}
