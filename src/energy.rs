// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the color gradient
//! through it: the color difference between the pixels above and
//! below, plus the difference between the pixels to the left and
//! right, square-rooted.
//!
//! Edge pixels don't get a clamped stencil.  Instead the first and
//! last rows (and columns) borrow the stencil of their inward
//! neighbour, so row 0 is measured across rows 0 and 2, exactly as
//! row 1 is.  On an axis shorter than three pixels the stencil is
//! clamped to whatever pixels exist, which leaves a one-pixel axis
//! with no gradient at all.

use crate::flipper::PixelGrid;
use crate::pixelpairs::energy_of_pair;
use crate::seamfinder::{energy_to_seam, Seam, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;
use std::cmp;

/// One non-negative energy per pixel, the same shape as the grid it
/// was computed from.
pub type EnergyMap = TwoDimensionalMap<f64>;

// The two sample indices either side of `index` on an axis of `len`.
fn stencil(index: usize, len: usize) -> (usize, usize) {
    let reference = match index {
        0 => 1,
        i if i == len - 1 => len - 2,
        i => i,
    };
    (reference.saturating_sub(1), cmp::min(reference + 1, len - 1))
}

// Image -> Energy, one pixel at a time.
fn energy_at(grid: &PixelGrid, row: usize, col: usize) -> f64 {
    let (above, below) = stencil(row, grid.rows());
    let (left, right) = stencil(col, grid.cols());
    let across_rows = energy_of_pair(grid[(below, col)], grid[(above, col)]);
    let across_cols = energy_of_pair(grid[(row, right)], grid[(row, left)]);
    f64::from(across_rows + across_cols).sqrt()
}

#[cfg(not(feature = "threaded"))]
fn fill_energy(grid: &PixelGrid, target: &mut [f64]) {
    iproduct!(0..grid.rows(), 0..grid.cols())
        .zip(target.iter_mut())
        .for_each(|((row, col), cell)| *cell = energy_at(grid, row, col));
}

// Every cell is independent of every other, so the map is cut into
// horizontal bands and each band is handed to its own thread.
#[cfg(feature = "threaded")]
fn fill_energy(grid: &PixelGrid, target: &mut [f64]) {
    let (rows, cols) = (grid.rows(), grid.cols());
    let band = cmp::max(1, (rows + num_cpus::get() - 1) / num_cpus::get());

    let outcome = crossbeam::scope(|scope| {
        for (n, chunk) in target.chunks_mut(band * cols).enumerate() {
            scope.spawn(move |_| {
                let first = n * band;
                let last = cmp::min(first + band, rows);
                iproduct!(first..last, 0..cols)
                    .zip(chunk.iter_mut())
                    .for_each(|((row, col), cell)| *cell = energy_at(grid, row, col));
            });
        }
    });
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}

/// Compute the energy of every pixel in a grid.
pub fn calculate_energy(grid: &PixelGrid) -> EnergyMap {
    let mut emap = EnergyMap::new(grid.rows(), grid.cols());
    if !grid.is_empty() {
        fill_energy(grid, emap.as_mut_slice());
    }
    emap
}

/// The gradient-magnitude seam engine: recompute the energy map from
/// scratch, then search it.
#[derive(Debug, Default, Copy, Clone)]
pub struct GradientEnergy;

impl SeamFinder for GradientEnergy {
    fn find_vertical_seam(&self, grid: &PixelGrid) -> Seam {
        energy_to_seam(&calculate_energy(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    fn grey(v: u8) -> Pixel {
        Pixel::new(v, v, v)
    }

    fn grid(rows: Vec<Vec<u8>>) -> PixelGrid {
        TwoDimensionalMap::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(grey).collect())
                .collect(),
        )
        .unwrap()
    }

    fn root(n: u32) -> f64 {
        f64::from(n).sqrt()
    }

    #[test]
    fn stencil_borrows_the_inward_neighbour_at_edges() {
        assert_eq!(stencil(0, 5), (0, 2));
        assert_eq!(stencil(1, 5), (0, 2));
        assert_eq!(stencil(2, 5), (1, 3));
        assert_eq!(stencil(3, 5), (2, 4));
        assert_eq!(stencil(4, 5), (2, 4));
    }

    #[test]
    fn stencil_on_short_axes_stays_in_range() {
        assert_eq!(stencil(0, 1), (0, 0));
        assert_eq!(stencil(0, 2), (0, 1));
        assert_eq!(stencil(1, 2), (0, 1));
    }

    #[test]
    fn energy_generator_works() {
        // Grey pixels, so every squared difference is counted three times.
        let pixels = grid(vec![vec![1, 2, 4], vec![3, 5, 9], vec![6, 8, 7]]);
        let expected = vec![
            vec![root(102), root(135), root(54)],
            vec![root(183), root(216), root(135)],
            vec![root(78), root(111), root(30)],
        ];
        assert_eq!(calculate_energy(&pixels).into_rows(), expected);
    }

    #[test]
    fn edge_rows_copy_their_neighbours_gradient() {
        // Flat rows, so only the vertical difference counts.
        let pixels = grid(vec![vec![0; 3], vec![10; 3], vec![20; 3], vec![50; 3]]);
        let energy = calculate_energy(&pixels);
        for col in 0..3 {
            assert_eq!(energy[(0, col)], root(1200));
            assert_eq!(energy[(1, col)], root(1200));
            assert_eq!(energy[(2, col)], root(4800));
            assert_eq!(energy[(3, col)], root(4800));
        }
    }

    #[test]
    fn uniform_image_has_no_energy() {
        let flat = grid(vec![vec![77; 3]; 3]);
        let energy = calculate_energy(&flat);
        assert!(energy.as_slice().iter().all(|&e| e == 0.0));
        assert_eq!(GradientEnergy.find_vertical_seam(&flat), vec![0, 0, 0]);
    }

    #[test]
    fn energy_is_never_negative_and_keeps_its_shape() {
        let pixels = TwoDimensionalMap::from_fn(9, 13, |r, c| {
            Pixel::from_packed(((r * 48_271 + c * 16_807) * 97 % 0x100_0000) as u32)
        });
        let energy = calculate_energy(&pixels);
        assert_eq!((energy.rows(), energy.cols()), (9, 13));
        assert!(energy.as_slice().iter().all(|&e| e >= 0.0));
    }

    #[test]
    fn single_row_and_single_column_grids() {
        let row = grid(vec![vec![0, 30, 60, 90]]);
        let energy = calculate_energy(&row);
        assert_eq!((energy.rows(), energy.cols()), (1, 4));
        assert_eq!(energy.row(0), &[root(10800); 4][..]);
        assert_eq!(GradientEnergy.find_vertical_seam(&row), vec![0]);

        let column = row.transpose();
        let energy = calculate_energy(&column);
        assert_eq!((energy.rows(), energy.cols()), (4, 1));
        assert!(energy.as_slice().iter().all(|&e| e == root(10800)));
        assert_eq!(GradientEnergy.find_vertical_seam(&column), vec![0; 4]);
    }

    #[test]
    fn one_pixel_has_no_energy() {
        let energy = calculate_energy(&grid(vec![vec![200]]));
        assert_eq!(energy.as_slice(), &[0.0]);
    }
}
