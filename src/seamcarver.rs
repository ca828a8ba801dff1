// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine.  Width comes off first, one vertical
//! seam at a time.  Then the image is flipped once, and height comes
//! off with exactly the same routine.  The image is never flipped
//! back: the result is handed out as columns, which is the order an
//! encoder writing x-major wants anyway.

use crate::energy::GradientEnergy;
use crate::error::{CarveError, Result};
use crate::flipper::{ImageColumns, ImageRows, PixelGrid};
use crate::seamfinder::SeamFinder;
use crate::twodmap::TwoDimensionalMap;
use log::{debug, info};

/// Drop the pixel at `seam[row]` from every row, closing up the gap
/// from the right.  The result is one column narrower.
pub fn remove_vertical_seam<P>(
    grid: &TwoDimensionalMap<P>,
    seam: &[usize],
) -> TwoDimensionalMap<P>
where
    P: Default + Copy,
{
    debug_assert_eq!(seam.len(), grid.rows());
    debug_assert!(seam.iter().all(|&col| col < grid.cols()));
    TwoDimensionalMap::from_fn(grid.rows(), grid.cols() - 1, |row, col| {
        grid[(row, if col < seam[row] { col } else { col + 1 })]
    })
}

/// How many pixels to take off each axis.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub width: usize,
    pub height: usize,
}

impl Reduction {
    pub fn new(width: usize, height: usize) -> Self {
        Reduction { width, height }
    }

    // At least one pixel has to survive on each axis.
    fn check(self, image: &ImageRows) -> Result<()> {
        if image.grid().is_empty() {
            return Err(CarveError::EmptyGrid);
        }
        let axes = [
            ("width", self.width, image.width()),
            ("height", self.height, image.height()),
        ];
        for &(axis, requested, available) in axes.iter() {
            if requested >= available {
                return Err(CarveError::ReductionTooLarge {
                    axis,
                    requested,
                    available,
                    limit: available - 1,
                });
            }
        }
        Ok(())
    }
}

/// The carving engine, generic over how seams are chosen.
#[derive(Debug, Default, Clone)]
pub struct SeamCarver<F: SeamFinder = GradientEnergy> {
    finder: F,
}

impl SeamCarver<GradientEnergy> {
    /// A carver that removes the lowest gradient-energy seams.
    pub fn new() -> Self {
        SeamCarver {
            finder: GradientEnergy,
        }
    }
}

impl<F: SeamFinder> SeamCarver<F> {
    pub fn with_finder(finder: F) -> Self {
        SeamCarver { finder }
    }

    // This is absurdly inefficient, as the entire energy map is
    // recalculated every time.  Each pass depends on the shape left
    // by the one before, though, so there is no overlapping them.

    /// Take `reduction.width` columns and then `reduction.height` rows
    /// out of `image`.  Both amounts are checked before anything is
    /// carved; each must leave at least one pixel on its axis.
    pub fn carve(&self, image: ImageRows, reduction: Reduction) -> Result<ImageColumns> {
        reduction.check(&image)?;
        let (width, height) = (image.width(), image.height());

        let mut grid = image.into_grid();
        for pass in 1..=reduction.width {
            grid = self.carve_once(&grid);
            debug!("W {}: {}x{}", pass, grid.cols(), grid.rows());
        }

        let mut grid = ImageRows::new(grid).flip().into_grid();
        for pass in 1..=reduction.height {
            grid = self.carve_once(&grid);
            debug!("H {}: {}x{}", pass, grid.rows(), grid.cols());
        }

        let carved = ImageColumns::new(grid);
        info!(
            "carved {}x{} down to {}x{}",
            width,
            height,
            carved.width(),
            carved.height()
        );
        Ok(carved)
    }

    fn carve_once(&self, grid: &PixelGrid) -> PixelGrid {
        let seam = self.finder.find_vertical_seam(grid);
        remove_vertical_seam(grid, &seam)
    }
}
