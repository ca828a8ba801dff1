// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam through an energy map.
//!
//! A plain row-by-row dynamic program.  The running cost of a cell is
//! its own energy plus the cheapest of the (up to) three cells above
//! it; the shift table remembers which of the three won so that the
//! seam can be walked back up from the cheapest cell in the bottom
//! row.
//!
//! Ties matter, since they decide which pixels get deleted: the scan
//! order is left, centre, right and the first minimum wins, and in
//! the bottom row the leftmost minimum wins.

use crate::energy::EnergyMap;
use crate::flipper::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use std::mem;

/// One column index per row, top row first.
pub type Seam = Vec<usize>;

/// This trait defines how we will get seams from an image.  It's a
/// primitive interface, just enough to make room for more than one
/// energy function.
pub trait SeamFinder {
    /// The column to remove from each row of `grid`.  Adjacent
    /// entries never differ by more than one.
    fn find_vertical_seam(&self, grid: &PixelGrid) -> Seam;
}

/// Which of the three cells above a cell its cheapest path came
/// through.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shift {
    Left,
    Centre,
    Right,
}

impl Default for Shift {
    fn default() -> Self {
        Shift::Centre
    }
}

impl Shift {
    /// The column offset, -1, 0 or +1.
    pub fn offset(self) -> isize {
        match self {
            Shift::Left => -1,
            Shift::Centre => 0,
            Shift::Right => 1,
        }
    }

    /// The column in the row above that `col` came from.
    fn parent_of(self, col: usize) -> usize {
        (col as isize + self.offset()) as usize
    }
}

// Missing neighbours at the edges simply never get a look in.  Left
// wins a tie with centre, and right has to beat both outright.
fn cheapest_parent(costs: &[f64], col: usize) -> (Shift, f64) {
    let mut best = (Shift::Centre, costs[col]);
    if col > 0 && costs[col - 1] <= best.1 {
        best = (Shift::Left, costs[col - 1]);
    }
    if col + 1 < costs.len() && costs[col + 1] < best.1 {
        best = (Shift::Right, costs[col + 1]);
    }
    best
}

fn leftmost_minimum(costs: &[f64]) -> usize {
    costs
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best_col, best), (col, &cost)| {
            if cost < best {
                (col, cost)
            } else {
                (best_col, best)
            }
        })
        .0
}

/// Given an energy map, return the column of the cheapest seam in
/// each row.
pub fn energy_to_seam(energy: &EnergyMap) -> Seam {
    let (rows, cols) = (energy.rows(), energy.cols());
    if energy.is_empty() {
        return Seam::new();
    }

    let mut shifts: TwoDimensionalMap<Shift> = TwoDimensionalMap::new(rows, cols);
    let mut costs = energy.row(0).to_vec();
    let mut next = vec![0.0; cols];

    for row in 1..rows {
        for (col, cell) in next.iter_mut().enumerate() {
            let (shift, parent) = cheapest_parent(&costs, col);
            shifts[(row, col)] = shift;
            *cell = energy[(row, col)] + parent;
        }
        mem::swap(&mut costs, &mut next);
    }

    // Working backwards from the cheapest bottom cell, follow the
    // shifts up to the top row.
    let mut seam = vec![0; rows];
    let mut col = leftmost_minimum(&costs);
    seam[rows - 1] = col;
    for row in (1..rows).rev() {
        col = shifts[(row, col)].parent_of(col);
        seam[row - 1] = col;
    }
    seam
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(rows: Vec<Vec<f64>>) -> EnergyMap {
        TwoDimensionalMap::from_rows(rows).unwrap()
    }

    fn is_continuous(seam: &[usize], cols: usize) -> bool {
        seam.iter().all(|&c| c < cols)
            && seam
                .windows(2)
                .all(|w| (w[0] as isize - w[1] as isize).abs() <= 1)
    }

    const ENERGY_DATA: [[f64; 5]; 4] = [
        [9.0, 9.0, 0.0, 9.0, 9.0],
        [9.0, 1.0, 9.0, 8.0, 9.0],
        [9.0, 9.0, 9.0, 9.0, 0.0],
        [9.0, 9.0, 9.0, 0.0, 9.0],
    ];

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energies = map(ENERGY_DATA.iter().map(|r| r.to_vec()).collect());
        assert_eq!(energy_to_seam(&energies), vec![2, 3, 4, 3]);
    }

    #[test]
    fn flat_map_gives_the_leftmost_column() {
        let energies = map(vec![vec![0.0; 3]; 3]);
        assert_eq!(energy_to_seam(&energies), vec![0, 0, 0]);
    }

    #[test]
    fn left_parent_wins_a_tie_with_centre() {
        let energies = map(vec![vec![1.0, 1.0, 5.0], vec![9.0, 0.0, 9.0]]);
        assert_eq!(energy_to_seam(&energies), vec![0, 1]);
    }

    #[test]
    fn centre_parent_wins_a_tie_with_right() {
        let energies = map(vec![vec![5.0, 1.0, 1.0], vec![9.0, 0.0, 9.0]]);
        assert_eq!(energy_to_seam(&energies), vec![1, 1]);
    }

    #[test]
    fn right_parent_has_to_be_strictly_cheaper() {
        let energies = map(vec![vec![5.0, 5.0, 1.0], vec![9.0, 0.0, 9.0]]);
        assert_eq!(energy_to_seam(&energies), vec![2, 1]);
    }

    #[test]
    fn bottom_row_tie_goes_to_the_leftmost_column() {
        let energies = map(vec![vec![0.0; 4], vec![5.0, 1.0, 5.0, 1.0]]);
        assert_eq!(energy_to_seam(&energies), vec![0, 1]);
    }

    #[test]
    fn single_row_picks_the_cheapest_cell() {
        let energies = map(vec![vec![4.0, 2.0, 3.0, 2.0]]);
        assert_eq!(energy_to_seam(&energies), vec![1]);
    }

    #[test]
    fn single_column_runs_straight_down() {
        let energies = map(vec![vec![3.0], vec![1.0], vec![2.0]]);
        assert_eq!(energy_to_seam(&energies), vec![0, 0, 0]);
    }

    #[test]
    fn seams_are_continuous() {
        // A deterministic scramble, steep enough to pull the seam around.
        let energies =
            TwoDimensionalMap::from_fn(20, 11, |r, c| ((r * 7919 + c * 104_729) % 97) as f64);
        let seam = energy_to_seam(&energies);
        assert_eq!(seam.len(), 20);
        assert!(is_continuous(&seam, 11));
    }

    #[test]
    fn shift_offsets() {
        assert_eq!(Shift::Left.offset(), -1);
        assert_eq!(Shift::Centre.offset(), 0);
        assert_eq!(Shift::Right.offset(), 1);
        assert_eq!(Shift::default(), Shift::Centre);
    }
}
