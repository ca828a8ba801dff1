// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between their colors, channel by channel:
//!
//! ```text
//!     |Δ|² = (Δr)² + (Δg)² + (Δb)²
//! ```

use crate::pixel::Pixel;
use itertools::zip;
use num_traits::pow;

/// (Pixel, Pixel) -> Energy
///
/// Sum of the squared per-channel differences.  At most
/// 3 × 255², so it always fits.
#[inline]
pub fn energy_of_pair(p1: Pixel, p2: Pixel) -> u32 {
    zip(p1.channels().iter(), p2.channels().iter())
        .map(|(c1, c2)| pow(i32::from(*c1) - i32::from(*c2), 2) as u32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_pixels_have_no_energy() {
        let p = Pixel::new(12, 200, 7);
        assert_eq!(energy_of_pair(p, p), 0);
    }

    #[test]
    fn channels_are_squared_and_summed() {
        let (a, b) = (Pixel::new(10, 20, 30), Pixel::new(13, 16, 30));
        assert_eq!(energy_of_pair(a, b), 9 + 16);
        assert_eq!(energy_of_pair(b, a), 9 + 16);
    }

    #[test]
    fn black_to_white_is_the_maximum() {
        let (black, white) = (Pixel::new(0, 0, 0), Pixel::new(255, 255, 255));
        assert_eq!(energy_of_pair(black, white), 3 * 255 * 255);
    }
}
