// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking.
//!
//! Repeatedly find the lowest-energy seam through an image and cut it
//! out: vertical seams to lose width, then (after one flip) the same
//! again to lose height.

pub mod error;
pub use error::{CarveError, Result};

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod pixel;
pub use pixel::Pixel;

pub mod pixelpairs;

pub mod flipper;
pub use flipper::{ImageColumns, ImageRows, PixelGrid};

pub mod energy;
pub use energy::{calculate_energy, EnergyMap, GradientEnergy};

pub mod seamfinder;
pub use seamfinder::{energy_to_seam, Seam, SeamFinder, Shift};

pub mod seamcarver;
pub use seamcarver::{remove_vertical_seam, Reduction, SeamCarver};

pub mod imageio;
pub use imageio::{load_image, save_image};

pub mod dump;
pub use dump::{energy_to_image, save_energy};
