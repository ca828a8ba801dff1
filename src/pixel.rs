// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! One RGB pixel, eight bits per channel.

use image::Rgb;

/// An immutable red, green, blue triple.  Packs to and from a 24-bit
/// integer laid out as `0xRRGGBB`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    red: u8,
    green: u8,
    blue: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    /// Unpack the low 24 bits of `rgb`; anything above them is ignored.
    pub fn from_packed(rgb: u32) -> Self {
        Pixel {
            red: ((rgb >> 16) & 0xff) as u8,
            green: ((rgb >> 8) & 0xff) as u8,
            blue: (rgb & 0xff) as u8,
        }
    }

    pub fn to_packed(self) -> u32 {
        u32::from(self.red) << 16 | u32::from(self.green) << 8 | u32::from(self.blue)
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    /// The three channels in red, green, blue order.
    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<Rgb<u8>> for Pixel {
    fn from(Rgb([red, green, blue]): Rgb<u8>) -> Self {
        Pixel { red, green, blue }
    }
}

impl From<Pixel> for Rgb<u8> {
    fn from(p: Pixel) -> Self {
        Rgb(p.channels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_channels_from_the_right_bits() {
        let p = Pixel::from_packed(0x12_34_56);
        assert_eq!((p.red(), p.green(), p.blue()), (0x12, 0x34, 0x56));
        assert_eq!(p.to_packed(), 0x12_34_56);
    }

    #[test]
    fn alpha_byte_is_dropped() {
        let p = Pixel::from_packed(0xff_ab_cd_ef);
        assert_eq!(p, Pixel::new(0xab, 0xcd, 0xef));
        assert_eq!(p.to_packed(), 0x00_ab_cd_ef);
    }

    #[test]
    fn converts_through_image_rgb() {
        let p = Pixel::new(1, 2, 3);
        let rgb: Rgb<u8> = p.into();
        assert_eq!(rgb, Rgb([1, 2, 3]));
        assert_eq!(Pixel::from(rgb), p);
    }
}
