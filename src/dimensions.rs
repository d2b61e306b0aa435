// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter};

/// Width and height of one surface, in texels
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The dimensions of the next mip level: each axis halved, rounding down, never below 1
    pub fn next_mip(self) -> Self {
        Self {
            width: u32::max(self.width / 2, 1),
            height: u32::max(self.height / 2, 1),
        }
    }

    /// True for a 1x1 surface, the end of any mip chain
    pub fn is_smallest(self) -> bool {
        self.width <= 1 && self.height <= 1
    }

    /// Iterate over the natural mip chain starting at `self`, ending with the first 1x1 level
    pub fn mips(self) -> MipDimensionIterator {
        MipDimensionIterator {
            current: Some(self),
        }
    }
}

impl From<[u32; 2]> for Dimensions {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

pub trait Dimensioned {
    fn dimensions(&self) -> Dimensions;
}

pub struct MipDimensionIterator {
    current: Option<Dimensions>,
}

impl Iterator for MipDimensionIterator {
    type Item = Dimensions;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = if current.is_smallest() {
            None // after mips are all 1, the chain terminates
        } else {
            Some(current.next_mip())
        };

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::Dimensions;

    #[test]
    fn odd_width_chain() {
        let widths = Dimensions::new(257, 1).mips().map(|d| d.width).collect_vec();
        assert_eq!(widths, [257, 128, 64, 32, 16, 8, 4, 2, 1]);
    }

    #[test]
    fn non_square_chain() {
        let chain = Dimensions::new(8, 2).mips().collect_vec();
        assert_eq!(
            chain,
            [
                Dimensions::new(8, 2),
                Dimensions::new(4, 1),
                Dimensions::new(2, 1),
                Dimensions::new(1, 1)
            ]
        );
    }

    #[test]
    fn single_texel() {
        assert_eq!(Dimensions::new(1, 1).mips().count(), 1);
    }
}
