// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use arrayvec::ArrayVec;
use enumflags2::{bitflags, BitFlags};
use itertools::Itertools;
use strum::{Display, VariantArray};

/// One face of a cubemap. Declaration order is the order faces are stored in files
#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, VariantArray, Display)]
pub enum CubeFace {
    #[strum(serialize = "+X")]
    PositiveX = 0x01,
    #[strum(serialize = "-X")]
    NegativeX = 0x02,
    #[strum(serialize = "+Y")]
    PositiveY = 0x04,
    #[strum(serialize = "-Y")]
    NegativeY = 0x08,
    #[strum(serialize = "+Z")]
    PositiveZ = 0x10,
    #[strum(serialize = "-Z")]
    NegativeZ = 0x20,
}

/// The set of faces present in a cubemap. All six make a full cube, fewer an incomplete one
pub type CubeFaceMask = BitFlags<CubeFace>;

/// The faces in `mask`, in storage order
pub fn faces_in_order(mask: CubeFaceMask) -> ArrayVec<CubeFace, 6> {
    CubeFace::VARIANTS
        .iter()
        .copied()
        .filter(|face| mask.contains(*face))
        .collect()
}

/// The (layer, face) pair of every element of a texture, layers outer and faces inner.
///
/// A texture without an array structure yields `None` for the layer,
/// and one without a cubemap structure yields `None` for the face,
/// so a plain 2D texture produces exactly one `(None, None)` element.
pub fn element_indices(
    layers: Option<u32>,
    faces: Option<CubeFaceMask>,
) -> impl Iterator<Item = (Option<u32>, Option<CubeFace>)> {
    let faces: ArrayVec<Option<CubeFace>, 6> = faces
        .map(faces_in_order)
        .into_iter()
        .flatten()
        .map(Some)
        .pad_using(1, |_| None) // ensure at least one item is returned
        .collect();

    layers
        .into_iter()
        .flat_map(|l| 0..l)
        .map(Some)
        .pad_using(1, |_| None)
        .cartesian_product(faces)
}

#[cfg(test)]
mod tests {
    use enumflags2::make_bitflags;
    use itertools::Itertools;

    use super::*;

    #[test]
    fn storage_order() {
        let mask = make_bitflags!(CubeFace::{NegativeZ | PositiveX | PositiveY});
        assert_eq!(
            faces_in_order(mask).as_slice(),
            [CubeFace::PositiveX, CubeFace::PositiveY, CubeFace::NegativeZ]
        );
    }

    #[test]
    fn plain_texture() {
        assert_eq!(element_indices(None, None).collect_vec(), [(None, None)]);
    }

    #[test]
    fn array_of_cubes() {
        let elements = element_indices(Some(2), Some(BitFlags::all())).collect_vec();
        assert_eq!(elements.len(), 12);
        assert_eq!(elements[0], (Some(0), Some(CubeFace::PositiveX)));
        assert_eq!(elements[5], (Some(0), Some(CubeFace::NegativeZ)));
        assert_eq!(elements[6], (Some(1), Some(CubeFace::PositiveX)));
    }

    #[test]
    fn array_without_faces() {
        let elements = element_indices(Some(3), None).collect_vec();
        assert_eq!(elements, [(Some(0), None), (Some(1), None), (Some(2), None)]);
    }

    #[test]
    fn face_names() {
        assert_eq!(CubeFace::NegativeY.to_string(), "-Y");
    }
}
