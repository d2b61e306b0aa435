// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use anyhow::Result;
use itertools::Itertools;

use crate::error::LoadError;
use crate::format::FormatFlag;
use crate::layout::{LayoutError, LayoutIssue};
use crate::shape::CubeFace;

use super::{load, DdsHeader};

const PF_FOURCC: u32 = 0x4;
const PF_RGB: u32 = 0x40;
const PF_ALPHAPIXELS: u32 = 0x1;

/// Just enough of a DDS writer to produce test files
#[derive(Clone, Default)]
struct DdsFile {
    width: u32,
    height: u32,
    depth: u32,
    mips: u32,
    pf_flags: u32,
    fourcc: [u8; 4],
    bit_count: u32,
    masks: [u32; 4],
    caps2: u32,
    dx10: Option<[u32; 5]>,
}

impl DdsFile {
    fn fourcc(width: u32, height: u32, fourcc: &[u8; 4]) -> Self {
        Self {
            width,
            height,
            pf_flags: PF_FOURCC,
            fourcc: *fourcc,
            ..Default::default()
        }
    }

    fn dx10(width: u32, height: u32, dxgi: u32) -> Self {
        Self {
            dx10: Some([dxgi, 3, 0, 1, 0]),
            ..Self::fourcc(width, height, b"DX10")
        }
    }

    fn bgra8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pf_flags: PF_RGB | PF_ALPHAPIXELS,
            bit_count: 32,
            masks: [0xff0000, 0xff00, 0xff, 0xff000000],
            ..Default::default()
        }
    }

    fn build(&self, payload_len: usize) -> Vec<u8> {
        let mut words = vec![
            124,
            0x1007,
            self.height,
            self.width,
            0,
            self.depth,
            self.mips,
        ];
        words.extend([0; 11]);
        words.extend([32, self.pf_flags, u32::from_le_bytes(self.fourcc), self.bit_count]);
        words.extend(self.masks);
        words.extend([0x1000, self.caps2, 0, 0, 0]);
        if let Some(dx10) = self.dx10 {
            words.extend(dx10);
        }

        let mut bytes = b"DDS ".to_vec();
        bytes.extend(words.into_iter().flat_map(u32::to_le_bytes));
        bytes.extend((0..payload_len).map(|i| i as u8));
        bytes
    }
}

#[test]
fn header_lengths() {
    let legacy = DdsFile::fourcc(4, 4, b"DXT1").build(0);
    assert_eq!(legacy.len(), 128);
    assert_eq!(DdsFile::dx10(4, 4, 71).build(0).len(), 148);
}

#[test]
fn dxt1_mip_chain() -> Result<()> {
    let file = DdsFile {
        mips: 4,
        ..DdsFile::fourcc(8, 8, b"DXT1")
    }
    .build(32 + 8 + 8 + 8);
    let texture = load(&file)?;

    assert_eq!(texture.format.name, "DXT1 (BC1)");
    assert_eq!(texture.num_mips(), 4);
    assert_eq!(texture.num_elements(), 1);
    assert!(!texture.is_partial());
    assert_eq!(texture.payload_offset, 128);

    let sizes = (0..4)
        .map(|mip| texture.level_bytes(0, mip).map(<[u8]>::len))
        .collect_vec();
    assert_eq!(sizes, [Some(32), Some(8), Some(8), Some(8)]);
    assert_eq!(texture.level_bytes(0, 1).unwrap()[0], 32);
    assert_eq!(texture.level_bytes(0, 4), None);
    Ok(())
}

#[test]
fn zero_mip_count_means_one() -> Result<()> {
    let file = DdsFile::bgra8(2, 2).build(16);
    let texture = load(&file)?;
    assert_eq!(texture.format.name, "BGRA8 UNORM");
    assert_eq!(texture.num_mips(), 1);
    Ok(())
}

#[test]
fn truncated_payload() -> Result<()> {
    let file = DdsFile {
        mips: 4,
        ..DdsFile::bgra8(8, 8)
    }
    .build(256 + 64 + 3);
    let texture = load(&file)?;

    assert!(texture.is_partial());
    assert_eq!(texture.num_mips(), 2);
    assert!(matches!(
        texture.issues(),
        [LayoutIssue::Truncated {
            level: 2,
            available: 3,
            ..
        }]
    ));
    Ok(())
}

#[test]
fn empty_payload() {
    let file = DdsFile::fourcc(4, 4, b"DXT5").build(15);
    let err = load(&file).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Layout(LayoutError::Truncated {
            needed: 16,
            available: 15,
            ..
        })
    ));
}

#[test]
fn incomplete_cubemap() -> Result<()> {
    // +X, -X, +Z, -Z
    let file = DdsFile {
        caps2: 0x200 | 0x400 | 0x800 | 0x4000 | 0x8000,
        ..DdsFile::bgra8(4, 4)
    }
    .build(4 * 64);
    let texture = load(&file)?;

    assert!(texture.is_cubemap());
    assert_eq!(texture.num_cubemap_faces(), 4);
    assert_eq!(texture.num_elements(), 4);
    let faces = texture.layout.elements.iter().map(|e| e.face).collect_vec();
    assert_eq!(
        faces,
        [
            Some(CubeFace::PositiveX),
            Some(CubeFace::NegativeX),
            Some(CubeFace::PositiveZ),
            Some(CubeFace::NegativeZ)
        ]
    );
    assert_eq!(texture.level_bytes(3, 0).map(<[u8]>::len), Some(64));
    Ok(())
}

#[test]
fn cubemap_without_faces() {
    let file = DdsFile {
        caps2: 0x200,
        ..DdsFile::bgra8(4, 4)
    }
    .build(64);
    assert!(matches!(
        load(&file).unwrap_err(),
        LoadError::UnsupportedTexture(_)
    ));
}

#[test]
fn dx10_cubemap_array() -> Result<()> {
    let file = DdsFile {
        dx10: Some([28, 3, 0x4, 2, 0]),
        ..DdsFile::dx10(4, 4, 28)
    }
    .build(12 * 64);
    let texture = load(&file)?;

    assert_eq!(texture.format.name, "RGBA8 UNORM");
    assert_eq!(texture.payload_offset, 148);
    assert_eq!(texture.num_layers(), 2);
    assert_eq!(texture.num_cubemap_faces(), 6);
    assert_eq!(texture.num_elements(), 12);

    let second_layer = &texture.layout.elements[6];
    assert_eq!(
        (second_layer.layer, second_layer.face),
        (Some(1), Some(CubeFace::PositiveX))
    );
    assert_eq!(texture.level_bytes(11, 0).map(<[u8]>::len), Some(64));
    Ok(())
}

#[test]
fn dx10_srgb_flags() -> Result<()> {
    let file = DdsFile::dx10(4, 4, 99).build(16);
    let texture = load(&file)?;
    assert!(texture.flags().contains(FormatFlag::Srgb));
    assert!(texture.flags().contains(FormatFlag::HasAlpha));
    Ok(())
}

#[test]
fn dx10_alpha_mode_opaque() -> Result<()> {
    let file = DdsFile {
        dx10: Some([28, 3, 0, 1, 3]),
        ..DdsFile::dx10(1, 1, 28)
    }
    .build(4);
    let texture = load(&file)?;
    assert!(!texture.format.has_alpha());
    Ok(())
}

#[test]
fn volumes_are_rejected() {
    let dx10 = DdsFile {
        dx10: Some([28, 4, 0, 1, 0]),
        ..DdsFile::dx10(4, 4, 28)
    }
    .build(1024);
    assert!(matches!(
        load(&dx10).unwrap_err(),
        LoadError::UnsupportedTexture(_)
    ));

    let legacy = DdsFile {
        depth: 4,
        caps2: 0x200000,
        ..DdsFile::bgra8(4, 4)
    }
    .build(1024);
    assert!(matches!(
        load(&legacy).unwrap_err(),
        LoadError::UnsupportedTexture(_)
    ));
}

#[test]
fn short_headers() {
    let file = DdsFile::fourcc(4, 4, b"DXT1").build(0);
    assert!(matches!(
        DdsHeader::parse(&file[..100]),
        Err(LoadError::TruncatedHeader {
            needed: 128,
            available: 100
        })
    ));

    let file = DdsFile::dx10(4, 4, 71).build(0);
    assert!(matches!(
        DdsHeader::parse(&file[..140]),
        Err(LoadError::TruncatedHeader {
            needed: 148,
            available: 140
        })
    ));
}

#[test]
fn unknown_fourcc() {
    let file = DdsFile::fourcc(4, 4, b"NOPE").build(64);
    assert!(matches!(
        load(&file).unwrap_err(),
        LoadError::UnknownFormat { dxgi: 0, .. }
    ));
}

#[test]
fn unknown_flag_bits_are_ignored() -> Result<()> {
    let file = DdsFile {
        pf_flags: PF_FOURCC | 0x8000_0000,
        ..DdsFile::fourcc(4, 4, b"DXT1")
    }
    .build(8);
    assert_eq!(load(&file)?.format.name, "DXT1 (BC1)");
    Ok(())
}

#[test]
fn huge_array_size() -> Result<()> {
    let file = DdsFile {
        dx10: Some([71, 3, 0, u32::MAX, 0]),
        ..DdsFile::dx10(4, 4, 71)
    }
    .build(8);
    let texture = load(&file)?;
    assert_eq!(texture.num_layers(), u32::MAX as usize);
    assert_eq!(texture.num_elements(), 1);
    assert!(texture.is_partial());

    let cube_array = DdsFile {
        dx10: Some([71, 3, 0x4, u32::MAX, 0]),
        ..DdsFile::dx10(4, 4, 71)
    }
    .build(8 * 7 + 3);
    let texture = load(&cube_array)?;
    assert_eq!(texture.num_elements(), 7);
    assert_eq!(texture.layout.elements[6].face, Some(CubeFace::PositiveX));
    Ok(())
}

#[test]
fn huge_mip_count() -> Result<()> {
    let file = DdsFile {
        mips: u32::MAX,
        dx10: Some([71, 3, 0, 2, 0]),
        ..DdsFile::dx10(4, 4, 71)
    }
    .build(3 * 8);
    let texture = load(&file)?;
    assert_eq!(texture.num_mips(), 3);
    // the second layer would start past 4 billion skipped 1x1 levels
    assert_eq!(texture.num_elements(), 1);
    assert!(texture.is_partial());
    assert!(texture.issues().contains(&LayoutIssue::InconsistentMipCount {
        declared: u32::MAX,
        actual: 3
    }));
    Ok(())
}
