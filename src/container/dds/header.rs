// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Cursor;

use binrw::{binread, BinRead};
use enumflags2::{bitflags, BitFlags};

use crate::dimensions::Dimensions;
use crate::error::{LoadError, LoadResult};
use crate::format::{Dx10Fields, FourCC, PixelFormatFlags, RawPixelFormat};
use crate::shape::{CubeFace, CubeFaceMask};

/// Magic, 124-byte header and trailing reserved word
pub(super) const HEADER_LEN: usize = 128;
/// [`HEADER_LEN`] plus the 20-byte DX10 extension
pub(super) const DX10_HEADER_LEN: usize = HEADER_LEN + 20;

const FOURCC_OFFSET: usize = 84;

#[bitflags]
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Caps2 {
    Cubemap = 0x200,
    CubemapPositiveX = 0x400,
    CubemapNegativeX = 0x800,
    CubemapPositiveY = 0x1000,
    CubemapNegativeY = 0x2000,
    CubemapPositiveZ = 0x4000,
    CubemapNegativeZ = 0x8000,
    Volume = 0x200000,
}

impl Caps2 {
    fn to_cubemap_face(self) -> Option<CubeFace> {
        use Caps2::*;
        match self {
            CubemapPositiveX => Some(CubeFace::PositiveX),
            CubemapNegativeX => Some(CubeFace::NegativeX),
            CubemapPositiveY => Some(CubeFace::PositiveY),
            CubemapNegativeY => Some(CubeFace::NegativeY),
            CubemapPositiveZ => Some(CubeFace::PositiveZ),
            CubemapNegativeZ => Some(CubeFace::NegativeZ),
            Cubemap | Volume => None,
        }
    }
}

/// The embedded 32-byte `DDS_PIXELFORMAT`
#[binread]
#[derive(Debug, Copy, Clone)]
#[br(little)]
struct PixelFormatBlock {
    // real writers get the size wrong, so it is not checked
    #[br(temp)]
    _size: u32,
    #[br(map = |bits: u32| BitFlags::from_bits_truncate(bits))]
    flags: BitFlags<PixelFormatFlags>,
    fourcc: FourCC,
    bit_count: u32,
    masks: [u32; 4],
}

/// The header exactly as stored on disk
#[binread]
#[derive(Debug, Copy, Clone)]
#[br(little, magic = b"DDS ")]
struct DdsHeaderIntermediate {
    #[br(temp)]
    _size: u32,
    #[br(temp)]
    _flags: u32,
    height: u32,
    width: u32,
    #[br(temp)]
    _pitch_or_linear_size: u32,
    depth: u32,
    mipmap_count: u32,
    #[br(pad_before = 44)]
    pixel_format: PixelFormatBlock,
    #[br(temp)]
    _caps1: u32,
    #[br(map = |bits: u32| BitFlags::from_bits_truncate(bits))]
    caps2: BitFlags<Caps2>,
    #[br(temp, pad_after = 4)]
    _caps3_4: [u32; 2],
    #[br(if(pixel_format.fourcc == FourCC::DX10))]
    dx10: Option<Dx10Fields>,
}

impl DdsHeaderIntermediate {
    fn raw_pixel_format(&self) -> RawPixelFormat {
        let pf = &self.pixel_format;
        let [r_mask, g_mask, b_mask, a_mask] = pf.masks;
        RawPixelFormat {
            flags: pf.flags,
            fourcc: pf.fourcc,
            bit_count: pf.bit_count,
            r_mask,
            g_mask,
            b_mask,
            a_mask,
            dx10: self.dx10,
        }
    }
}

/// A decoded DDS header, split by which kind of header the file carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdsHeader {
    Legacy {
        dimensions: Dimensions,
        mip_count: u32,
        faces: Option<CubeFaceMask>,
        pixel_format: RawPixelFormat,
    },
    Dx10 {
        dimensions: Dimensions,
        mip_count: u32,
        layers: Option<u32>,
        is_cubemap: bool,
        pixel_format: RawPixelFormat,
    },
}

impl DdsHeader {
    /// Check the buffer is long enough, then decode the header at its start
    pub fn parse(bytes: &[u8]) -> LoadResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(LoadError::TruncatedHeader {
                needed: HEADER_LEN,
                available: bytes.len(),
            });
        }
        let is_dx10 = bytes[FOURCC_OFFSET..FOURCC_OFFSET + 4] == FourCC::DX10.0;
        if is_dx10 && bytes.len() < DX10_HEADER_LEN {
            return Err(LoadError::TruncatedHeader {
                needed: DX10_HEADER_LEN,
                available: bytes.len(),
            });
        }

        let raw = DdsHeaderIntermediate::read(&mut Cursor::new(bytes))?;
        Self::from_intermediate(raw)
    }

    pub fn dimensions(&self) -> Dimensions {
        match self {
            DdsHeader::Legacy { dimensions, .. } | DdsHeader::Dx10 { dimensions, .. } => *dimensions,
        }
    }

    pub fn mip_count(&self) -> u32 {
        match self {
            DdsHeader::Legacy { mip_count, .. } | DdsHeader::Dx10 { mip_count, .. } => *mip_count,
        }
    }

    pub fn layers(&self) -> Option<u32> {
        match self {
            DdsHeader::Dx10 { layers, .. } => *layers,
            DdsHeader::Legacy { .. } => None,
        }
    }

    pub fn faces(&self) -> Option<CubeFaceMask> {
        match self {
            DdsHeader::Legacy { faces, .. } => *faces,
            DdsHeader::Dx10 { is_cubemap, .. } => is_cubemap.then(BitFlags::all),
        }
    }

    pub fn pixel_format(&self) -> &RawPixelFormat {
        match self {
            DdsHeader::Legacy { pixel_format, .. } | DdsHeader::Dx10 { pixel_format, .. } => {
                pixel_format
            }
        }
    }

    /// Offset of the first byte of pixel data
    pub fn payload_offset(&self) -> usize {
        match self {
            DdsHeader::Legacy { .. } => HEADER_LEN,
            DdsHeader::Dx10 { .. } => DX10_HEADER_LEN,
        }
    }
}

impl DdsHeader {
    fn from_intermediate(raw: DdsHeaderIntermediate) -> LoadResult<Self> {
        let dimensions = Dimensions::new(raw.width, raw.height);
        let mip_count = raw.mipmap_count.max(1);
        let pixel_format = raw.raw_pixel_format();

        if let Some(dx10) = raw.dx10 {
            if dx10.is_volume() {
                return Err(LoadError::UnsupportedTexture(
                    "3D textures are not supported".into(),
                ));
            }
            let layers = match dx10.array_size {
                0 | 1 => None,
                l => Some(l),
            };

            Ok(DdsHeader::Dx10 {
                dimensions,
                mip_count,
                layers,
                is_cubemap: dx10.is_cube(),
                pixel_format,
            })
        } else {
            if raw.caps2.contains(Caps2::Volume) && raw.depth > 1 {
                return Err(LoadError::UnsupportedTexture(format!(
                    "3D textures are not supported (depth {})",
                    raw.depth
                )));
            }

            let faces = if raw.caps2.contains(Caps2::Cubemap) {
                let faces: CubeFaceMask = raw
                    .caps2
                    .iter()
                    .filter_map(Caps2::to_cubemap_face)
                    .collect();
                if faces.is_empty() {
                    return Err(LoadError::UnsupportedTexture(
                        "cubemap flag is set, but no faces are present".into(),
                    ));
                }
                Some(faces)
            } else {
                None
            };

            Ok(DdsHeader::Legacy {
                dimensions,
                mip_count,
                faces,
                pixel_format,
            })
        }
    }
}
