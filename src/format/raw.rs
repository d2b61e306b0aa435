// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use binrw::BinRead;
use enumflags2::{bitflags, BitFlags};
use strum::FromRepr;

use crate::format::FourCC;

#[bitflags]
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormatFlags {
    AlphaPixels = 0x1,
    Alpha = 0x2,
    FourCC = 0x4,
    PaletteIndexed8 = 0x20,
    RGB = 0x40,
    YUV = 0x200,
    Luminance = 0x20000,
}

impl PixelFormatFlags {
    /// The flags that decide which mask-table rows can match
    pub const MASK_SIGNATURE: BitFlags<PixelFormatFlags> = enumflags2::make_bitflags!(
        PixelFormatFlags::{AlphaPixels | Alpha | RGB | Luminance}
    );
}

/// The DX10 header's alpha mode, stored in the low 3 bits of `miscFlags2`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, FromRepr)]
#[repr(u8)]
pub enum AlphaMode {
    #[default]
    Unknown = 0,
    Straight = 1,
    Premultiplied = 2,
    Opaque = 3,
    Custom = 4,
}

pub const RESOURCE_DIMENSION_TEXTURE3D: u32 = 4;
pub const MISC_FLAG_TEXTURECUBE: u32 = 0x4;

/// Fields of the 20-byte DX10 extension header, kept raw
#[derive(BinRead, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[br(little)]
pub struct Dx10Fields {
    pub dxgi: u32,
    pub resource_dimension: u32,
    pub misc_flag: u32,
    pub array_size: u32,
    /// Low 3 bits of `miscFlags2`
    #[br(map = |flags: u32| (flags & 0x7) as u8)]
    pub alpha_mode: u8,
}

impl Dx10Fields {
    pub fn is_cube(&self) -> bool {
        self.misc_flag & MISC_FLAG_TEXTURECUBE != 0
    }

    pub fn is_volume(&self) -> bool {
        self.resource_dimension == RESOURCE_DIMENSION_TEXTURE3D
    }

    /// The alpha mode, if the file names one that exists
    pub fn alpha_mode(&self) -> Option<AlphaMode> {
        AlphaMode::from_repr(self.alpha_mode)
    }
}

/// A container's self-declared pixel format signature, before any table lookup
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RawPixelFormat {
    pub flags: BitFlags<PixelFormatFlags>,
    pub fourcc: FourCC,
    pub bit_count: u32,
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
    pub a_mask: u32,
    pub dx10: Option<Dx10Fields>,
}

impl RawPixelFormat {
    /// A signature carrying only a FourCC (or D3DFMT number) with the FourCC flag set
    pub fn from_fourcc(fourcc: FourCC) -> Self {
        Self {
            flags: PixelFormatFlags::FourCC.into(),
            fourcc,
            ..Default::default()
        }
    }

    /// A `"DX10"` signature carrying a DXGI number and alpha mode
    pub fn from_dxgi(dxgi: u32, alpha_mode: AlphaMode) -> Self {
        Self {
            flags: PixelFormatFlags::FourCC.into(),
            fourcc: FourCC::DX10,
            dx10: Some(Dx10Fields {
                dxgi,
                resource_dimension: 3,
                alpha_mode: alpha_mode as u8,
                array_size: 1,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// A signature described only by bit count, flags and channel masks
    pub fn from_masks(
        flags: BitFlags<PixelFormatFlags>,
        bit_count: u32,
        [r_mask, g_mask, b_mask, a_mask]: [u32; 4],
    ) -> Self {
        Self {
            flags,
            bit_count,
            r_mask,
            g_mask,
            b_mask,
            a_mask,
            ..Default::default()
        }
    }

    /// The DXGI number, or 0 when the file has no DX10 header
    pub fn dxgi(&self) -> u32 {
        self.dx10.map_or(0, |dx10| dx10.dxgi)
    }

    /// The raw alpha-mode bits, or 0 when the file has no DX10 header
    pub fn alpha_mode_bits(&self) -> u8 {
        self.dx10.map_or(0, |dx10| dx10.alpha_mode)
    }

    pub fn is_dx10(&self) -> bool {
        self.fourcc == FourCC::DX10
    }
}
