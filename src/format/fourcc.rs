// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Formatter};

use binrw::binrw;

/// A four-character code identifying a pixel format.
///
/// DDS writers also store plain D3DFMT numbers in this field, so a FourCC is not always printable.
#[binrw]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub const NONE: FourCC = FourCC([0; 4]);

    pub const DX10: FourCC = FourCC(*b"DX10");
    pub const DXT1: FourCC = FourCC(*b"DXT1");
    pub const DXT2: FourCC = FourCC(*b"DXT2");
    pub const DXT3: FourCC = FourCC(*b"DXT3");
    pub const DXT4: FourCC = FourCC(*b"DXT4");
    pub const DXT5: FourCC = FourCC(*b"DXT5");
    pub const RXGB: FourCC = FourCC(*b"RXGB");
    pub const DX1A: FourCC = FourCC(*b"DX1A");
    pub const ATI1: FourCC = FourCC(*b"ATI1");
    pub const BC4U: FourCC = FourCC(*b"BC4U");
    pub const BC4S: FourCC = FourCC(*b"BC4S");
    pub const ATI2: FourCC = FourCC(*b"ATI2");
    pub const A2XY: FourCC = FourCC(*b"A2XY");
    pub const BC5U: FourCC = FourCC(*b"BC5U");
    pub const BC5S: FourCC = FourCC(*b"BC5S");
    pub const BC6H: FourCC = FourCC(*b"BC6H");
    pub const BC7L: FourCC = FourCC(*b"BC7L");
    pub const BC70: FourCC = FourCC(*b"BC70");
    pub const ETC1: FourCC = FourCC(*b"ETC1");
    pub const ETC: FourCC = FourCC(*b"ETC ");
    pub const ETC2: FourCC = FourCC(*b"ETC2");
    pub const EC2A: FourCC = FourCC(*b"EC2A");
    pub const EAR: FourCC = FourCC(*b"EAR ");
    pub const EARG: FourCC = FourCC(*b"EARG");

    pub const RGBG: FourCC = FourCC(*b"RGBG");
    pub const GRGB: FourCC = FourCC(*b"GRGB");
    pub const UYVY: FourCC = FourCC(*b"UYVY");
    pub const YUY2: FourCC = FourCC(*b"YUY2");

    pub const fn from_u32(value: u32) -> Self {
        FourCC(value.to_le_bytes())
    }

    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub const fn is_none(self) -> bool {
        self.to_u32() == 0
    }

    /// True if the first two characters are `"AS"`, which every ASTC FourCC starts with
    pub fn is_astc_like(self) -> bool {
        self.0.starts_with(b"AS")
    }

    /// True for values too large to be a D3DFMT number, so the field most likely holds characters
    pub fn looks_like_chars(self) -> bool {
        self.to_u32() > 0x0100_0000
    }
}

impl From<u32> for FourCC {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl AsRef<[u8]> for FourCC {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Display for FourCC {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.looks_like_chars() {
            f.write_str(&String::from_utf8_lossy(self.as_ref()))
        } else {
            write!(f, "{}", self.to_u32())
        }
    }
}

impl Debug for FourCC {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match std::str::from_utf8(self.as_ref()) {
            Ok(s) if self.looks_like_chars() => write!(f, "FourCC({s:?})"),
            _ => write!(f, "FourCC({})", self.to_u32()),
        }
    }
}

/// Direct3D 9 format numbers, as they appear in the FourCC field of legacy DDS files
pub mod d3dfmt {
    use super::FourCC;

    pub const R8G8B8: FourCC = FourCC::from_u32(20);
    pub const A8R8G8B8: FourCC = FourCC::from_u32(21);
    pub const X8R8G8B8: FourCC = FourCC::from_u32(22);
    pub const R5G6B5: FourCC = FourCC::from_u32(23);
    pub const X1R5G5B5: FourCC = FourCC::from_u32(24);
    pub const A1R5G5B5: FourCC = FourCC::from_u32(25);
    pub const A4R4G4B4: FourCC = FourCC::from_u32(26);
    pub const A8: FourCC = FourCC::from_u32(28);
    pub const A8R3G3B2: FourCC = FourCC::from_u32(29);
    pub const X4R4G4B4: FourCC = FourCC::from_u32(30);
    pub const A2B10G10R10: FourCC = FourCC::from_u32(31);
    pub const A8B8G8R8: FourCC = FourCC::from_u32(32);
    pub const X8B8G8R8: FourCC = FourCC::from_u32(33);
    pub const G16R16: FourCC = FourCC::from_u32(34);
    pub const A2R10G10B10: FourCC = FourCC::from_u32(35);
    pub const A16B16G16R16: FourCC = FourCC::from_u32(36);
    pub const L8: FourCC = FourCC::from_u32(50);
    pub const A8L8: FourCC = FourCC::from_u32(51);
    pub const A4L4: FourCC = FourCC::from_u32(52);
    pub const Q8W8V8U8: FourCC = FourCC::from_u32(63);
    pub const D24S8: FourCC = FourCC::from_u32(75);
    pub const D16: FourCC = FourCC::from_u32(80);
    pub const L16: FourCC = FourCC::from_u32(81);
    pub const D32F_LOCKABLE: FourCC = FourCC::from_u32(82);
    pub const INDEX16: FourCC = FourCC::from_u32(101);
    pub const INDEX32: FourCC = FourCC::from_u32(102);
    pub const Q16W16V16U16: FourCC = FourCC::from_u32(110);
    pub const R16F: FourCC = FourCC::from_u32(111);
    pub const G16R16F: FourCC = FourCC::from_u32(112);
    pub const A16B16G16R16F: FourCC = FourCC::from_u32(113);
    pub const R32F: FourCC = FourCC::from_u32(114);
    pub const G32R32F: FourCC = FourCC::from_u32(115);
    pub const A32B32G32R32F: FourCC = FourCC::from_u32(116);
    /// Shared by D3DFMT_V8U8 and D3DFMT_CxV8U8
    pub const V8U8: FourCC = FourCC::from_u32(117);

    /// Non-standard 24-bit RGB in memory order. Gimp writes 220, dxwrapper writes 19
    pub const B8G8R8: FourCC = FourCC::from_u32(220);
    pub const B8G8R8_DXWRAPPER: FourCC = FourCC::from_u32(19);
}
