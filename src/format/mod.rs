// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Canonical pixel format descriptions and the tables and resolver that produce them

use std::fmt::Formatter;

use enumflags2::{bitflags, BitFlags};
use strum::Display;

mod dxgi;
mod fourcc;
mod raw;
pub mod resolve;
pub mod tables;

pub use dxgi::DxgiFormat;
pub use fourcc::{d3dfmt, FourCC};
pub use raw::{AlphaMode, Dx10Fields, PixelFormatFlags, RawPixelFormat};
pub use resolve::resolve;

#[bitflags]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatFlag {
    Srgb = 0x1,
    Typeless = 0x2,
    PremultipliedAlpha = 0x4,
    HasAlpha = 0x8,
}

/// A block-compressed encoding with a fixed 4x4 footprint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum BlockKind {
    BC1,
    BC2,
    BC3,
    /// BC3 with red moved into the alpha block, as used for Doom 3 normal maps
    #[strum(serialize = "BC3 RXGB")]
    BC3Rxgb,
    BC4 {
        signed: bool,
    },
    BC5 {
        signed: bool,
    },
    /// BC5 with the two channels in Y, X order (`ATI2`)
    #[strum(serialize = "BC5 YX")]
    BC5Swapped,
    BC6H {
        signed: bool,
    },
    BC7,
    ETC1,
    ETC2,
    #[strum(serialize = "ETC2 RGBA")]
    ETC2Alpha,
    #[strum(serialize = "EAC R11")]
    EacR11,
    #[strum(serialize = "EAC RG11")]
    EacRg11,
    /// A compressed format recognized by its container but not by this crate
    Opaque,
}

impl BlockKind {
    /// Size of one 4x4 block in bytes. [`None`] for [`BlockKind::Opaque`]
    pub fn bytes(self) -> Option<u32> {
        use BlockKind::*;
        match self {
            BC1 | BC4 { .. } | ETC1 | ETC2 | EacR11 => Some(8),
            BC2 | BC3 | BC3Rxgb | BC5 { .. } | BC5Swapped | BC6H { .. } | BC7 | ETC2Alpha
            | EacRg11 => Some(16),
            Opaque => None,
        }
    }

    /// Block footprint in texels
    pub fn footprint(self) -> [u32; 2] {
        [4, 4]
    }
}

/// Order and presence of channels in an uncompressed pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ChannelLayout {
    R,
    RG,
    RGB,
    BGR,
    RGBA,
    BGRA,
    RGBX,
    BGRX,
    Luminance,
    LuminanceAlpha,
    Alpha,
    Depth,
    DepthStencil,
    /// Two pixels share one 4-byte group, like `RGBG` or `YUY2`
    Packed422,
    /// A layout only the container understands
    Opaque,
}

impl ChannelLayout {
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            ChannelLayout::RGBA
                | ChannelLayout::BGRA
                | ChannelLayout::LuminanceAlpha
                | ChannelLayout::Alpha
        )
    }
}

/// Numeric interpretation of an uncompressed format's components
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ComponentType {
    UNorm,
    SNorm,
    UInt,
    SInt,
    Float,
    /// Floats sharing one exponent, like RGB9E5
    SharedExponent,
    Typeless,
    Opaque,
}

/// The encoding family of a format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Compressed {
        block: BlockKind,
    },
    Uncompressed {
        layout: ChannelLayout,
        component: ComponentType,
        bits_per_pixel: u32,
    },
    Astc {
        block_width: u32,
        block_height: u32,
    },
}

/// Selects the formula used to compute the byte size of one mip level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeRule {
    /// 4x4 blocks of 8 bytes
    Block8,
    /// 4x4 blocks of 16 bytes
    Block16,
    /// 16-byte blocks with a variable footprint
    Astc { block_width: u32, block_height: u32 },
    /// Two pixels per 4 bytes
    PackedPairs,
    Bits(u32),
}

/// The canonical description of a texture's pixel encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    pub name: &'static str,
    pub kind: FormatKind,
    pub flags: BitFlags<FormatFlag>,
}

impl FormatDescriptor {
    pub const fn compressed(
        name: &'static str,
        block: BlockKind,
        flags: BitFlags<FormatFlag>,
    ) -> Self {
        Self {
            name,
            kind: FormatKind::Compressed { block },
            flags,
        }
    }

    pub const fn uncompressed(
        name: &'static str,
        layout: ChannelLayout,
        component: ComponentType,
        bits_per_pixel: u32,
        flags: BitFlags<FormatFlag>,
    ) -> Self {
        Self {
            name,
            kind: FormatKind::Uncompressed {
                layout,
                component,
                bits_per_pixel,
            },
            flags,
        }
    }

    pub const fn astc(
        name: &'static str,
        block_width: u32,
        block_height: u32,
        flags: BitFlags<FormatFlag>,
    ) -> Self {
        Self {
            name,
            kind: FormatKind::Astc {
                block_width,
                block_height,
            },
            flags,
        }
    }

    pub fn is_compressed(&self) -> bool {
        !matches!(self.kind, FormatKind::Uncompressed { .. })
    }

    pub fn is_srgb(&self) -> bool {
        self.flags.contains(FormatFlag::Srgb)
    }

    pub fn has_alpha(&self) -> bool {
        self.flags.contains(FormatFlag::HasAlpha)
    }

    pub fn is_premultiplied(&self) -> bool {
        self.flags.contains(FormatFlag::PremultipliedAlpha)
    }

    pub fn is_typeless(&self) -> bool {
        self.flags.contains(FormatFlag::Typeless)
    }

    /// The per-level size formula, or [`None`] if the block size is unknown
    pub fn size_rule(&self) -> Option<SizeRule> {
        match self.kind {
            FormatKind::Compressed { block } => match block.bytes()? {
                8 => Some(SizeRule::Block8),
                _ => Some(SizeRule::Block16),
            },
            FormatKind::Astc {
                block_width,
                block_height,
            } => Some(SizeRule::Astc {
                block_width,
                block_height,
            }),
            FormatKind::Uncompressed {
                layout: ChannelLayout::Packed422,
                ..
            } => Some(SizeRule::PackedPairs),
            FormatKind::Uncompressed { bits_per_pixel, .. } => {
                (bits_per_pixel > 0).then_some(SizeRule::Bits(bits_per_pixel))
            }
        }
    }
}

impl std::fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)?;
        for flag in self.flags.iter() {
            write!(f, " [{flag:?}]")?;
        }
        Ok(())
    }
}
