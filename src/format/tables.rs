// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Ordered lookup tables from container format signatures to [`FormatDescriptor`]s.
//!
//! Row order matters: every lookup takes the first row that matches.

use enumflags2::{make_bitflags, BitFlags};

use crate::format::d3dfmt;
use crate::format::BlockKind::*;
use crate::format::ChannelLayout::*;
use crate::format::ComponentType::*;
use crate::format::{
    AlphaMode, BlockKind, ChannelLayout, ComponentType, DxgiFormat, FormatDescriptor, FormatFlag,
    FourCC, PixelFormatFlags,
};

const NONE: BitFlags<FormatFlag> = BitFlags::EMPTY;
const ALPHA: BitFlags<FormatFlag> = make_bitflags!(FormatFlag::{HasAlpha});
const PREMUL: BitFlags<FormatFlag> = make_bitflags!(FormatFlag::{HasAlpha | PremultipliedAlpha});
const SRGB: BitFlags<FormatFlag> = make_bitflags!(FormatFlag::{Srgb});
const SRGB_ALPHA: BitFlags<FormatFlag> = make_bitflags!(FormatFlag::{Srgb | HasAlpha});
const TYPELESS: BitFlags<FormatFlag> = make_bitflags!(FormatFlag::{Typeless});
const TYPELESS_ALPHA: BitFlags<FormatFlag> = make_bitflags!(FormatFlag::{Typeless | HasAlpha});

const PF_NONE: BitFlags<PixelFormatFlags> = BitFlags::EMPTY;
const PF_ALPHAPIXELS: BitFlags<PixelFormatFlags> = make_bitflags!(PixelFormatFlags::{AlphaPixels});

/// A block-compressed format keyed by FourCC and DXGI number
#[derive(Debug, Clone, Copy)]
pub struct CompressedRow {
    pub fourcc: FourCC,
    pub dxgi: DxgiFormat,
    /// Pixel format flags the file must have for this row to match
    pub required_flags: BitFlags<PixelFormatFlags>,
    /// Alpha mode this row is specific to. [`AlphaMode::Unknown`] matches any
    pub alpha_mode: AlphaMode,
    pub format: FormatDescriptor,
}

const fn bc(fourcc: FourCC, name: &'static str, block: BlockKind, flags: BitFlags<FormatFlag>) -> CompressedRow {
    CompressedRow {
        fourcc,
        dxgi: DxgiFormat::Unknown,
        required_flags: PF_NONE,
        alpha_mode: AlphaMode::Unknown,
        format: FormatDescriptor::compressed(name, block, flags),
    }
}

const fn bc_dx10(dxgi: DxgiFormat, name: &'static str, block: BlockKind, flags: BitFlags<FormatFlag>) -> CompressedRow {
    CompressedRow {
        fourcc: FourCC::DX10,
        dxgi,
        required_flags: PF_NONE,
        alpha_mode: AlphaMode::Unknown,
        format: FormatDescriptor::compressed(name, block, flags),
    }
}

const fn bc_dx10_opaque(dxgi: DxgiFormat, name: &'static str, block: BlockKind, flags: BitFlags<FormatFlag>) -> CompressedRow {
    CompressedRow {
        alpha_mode: AlphaMode::Opaque,
        ..bc_dx10(dxgi, name, block, flags)
    }
}

pub static COMPRESSED: &[CompressedRow] = &[
    // DXT1 is ambiguous, the alpha-pixels flag picks the 1-bit alpha variant
    CompressedRow {
        required_flags: PF_ALPHAPIXELS,
        ..bc(FourCC::DXT1, "DXT1 (BC1) w/ alpha", BC1, ALPHA)
    },
    bc(FourCC::DXT1, "DXT1 (BC1)", BC1, NONE),
    bc(FourCC::DXT3, "DXT3 (BC2)", BC2, ALPHA),
    bc(FourCC::DXT2, "DXT2 (BC2 alpha premul)", BC2, PREMUL),
    bc(FourCC::DXT5, "DXT5 (BC3)", BC3, ALPHA),
    bc(FourCC::DXT4, "DXT4 (BC3 alpha premul)", BC3, PREMUL),
    bc(FourCC::RXGB, "DXT5 (BC3) RXGB (xGBR)", BC3Rxgb, NONE),
    bc(FourCC::DX1A, "DXT1A (BC1 w/ alpha)", BC1, ALPHA),
    // 3Dc family
    bc(FourCC::ATI1, "ATI1n aka 3Dc+ (BC4/RGTC1)", BC4 { signed: false }, NONE),
    bc(FourCC::BC4U, "BC4U (ATI1n/3Dc+/RGTC1)", BC4 { signed: false }, NONE),
    bc(FourCC::BC4S, "BC4S (ATI1n/3Dc+/RGTC1)", BC4 { signed: true }, NONE),
    bc(FourCC::BC5U, "BC5U aka 3Dc (BC5/RGTC2 XY)", BC5 { signed: false }, NONE),
    bc(FourCC::A2XY, "ATI2n aka 3Dc (BC5/RGTC2 XY)", BC5 { signed: false }, NONE),
    bc(FourCC::ATI2, "ATI2n aka 3Dc (BC5/RGTC2 YX)", BC5Swapped, NONE),
    bc(FourCC::BC5S, "BC5S (ATI2n/3Dc/RGTC2)", BC5 { signed: true }, NONE),
    // BC1-5 through DXGI
    bc_dx10_opaque(DxgiFormat::BC1UNorm, "BC1 (DXT1) opaque", BC1, NONE),
    bc_dx10(DxgiFormat::BC1UNorm, "BC1 (DXT1)", BC1, ALPHA),
    bc_dx10_opaque(DxgiFormat::BC1UNormSRGB, "BC1 (DXT1) sRGB opaque", BC1, SRGB),
    bc_dx10(DxgiFormat::BC1UNormSRGB, "BC1 (DXT1) sRGB", BC1, SRGB_ALPHA),
    bc_dx10_opaque(DxgiFormat::BC1Typeless, "BC1 (DXT1) typeless opaque", BC1, TYPELESS),
    bc_dx10(DxgiFormat::BC1Typeless, "BC1 (DXT1) typeless", BC1, TYPELESS_ALPHA),
    bc_dx10(DxgiFormat::BC2UNorm, "BC2 (DXT3)", BC2, ALPHA),
    bc_dx10(DxgiFormat::BC2UNormSRGB, "BC2 (DXT3) sRGB", BC2, SRGB_ALPHA),
    bc_dx10(DxgiFormat::BC2Typeless, "BC2 (DXT3) typeless", BC2, TYPELESS_ALPHA),
    bc_dx10(DxgiFormat::BC3UNorm, "BC3 (DXT5)", BC3, ALPHA),
    bc_dx10(DxgiFormat::BC3UNormSRGB, "BC3 (DXT5) sRGB", BC3, SRGB_ALPHA),
    bc_dx10(DxgiFormat::BC3Typeless, "BC3 (DXT5) typeless", BC3, TYPELESS_ALPHA),
    bc_dx10(DxgiFormat::BC4UNorm, "BC4U (ATI1n/3Dc+/RGTC1)", BC4 { signed: false }, NONE),
    bc_dx10(DxgiFormat::BC4SNorm, "BC4S (ATI1n/3Dc+/RGTC1)", BC4 { signed: true }, NONE),
    bc_dx10(DxgiFormat::BC4Typeless, "BC4 (ATI1n/3Dc+/RGTC1) typeless", BC4 { signed: false }, TYPELESS),
    bc_dx10(DxgiFormat::BC5UNorm, "BC5U (ATI2n/3Dc/RGTC2)", BC5 { signed: false }, NONE),
    bc_dx10(DxgiFormat::BC5SNorm, "BC5S (ATI2n/3Dc/RGTC2)", BC5 { signed: true }, NONE),
    bc_dx10(DxgiFormat::BC5Typeless, "BC5 (ATI2n/3Dc/RGTC2) typeless", BC5 { signed: false }, TYPELESS),
    // BPTC
    bc_dx10(DxgiFormat::BC6HSF16, "BC6S (BPTC HDR)", BC6H { signed: true }, NONE),
    bc_dx10(DxgiFormat::BC6HUF16, "BC6U (BPTC HDR)", BC6H { signed: false }, NONE),
    bc_dx10(DxgiFormat::BC6HTypeless, "BC6 (BPTC HDR) typeless", BC6H { signed: false }, TYPELESS),
    bc(FourCC::BC6H, "BC6U (BPTC HDR)", BC6H { signed: false }, NONE),
    bc_dx10(DxgiFormat::BC7UNorm, "BC7 (BPTC)", BC7, ALPHA),
    bc_dx10(DxgiFormat::BC7UNormSRGB, "BC7 SRGB (BPTC)", BC7, SRGB_ALPHA),
    bc_dx10(DxgiFormat::BC7Typeless, "BC7 (BPTC) typeless", BC7, TYPELESS_ALPHA),
    bc(FourCC::BC7L, "BC7 (BPTC)", BC7, ALPHA),
    bc(FourCC::BC70, "BC7 (BPTC)", BC7, ALPHA),
    // ETC and EAC
    bc(FourCC::ETC1, "ETC1", ETC1, NONE),
    bc(FourCC::ETC, "ETC1", ETC1, NONE),
    bc(FourCC::ETC2, "ETC2", ETC2, NONE),
    bc(FourCC::EC2A, "ETC2 with Alpha", ETC2Alpha, ALPHA),
    bc(FourCC::EAR, "EAC R11", EacR11, NONE),
    bc(FourCC::EARG, "EAC RG11", EacRg11, NONE),
];

/// An ASTC format keyed by FourCC and DXGI number
#[derive(Debug, Clone, Copy)]
pub struct AstcRow {
    pub fourcc: FourCC,
    pub dxgi: DxgiFormat,
    pub format: FormatDescriptor,
}

/// Four rows per block size: typeless, UNORM, the `AS??` FourCC and sRGB
macro_rules! astc_rows {
    ($(($w:literal, $h:literal, $fourcc:literal, $typeless:ident, $unorm:ident, $srgb:ident)),+ $(,)?) => {
        &[$(
            AstcRow {
                fourcc: FourCC::DX10,
                dxgi: DxgiFormat::$typeless,
                format: FormatDescriptor::astc(
                    concat!("ASTC ", $w, "x", $h, " typeless"), $w, $h, TYPELESS_ALPHA,
                ),
            },
            AstcRow {
                fourcc: FourCC::DX10,
                dxgi: DxgiFormat::$unorm,
                format: FormatDescriptor::astc(concat!("ASTC ", $w, "x", $h, " UNORM"), $w, $h, ALPHA),
            },
            AstcRow {
                fourcc: FourCC(*$fourcc),
                dxgi: DxgiFormat::Unknown,
                format: FormatDescriptor::astc(concat!("ASTC ", $w, "x", $h, " UNORM"), $w, $h, ALPHA),
            },
            AstcRow {
                fourcc: FourCC::DX10,
                dxgi: DxgiFormat::$srgb,
                format: FormatDescriptor::astc(
                    concat!("ASTC ", $w, "x", $h, " UNORM SRGB"), $w, $h, SRGB_ALPHA,
                ),
            },
        )+]
    };
}

const fn astc_alt(fourcc: &[u8; 4], name: &'static str, w: u32, h: u32) -> AstcRow {
    AstcRow {
        fourcc: FourCC(*fourcc),
        dxgi: DxgiFormat::Unknown,
        format: FormatDescriptor::astc(name, w, h, ALPHA),
    }
}

static ASTC_MAIN: &[AstcRow] = astc_rows![
    (4, 4, b"AS44", Astc4x4Typeless, Astc4x4UNorm, Astc4x4UNormSRGB),
    (5, 4, b"AS54", Astc5x4Typeless, Astc5x4UNorm, Astc5x4UNormSRGB),
    (5, 5, b"AS55", Astc5x5Typeless, Astc5x5UNorm, Astc5x5UNormSRGB),
    (6, 5, b"AS65", Astc6x5Typeless, Astc6x5UNorm, Astc6x5UNormSRGB),
    (6, 6, b"AS66", Astc6x6Typeless, Astc6x6UNorm, Astc6x6UNormSRGB),
    (8, 5, b"AS85", Astc8x5Typeless, Astc8x5UNorm, Astc8x5UNormSRGB),
    (8, 6, b"AS86", Astc8x6Typeless, Astc8x6UNorm, Astc8x6UNormSRGB),
    (8, 8, b"AS88", Astc8x8Typeless, Astc8x8UNorm, Astc8x8UNormSRGB),
    (10, 5, b"ASA5", Astc10x5Typeless, Astc10x5UNorm, Astc10x5UNormSRGB),
    (10, 6, b"ASA6", Astc10x6Typeless, Astc10x6UNorm, Astc10x6UNormSRGB),
    (10, 8, b"ASA8", Astc10x8Typeless, Astc10x8UNorm, Astc10x8UNormSRGB),
    (10, 10, b"ASAA", Astc10x10Typeless, Astc10x10UNorm, Astc10x10UNormSRGB),
    (12, 10, b"ASCA", Astc12x10Typeless, Astc12x10UNorm, Astc12x10UNormSRGB),
    (12, 12, b"ASCC", Astc12x12Typeless, Astc12x12UNorm, Astc12x12UNormSRGB),
];

/// FourCCs written by bgfx/bimg for footprints of 10 and up
static ASTC_ALT: &[AstcRow] = &[
    astc_alt(b"AS:5", "ASTC 10x5 UNORM", 10, 5),
    astc_alt(b"AS:6", "ASTC 10x6 UNORM", 10, 6),
    astc_alt(b"AS:8", "ASTC 10x8 UNORM", 10, 8),
    astc_alt(b"AS::", "ASTC 10x10 UNORM", 10, 10),
    astc_alt(b"AS<:", "ASTC 12x10 UNORM", 12, 10),
    astc_alt(b"AS<<", "ASTC 12x12 UNORM", 12, 12),
];

/// All ASTC rows in lookup order
pub fn astc() -> impl Iterator<Item = &'static AstcRow> {
    ASTC_MAIN.iter().chain(ASTC_ALT.iter())
}

/// An uncompressed format keyed by D3DFMT number (or FourCC) and DXGI number.
///
/// The two keys are alternatives: either one matching selects the row.
#[derive(Debug, Clone, Copy)]
pub struct UncompressedRow {
    pub d3dfmt: FourCC,
    pub dxgi: DxgiFormat,
    pub format: FormatDescriptor,
}

const fn px(
    d3dfmt: FourCC,
    dxgi: DxgiFormat,
    name: &'static str,
    layout: ChannelLayout,
    component: ComponentType,
    bits: u32,
    flags: BitFlags<FormatFlag>,
) -> UncompressedRow {
    UncompressedRow {
        d3dfmt,
        dxgi,
        format: FormatDescriptor::uncompressed(name, layout, component, bits, flags),
    }
}

const NO_D3D: FourCC = FourCC::NONE;
const NO_DXGI: DxgiFormat = DxgiFormat::Unknown;

#[rustfmt::skip]
pub static UNCOMPRESSED: &[UncompressedRow] = &[
    // D3DFMT numbers without a DXGI equivalent come first
    px(d3dfmt::A2R10G10B10, NO_DXGI, "BGR10A2 UNORM ??", BGRA, UNorm, 32, ALPHA),
    // Has a DXGI equivalent, but many files get it wrong; the DXGI row below has the clean name
    px(d3dfmt::A2B10G10R10, NO_DXGI, "RGB10A2 UNORM ?", RGBA, UNorm, 32, ALPHA),
    px(d3dfmt::X1R5G5B5, NO_DXGI, "RGB5X1 UNORM", BGRX, UNorm, 16, NONE),
    px(d3dfmt::X8B8G8R8, NO_DXGI, "RGBX8 UNORM", RGBX, UNorm, 32, NONE),
    px(d3dfmt::R8G8B8, NO_DXGI, "BGR8 UNORM", BGR, UNorm, 24, NONE),
    px(d3dfmt::B8G8R8, NO_DXGI, "RGB8 UNORM", RGB, UNorm, 24, NONE),
    px(d3dfmt::B8G8R8_DXWRAPPER, NO_DXGI, "RGB8 UNORM", RGB, UNorm, 24, NONE),
    px(d3dfmt::X4R4G4B4, NO_DXGI, "RGBX4 UNORM", BGRX, UNorm, 16, NONE),
    px(d3dfmt::A8L8, NO_DXGI, "Luminance8 Alpha8", LuminanceAlpha, UNorm, 16, ALPHA),
    px(d3dfmt::L16, NO_DXGI, "Luminance16", Luminance, UNorm, 16, NONE),
    px(d3dfmt::L8, NO_DXGI, "Luminance8", Luminance, UNorm, 8, NONE),
    px(d3dfmt::A4L4, NO_DXGI, "Luminance4 Alpha4", LuminanceAlpha, UNorm, 8, ALPHA),
    px(d3dfmt::A8R3G3B2, NO_DXGI, "BGR233A8 UNORM", BGRA, UNorm, 16, ALPHA),

    // DXGI formats, some with a D3DFMT alias
    px(NO_D3D, DxgiFormat::R32G32B32A32Typeless, "RGBA32 typeless", RGBA, Typeless, 128, TYPELESS_ALPHA),
    px(d3dfmt::A32B32G32R32F, DxgiFormat::R32G32B32A32Float, "RGBA32 FLOAT", RGBA, Float, 128, ALPHA),
    px(NO_D3D, DxgiFormat::R32G32B32A32UInt, "RGBA32 UINT", RGBA, UInt, 128, ALPHA),
    px(NO_D3D, DxgiFormat::R32G32B32A32SInt, "RGBA32 SINT", RGBA, SInt, 128, ALPHA),

    px(NO_D3D, DxgiFormat::R32G32B32Typeless, "RGB32 typeless", RGB, Typeless, 96, TYPELESS),
    px(NO_D3D, DxgiFormat::R32G32B32Float, "RGB32 FLOAT", RGB, Float, 96, NONE),
    px(NO_D3D, DxgiFormat::R32G32B32UInt, "RGB32 UINT", RGB, UInt, 96, NONE),
    px(NO_D3D, DxgiFormat::R32G32B32SInt, "RGB32 SINT", RGB, SInt, 96, NONE),

    px(NO_D3D, DxgiFormat::R16G16B16A16Typeless, "RGBA16 typeless", RGBA, Typeless, 64, TYPELESS_ALPHA),
    px(d3dfmt::A16B16G16R16F, DxgiFormat::R16G16B16A16Float, "RGBA16 FLOAT", RGBA, Float, 64, ALPHA),
    px(d3dfmt::A16B16G16R16, DxgiFormat::R16G16B16A16UNorm, "RGBA16 UNORM", RGBA, UNorm, 64, ALPHA),
    px(NO_D3D, DxgiFormat::R16G16B16A16UInt, "RGBA16 UINT", RGBA, UInt, 64, ALPHA),
    px(d3dfmt::Q16W16V16U16, DxgiFormat::R16G16B16A16SNorm, "RGBA16 SNORM", RGBA, SNorm, 64, ALPHA),
    px(NO_D3D, DxgiFormat::R16G16B16A16SInt, "RGBA16 SINT", RGBA, SInt, 64, ALPHA),

    px(NO_D3D, DxgiFormat::R32G32Typeless, "RG32 typeless", RG, Typeless, 64, TYPELESS),
    px(d3dfmt::G32R32F, DxgiFormat::R32G32Float, "RG32 FLOAT", RG, Float, 64, NONE),
    px(NO_D3D, DxgiFormat::R32G32UInt, "RG32 UINT", RG, UInt, 64, NONE),
    px(NO_D3D, DxgiFormat::R32G32SInt, "RG32 SINT", RG, SInt, 64, NONE),

    px(NO_D3D, DxgiFormat::D32FloatS8X24UInt, "Depth32 FLOAT Stencil8 UINT", DepthStencil, Float, 64, NONE),
    px(NO_D3D, DxgiFormat::R32G8X24Typeless, "R32G8X24_TYPELESS", DepthStencil, Typeless, 64, TYPELESS),
    px(NO_D3D, DxgiFormat::R32FloatX8X24Typeless, "R32_FLOAT_X8X24_TYPELESS", DepthStencil, Typeless, 64, TYPELESS),
    px(NO_D3D, DxgiFormat::X32TypelessG8X24UInt, "X32_TYPELESS_G8X24_UINT", DepthStencil, Typeless, 64, TYPELESS),

    px(NO_D3D, DxgiFormat::R10G10B10A2Typeless, "RGB10A2 typeless", RGBA, Typeless, 32, TYPELESS_ALPHA),
    px(NO_D3D, DxgiFormat::R10G10B10A2UNorm, "RGB10A2 UNORM", RGBA, UNorm, 32, ALPHA),
    px(NO_D3D, DxgiFormat::R10G10B10A2UInt, "RGB10A2 UINT", RGBA, UInt, 32, ALPHA),

    px(NO_D3D, DxgiFormat::R11G11B10Float, "RG11B10 FLOAT", RGB, Float, 32, NONE),

    px(NO_D3D, DxgiFormat::R8G8B8A8Typeless, "RGBA8 typeless", RGBA, Typeless, 32, TYPELESS_ALPHA),
    px(d3dfmt::A8B8G8R8, DxgiFormat::R8G8B8A8UNorm, "RGBA8 UNORM", RGBA, UNorm, 32, ALPHA),
    px(NO_D3D, DxgiFormat::R8G8B8A8UNormSRGB, "RGBA8 UNORM SRGB", RGBA, UNorm, 32, SRGB_ALPHA),
    px(NO_D3D, DxgiFormat::R8G8B8A8UInt, "RGBA8 UINT", RGBA, UInt, 32, ALPHA),
    px(d3dfmt::Q8W8V8U8, DxgiFormat::R8G8B8A8SNorm, "RGBA8 SNORM", RGBA, SNorm, 32, ALPHA),
    px(NO_D3D, DxgiFormat::R8G8B8A8SInt, "RGBA8 SINT", RGBA, SInt, 32, ALPHA),

    px(NO_D3D, DxgiFormat::R16G16Typeless, "RG16 typeless", RG, Typeless, 32, TYPELESS),
    px(d3dfmt::G16R16F, DxgiFormat::R16G16Float, "RG16 FLOAT", RG, Float, 32, NONE),
    px(d3dfmt::G16R16, DxgiFormat::R16G16UNorm, "RG16 UNORM", RG, UNorm, 32, NONE),
    px(NO_D3D, DxgiFormat::R16G16UInt, "RG16 UINT", RG, UInt, 32, NONE),
    px(NO_D3D, DxgiFormat::R16G16SNorm, "RG16 SNORM", RG, SNorm, 32, NONE),
    px(NO_D3D, DxgiFormat::R16G16SInt, "RG16 SINT", RG, SInt, 32, NONE),

    px(NO_D3D, DxgiFormat::R32Typeless, "Red32 typeless", R, Typeless, 32, TYPELESS),
    px(d3dfmt::D32F_LOCKABLE, DxgiFormat::D32Float, "Depth32 FLOAT", Depth, Float, 32, NONE),
    px(d3dfmt::R32F, DxgiFormat::R32Float, "Red32 FLOAT", R, Float, 32, NONE),
    px(d3dfmt::INDEX32, DxgiFormat::R32UInt, "Red32 UINT", R, UInt, 32, NONE),
    px(NO_D3D, DxgiFormat::R32SInt, "Red32 SINT", R, SInt, 32, NONE),

    px(d3dfmt::D24S8, DxgiFormat::D24UNormS8UInt, "Depth24 UNORM Stencil8 UINT", DepthStencil, UNorm, 32, NONE),
    px(NO_D3D, DxgiFormat::R24G8Typeless, "R24G8_TYPELESS", DepthStencil, Typeless, 32, TYPELESS),
    px(NO_D3D, DxgiFormat::R24UNormX8Typeless, "R24_UNORM_X8_TYPELESS", DepthStencil, Typeless, 32, TYPELESS),
    px(NO_D3D, DxgiFormat::X24TypelessG8UInt, "X24_TYPELESS_G8_UINT", DepthStencil, Typeless, 32, TYPELESS),

    px(NO_D3D, DxgiFormat::R8G8Typeless, "RG8 typeless", RG, Typeless, 16, TYPELESS),
    px(NO_D3D, DxgiFormat::R8G8UNorm, "RG8 UNORM", RG, UNorm, 16, NONE),
    px(NO_D3D, DxgiFormat::R8G8UInt, "RG8 UINT", RG, UInt, 16, NONE),
    px(d3dfmt::V8U8, DxgiFormat::R8G8SNorm, "RG8 SNORM", RG, SNorm, 16, NONE),
    px(NO_D3D, DxgiFormat::R8G8SInt, "RG8 SINT", RG, SInt, 16, NONE),

    px(d3dfmt::R16F, DxgiFormat::R16Float, "Red16 FLOAT", R, Float, 16, NONE),
    px(d3dfmt::D16, DxgiFormat::D16UNorm, "Depth16 UNORM", Depth, UNorm, 16, NONE),
    px(NO_D3D, DxgiFormat::R16UNorm, "Red16 UNORM", R, UNorm, 16, NONE),
    px(d3dfmt::INDEX16, DxgiFormat::R16UInt, "Red16 UINT", R, UInt, 16, NONE),
    px(NO_D3D, DxgiFormat::R16SNorm, "Red16 SNORM", R, SNorm, 16, NONE),
    px(NO_D3D, DxgiFormat::R16SInt, "Red16 SINT", R, SInt, 16, NONE),

    px(NO_D3D, DxgiFormat::R8Typeless, "Red8 typeless", R, Typeless, 8, TYPELESS),
    px(NO_D3D, DxgiFormat::R8UNorm, "Red8 UNORM", R, UNorm, 8, NONE),
    px(NO_D3D, DxgiFormat::R8UInt, "Red8 UINT", R, UInt, 8, NONE),
    px(NO_D3D, DxgiFormat::R8SNorm, "Red8 SNORM", R, SNorm, 8, NONE),
    px(NO_D3D, DxgiFormat::R8SInt, "Red8 SINT", R, SInt, 8, NONE),
    px(d3dfmt::A8, DxgiFormat::A8UNorm, "Alpha8 UNORM", Alpha, UNorm, 8, ALPHA),

    px(NO_D3D, DxgiFormat::R9G9B9E5SharedExp, "RGB9 E5 shared exp float", RGB, SharedExponent, 32, NONE),

    px(d3dfmt::R5G6B5, DxgiFormat::B5G6R5UNorm, "RGB565 UNORM", BGR, UNorm, 16, NONE),
    px(d3dfmt::A1R5G5B5, DxgiFormat::B5G5R5A1UNorm, "RGB5A1 UNORM", BGRA, UNorm, 16, ALPHA),

    px(d3dfmt::A8R8G8B8, DxgiFormat::B8G8R8A8UNorm, "BGRA8 UNORM", BGRA, UNorm, 32, ALPHA),
    px(d3dfmt::X8R8G8B8, DxgiFormat::B8G8R8X8UNorm, "BGRX8 UNORM", BGRX, UNorm, 32, NONE),
    px(NO_D3D, DxgiFormat::B8G8R8A8Typeless, "BGRA typeless (as UNORM)", BGRA, Typeless, 32, TYPELESS_ALPHA),
    px(NO_D3D, DxgiFormat::B8G8R8A8UNormSRGB, "BGRA8 SRGB UNORM", BGRA, UNorm, 32, SRGB_ALPHA),
    px(NO_D3D, DxgiFormat::B8G8R8X8Typeless, "BGRX typeless (as UNORM)", BGRX, Typeless, 32, TYPELESS),
    px(NO_D3D, DxgiFormat::B8G8R8X8UNormSRGB, "BGRX8 SRGB UNORM", BGRX, UNorm, 32, SRGB),

    px(d3dfmt::A4R4G4B4, DxgiFormat::B4G4R4A4UNorm, "BGRA4", BGRA, UNorm, 16, ALPHA),

    // Two pixels per 32 bits
    px(FourCC::RGBG, DxgiFormat::R8G8B8G8UNorm, "RGBG8 UNORM (4:2:2)", Packed422, UNorm, 16, NONE),
    px(FourCC::GRGB, DxgiFormat::G8R8G8B8UNorm, "GRGB8 UNORM (4:2:2)", Packed422, UNorm, 16, NONE),
    px(FourCC::YUY2, DxgiFormat::YUY2, "YUY2 (4:2:2)", Packed422, UNorm, 16, NONE),
    px(FourCC::UYVY, NO_DXGI, "UYVY (4:2:2)", Packed422, UNorm, 16, NONE),
];

/// A bit-count and channel-mask signature for DDS files without a usable FourCC
#[derive(Debug, Clone, Copy)]
pub struct MaskRow {
    /// Compared for equality against the alpha, alpha-pixels, RGB and luminance flags of the file
    pub flags: BitFlags<PixelFormatFlags>,
    pub bit_count: u32,
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
    pub a_mask: u32,
    /// Key re-looked-up in [`UNCOMPRESSED`]
    pub d3dfmt: FourCC,
    pub dxgi: DxgiFormat,
}

const PF_RGBA: BitFlags<PixelFormatFlags> = make_bitflags!(PixelFormatFlags::{RGB | AlphaPixels});
const PF_RGB: BitFlags<PixelFormatFlags> = make_bitflags!(PixelFormatFlags::{RGB});
const PF_ALPHA: BitFlags<PixelFormatFlags> = make_bitflags!(PixelFormatFlags::{Alpha});
const PF_LUMINANCE: BitFlags<PixelFormatFlags> = make_bitflags!(PixelFormatFlags::{Luminance});

const fn mask(
    flags: BitFlags<PixelFormatFlags>,
    bit_count: u32,
    [r_mask, g_mask, b_mask, a_mask]: [u32; 4],
    d3dfmt: FourCC,
    dxgi: DxgiFormat,
) -> MaskRow {
    MaskRow {
        flags,
        bit_count,
        r_mask,
        g_mask,
        b_mask,
        a_mask,
        d3dfmt,
        dxgi,
    }
}

#[rustfmt::skip]
pub static MASKS: &[MaskRow] = &[
    mask(PF_RGBA, 32, [0xff, 0xff00, 0xff0000, 0xff000000], d3dfmt::A8B8G8R8, DxgiFormat::R8G8B8A8UNorm),
    mask(PF_RGBA, 32, [0xffff, 0xffff0000, 0, 0], d3dfmt::G16R16, DxgiFormat::R16G16UNorm),
    mask(PF_RGB, 32, [0xffff, 0xffff0000, 0, 0], d3dfmt::G16R16, DxgiFormat::R16G16UNorm),

    // 10-10-10-2: the broken masks written by D3DX come before the correct ones, so they win
    mask(PF_RGBA, 32, [0x3ff, 0xffc00, 0x3ff00000, 0], d3dfmt::A2B10G10R10, DxgiFormat::R10G10B10A2UNorm),
    mask(PF_RGBA, 32, [0x3ff, 0xffc00, 0x3ff00000, 0xc0000000], d3dfmt::A2B10G10R10, DxgiFormat::R10G10B10A2UNorm),
    mask(PF_RGBA, 32, [0x3ff00000, 0xffc00, 0x3ff, 0xc0000000], d3dfmt::A2B10G10R10, DxgiFormat::R10G10B10A2UNorm),
    mask(PF_RGBA, 32, [0x3ff00000, 0xffc00, 0x3ff, 0xc0000000], d3dfmt::A2R10G10B10, NO_DXGI),

    mask(PF_RGBA, 16, [0x7c00, 0x3e0, 0x1f, 0x8000], d3dfmt::A1R5G5B5, DxgiFormat::B5G5R5A1UNorm),
    mask(PF_RGB, 16, [0x7c00, 0x3e0, 0x1f, 0], d3dfmt::X1R5G5B5, NO_DXGI),
    mask(PF_RGB, 16, [0xf800, 0x7e0, 0x1f, 0], d3dfmt::R5G6B5, DxgiFormat::B5G6R5UNorm),
    mask(PF_ALPHA, 8, [0, 0, 0, 0xff], d3dfmt::A8, DxgiFormat::A8UNorm),
    mask(PF_RGBA, 32, [0xff0000, 0xff00, 0xff, 0xff000000], d3dfmt::A8R8G8B8, DxgiFormat::B8G8R8A8UNorm),
    mask(PF_RGB, 32, [0xff0000, 0xff00, 0xff, 0], d3dfmt::X8R8G8B8, DxgiFormat::B8G8R8X8UNorm),
    mask(PF_RGB, 32, [0xff, 0xff00, 0xff0000, 0], d3dfmt::X8B8G8R8, NO_DXGI),
    mask(PF_RGB, 24, [0xff0000, 0xff00, 0xff, 0], d3dfmt::R8G8B8, NO_DXGI),
    mask(PF_RGB, 24, [0xff, 0xff00, 0xff0000, 0], d3dfmt::B8G8R8, NO_DXGI),
    mask(PF_RGBA, 16, [0xf00, 0xf0, 0xf, 0xf000], d3dfmt::A4R4G4B4, NO_DXGI),
    mask(PF_RGBA, 16, [0xf00, 0xf0, 0xf, 0], d3dfmt::X4R4G4B4, NO_DXGI),
    mask(PF_RGBA, 16, [0xe0, 0x1c, 0x3, 0xff00], d3dfmt::A8R3G3B2, NO_DXGI),

    mask(PF_LUMINANCE, 16, [0xff, 0, 0, 0xff00], d3dfmt::A8L8, NO_DXGI),
    mask(PF_LUMINANCE, 16, [0xffff, 0, 0, 0], d3dfmt::L16, NO_DXGI),
    mask(PF_LUMINANCE, 8, [0xff, 0, 0, 0], d3dfmt::L8, NO_DXGI),
    mask(PF_LUMINANCE, 8, [0x0f, 0, 0, 0xf0], d3dfmt::A4L4, NO_DXGI),
];
