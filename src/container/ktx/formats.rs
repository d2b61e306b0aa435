// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Vulkan and OpenGL format numbers, translated to the DXGI and FourCC keys of the format tables

use enumflags2::{make_bitflags, BitFlags};

use crate::format::{d3dfmt, AlphaMode, DxgiFormat, FormatFlag, FourCC, RawPixelFormat};

/// A key the format resolver understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKey {
    Dxgi(u32, AlphaMode),
    FourCC(FourCC),
}

impl FormatKey {
    /// The pixel format a DDS file with this format would carry
    pub fn to_raw(self, premultiplied: bool) -> RawPixelFormat {
        match self {
            FormatKey::Dxgi(dxgi, AlphaMode::Opaque) => {
                RawPixelFormat::from_dxgi(dxgi, AlphaMode::Opaque)
            }
            FormatKey::Dxgi(dxgi, _) if premultiplied => {
                RawPixelFormat::from_dxgi(dxgi, AlphaMode::Premultiplied)
            }
            FormatKey::Dxgi(dxgi, alpha_mode) => RawPixelFormat::from_dxgi(dxgi, alpha_mode),
            FormatKey::FourCC(fourcc) => RawPixelFormat::from_fourcc(fourcc),
        }
    }
}

/// One known format number, with the flags the key alone does not carry
#[derive(Debug, Clone, Copy)]
struct Mapping {
    id: u32,
    key: FormatKey,
    flags: BitFlags<FormatFlag>,
}

const NONE: BitFlags<FormatFlag> = BitFlags::EMPTY;
const SRGB: BitFlags<FormatFlag> = make_bitflags!(FormatFlag::{Srgb});
const ALPHA: BitFlags<FormatFlag> = make_bitflags!(FormatFlag::{HasAlpha});
const SRGB_ALPHA: BitFlags<FormatFlag> = make_bitflags!(FormatFlag::{Srgb | HasAlpha});

const fn dxgi(id: u32, format: DxgiFormat) -> Mapping {
    Mapping {
        id,
        key: FormatKey::Dxgi(format.raw(), AlphaMode::Straight),
        flags: NONE,
    }
}

const fn dxgi_opaque(id: u32, format: DxgiFormat) -> Mapping {
    Mapping {
        id,
        key: FormatKey::Dxgi(format.raw(), AlphaMode::Opaque),
        flags: NONE,
    }
}

const fn fourcc(id: u32, fourcc: FourCC, flags: BitFlags<FormatFlag>) -> Mapping {
    Mapping {
        id,
        key: FormatKey::FourCC(fourcc),
        flags,
    }
}

#[rustfmt::skip]
static VULKAN: &[Mapping] = &[
    dxgi(4, DxgiFormat::B5G6R5UNorm), // R5G6B5_UNORM_PACK16
    dxgi(8, DxgiFormat::B5G5R5A1UNorm), // A1R5G5B5_UNORM_PACK16
    dxgi(9, DxgiFormat::R8UNorm),
    dxgi(10, DxgiFormat::R8SNorm),
    dxgi(13, DxgiFormat::R8UInt),
    dxgi(14, DxgiFormat::R8SInt),
    dxgi(16, DxgiFormat::R8G8UNorm),
    dxgi(17, DxgiFormat::R8G8SNorm),
    dxgi(20, DxgiFormat::R8G8UInt),
    dxgi(21, DxgiFormat::R8G8SInt),
    fourcc(23, d3dfmt::B8G8R8, NONE), // R8G8B8_UNORM
    fourcc(29, d3dfmt::R8G8B8, NONE), // B8G8R8_UNORM
    dxgi(37, DxgiFormat::R8G8B8A8UNorm),
    dxgi(38, DxgiFormat::R8G8B8A8SNorm),
    dxgi(41, DxgiFormat::R8G8B8A8UInt),
    dxgi(42, DxgiFormat::R8G8B8A8SInt),
    dxgi(43, DxgiFormat::R8G8B8A8UNormSRGB),
    dxgi(44, DxgiFormat::B8G8R8A8UNorm),
    dxgi(50, DxgiFormat::B8G8R8A8UNormSRGB),
    dxgi(64, DxgiFormat::R10G10B10A2UNorm), // A2B10G10R10_UNORM_PACK32
    dxgi(68, DxgiFormat::R10G10B10A2UInt),
    dxgi(70, DxgiFormat::R16UNorm),
    dxgi(71, DxgiFormat::R16SNorm),
    dxgi(74, DxgiFormat::R16UInt),
    dxgi(75, DxgiFormat::R16SInt),
    dxgi(76, DxgiFormat::R16Float),
    dxgi(77, DxgiFormat::R16G16UNorm),
    dxgi(78, DxgiFormat::R16G16SNorm),
    dxgi(81, DxgiFormat::R16G16UInt),
    dxgi(82, DxgiFormat::R16G16SInt),
    dxgi(83, DxgiFormat::R16G16Float),
    dxgi(91, DxgiFormat::R16G16B16A16UNorm),
    dxgi(92, DxgiFormat::R16G16B16A16SNorm),
    dxgi(95, DxgiFormat::R16G16B16A16UInt),
    dxgi(96, DxgiFormat::R16G16B16A16SInt),
    dxgi(97, DxgiFormat::R16G16B16A16Float),
    dxgi(98, DxgiFormat::R32UInt),
    dxgi(99, DxgiFormat::R32SInt),
    dxgi(100, DxgiFormat::R32Float),
    dxgi(101, DxgiFormat::R32G32UInt),
    dxgi(102, DxgiFormat::R32G32SInt),
    dxgi(103, DxgiFormat::R32G32Float),
    dxgi(104, DxgiFormat::R32G32B32UInt),
    dxgi(105, DxgiFormat::R32G32B32SInt),
    dxgi(106, DxgiFormat::R32G32B32Float),
    dxgi(107, DxgiFormat::R32G32B32A32UInt),
    dxgi(108, DxgiFormat::R32G32B32A32SInt),
    dxgi(109, DxgiFormat::R32G32B32A32Float),
    dxgi(122, DxgiFormat::R11G11B10Float), // B10G11R11_UFLOAT_PACK32
    dxgi(123, DxgiFormat::R9G9B9E5SharedExp), // E5B9G9R9_UFLOAT_PACK32
    dxgi(124, DxgiFormat::D16UNorm),
    dxgi(126, DxgiFormat::D32Float),
    dxgi(129, DxgiFormat::D24UNormS8UInt),
    dxgi(130, DxgiFormat::D32FloatS8X24UInt),
    // BC1-7
    dxgi_opaque(131, DxgiFormat::BC1UNorm),
    dxgi_opaque(132, DxgiFormat::BC1UNormSRGB),
    dxgi(133, DxgiFormat::BC1UNorm),
    dxgi(134, DxgiFormat::BC1UNormSRGB),
    dxgi(135, DxgiFormat::BC2UNorm),
    dxgi(136, DxgiFormat::BC2UNormSRGB),
    dxgi(137, DxgiFormat::BC3UNorm),
    dxgi(138, DxgiFormat::BC3UNormSRGB),
    dxgi(139, DxgiFormat::BC4UNorm),
    dxgi(140, DxgiFormat::BC4SNorm),
    dxgi(141, DxgiFormat::BC5UNorm),
    dxgi(142, DxgiFormat::BC5SNorm),
    dxgi(143, DxgiFormat::BC6HUF16),
    dxgi(144, DxgiFormat::BC6HSF16),
    dxgi(145, DxgiFormat::BC7UNorm),
    dxgi(146, DxgiFormat::BC7UNormSRGB),
    // ETC2 and EAC
    fourcc(147, FourCC::ETC2, NONE),
    fourcc(148, FourCC::ETC2, SRGB),
    fourcc(149, FourCC::ETC2, ALPHA),
    fourcc(150, FourCC::ETC2, SRGB_ALPHA),
    fourcc(151, FourCC::EC2A, NONE),
    fourcc(152, FourCC::EC2A, SRGB),
    fourcc(153, FourCC::EAR, NONE),
    fourcc(154, FourCC::EAR, NONE),
    fourcc(155, FourCC::EARG, NONE),
    fourcc(156, FourCC::EARG, NONE),
];

#[rustfmt::skip]
static GL_INTERNAL: &[Mapping] = &[
    // S3TC
    dxgi_opaque(0x83F0, DxgiFormat::BC1UNorm),
    dxgi(0x83F1, DxgiFormat::BC1UNorm),
    dxgi(0x83F2, DxgiFormat::BC2UNorm),
    dxgi(0x83F3, DxgiFormat::BC3UNorm),
    dxgi_opaque(0x8C4C, DxgiFormat::BC1UNormSRGB),
    dxgi(0x8C4D, DxgiFormat::BC1UNormSRGB),
    dxgi(0x8C4E, DxgiFormat::BC2UNormSRGB),
    dxgi(0x8C4F, DxgiFormat::BC3UNormSRGB),
    // RGTC
    dxgi(0x8DBB, DxgiFormat::BC4UNorm),
    dxgi(0x8DBC, DxgiFormat::BC4SNorm),
    dxgi(0x8DBD, DxgiFormat::BC5UNorm),
    dxgi(0x8DBE, DxgiFormat::BC5SNorm),
    // BPTC
    dxgi(0x8E8C, DxgiFormat::BC7UNorm),
    dxgi(0x8E8D, DxgiFormat::BC7UNormSRGB),
    dxgi(0x8E8E, DxgiFormat::BC6HSF16),
    dxgi(0x8E8F, DxgiFormat::BC6HUF16),
    // ETC
    fourcc(0x8D64, FourCC::ETC1, NONE),
    fourcc(0x9274, FourCC::ETC2, NONE),
    fourcc(0x9275, FourCC::ETC2, SRGB),
    fourcc(0x9276, FourCC::ETC2, ALPHA),
    fourcc(0x9277, FourCC::ETC2, SRGB_ALPHA),
    fourcc(0x9278, FourCC::EC2A, NONE),
    fourcc(0x9279, FourCC::EC2A, SRGB),
    fourcc(0x9270, FourCC::EAR, NONE),
    fourcc(0x9271, FourCC::EAR, NONE),
    fourcc(0x9272, FourCC::EARG, NONE),
    fourcc(0x9273, FourCC::EARG, NONE),
    // sized uncompressed formats
    fourcc(0x8051, d3dfmt::B8G8R8, NONE), // GL_RGB8
    fourcc(0x8C41, d3dfmt::B8G8R8, SRGB), // GL_SRGB8
    dxgi(0x8058, DxgiFormat::R8G8B8A8UNorm),
    dxgi(0x8C43, DxgiFormat::R8G8B8A8UNormSRGB),
    dxgi(0x8059, DxgiFormat::R10G10B10A2UNorm),
    dxgi(0x805B, DxgiFormat::R16G16B16A16UNorm),
    dxgi(0x8229, DxgiFormat::R8UNorm),
    dxgi(0x822A, DxgiFormat::R16UNorm),
    dxgi(0x822B, DxgiFormat::R8G8UNorm),
    dxgi(0x822C, DxgiFormat::R16G16UNorm),
    dxgi(0x822D, DxgiFormat::R16Float),
    dxgi(0x822E, DxgiFormat::R32Float),
    dxgi(0x822F, DxgiFormat::R16G16Float),
    dxgi(0x8230, DxgiFormat::R32G32Float),
    dxgi(0x8814, DxgiFormat::R32G32B32A32Float),
    dxgi(0x8815, DxgiFormat::R32G32B32Float),
    dxgi(0x881A, DxgiFormat::R16G16B16A16Float),
    dxgi(0x8C3A, DxgiFormat::R11G11B10Float),
    dxgi(0x8C3D, DxgiFormat::R9G9B9E5SharedExp),
    dxgi(0x81A5, DxgiFormat::D16UNorm),
    dxgi(0x8CAC, DxgiFormat::D32Float),
    dxgi(0x88F0, DxgiFormat::D24UNormS8UInt),
];

const VK_ASTC_FIRST: u32 = 157;
const VK_ASTC_LAST: u32 = 184;
const GL_ASTC_FIRST: u32 = 0x93B0;
const GL_ASTC_SRGB_FIRST: u32 = 0x93D0;
const ASTC_SIZES: u32 = 14;

const GL_UNSIGNED_BYTE: u32 = 0x1401;
const GL_ALPHA: u32 = 0x1906;
const GL_RGB: u32 = 0x1907;
const GL_RGBA: u32 = 0x1908;
const GL_LUMINANCE: u32 = 0x1909;
const GL_LUMINANCE_ALPHA: u32 = 0x190A;
const GL_BGRA: u32 = 0x80E1;

/// DXGI numbering for the ASTC footprint at `index` (in the order 4x4, 5x4, ... 12x12)
fn astc_key(index: u32, srgb: bool) -> FormatKey {
    let dxgi = DxgiFormat::Astc4x4UNorm.raw() + 4 * index + u32::from(srgb);
    FormatKey::Dxgi(dxgi, AlphaMode::Unknown)
}

fn lookup(table: &[Mapping], id: u32) -> Option<(FormatKey, BitFlags<FormatFlag>)> {
    table
        .iter()
        .find(|m| m.id == id)
        .map(|m| (m.key, m.flags))
}

/// Translate a `VkFormat` number
pub fn vulkan(vk_format: u32) -> Option<(FormatKey, BitFlags<FormatFlag>)> {
    if (VK_ASTC_FIRST..=VK_ASTC_LAST).contains(&vk_format) {
        let offset = vk_format - VK_ASTC_FIRST;
        return Some((astc_key(offset / 2, offset % 2 == 1), NONE));
    }
    lookup(VULKAN, vk_format)
}

/// Translate a KTX1 `glInternalFormat`, falling back to `glFormat`/`glType` for unsized formats
pub fn gl(internal_format: u32, format: u32, ty: u32) -> Option<(FormatKey, BitFlags<FormatFlag>)> {
    for (first, srgb) in [(GL_ASTC_FIRST, false), (GL_ASTC_SRGB_FIRST, true)] {
        if (first..first + ASTC_SIZES).contains(&internal_format) {
            return Some((astc_key(internal_format - first, srgb), NONE));
        }
    }

    if format == GL_BGRA && ty == GL_UNSIGNED_BYTE {
        return Some((FormatKey::Dxgi(DxgiFormat::B8G8R8A8UNorm.raw(), AlphaMode::Straight), NONE));
    }

    lookup(GL_INTERNAL, internal_format).or_else(|| {
        if ty != GL_UNSIGNED_BYTE {
            return None;
        }
        let key = match internal_format {
            GL_RGBA => FormatKey::Dxgi(DxgiFormat::R8G8B8A8UNorm.raw(), AlphaMode::Straight),
            GL_RGB => FormatKey::FourCC(d3dfmt::B8G8R8),
            GL_ALPHA => FormatKey::FourCC(d3dfmt::A8),
            GL_LUMINANCE => FormatKey::FourCC(d3dfmt::L8),
            GL_LUMINANCE_ALPHA => FormatKey::FourCC(d3dfmt::A8L8),
            _ => return None,
        };
        Some((key, NONE))
    })
}

/// GL internal formats that store sRGB-encoded color
pub fn gl_is_srgb(internal_format: u32) -> bool {
    matches!(
        internal_format,
        0x8C40..=0x8C43 | 0x8C4C..=0x8C4F | 0x8E8D | 0x9275 | 0x9277 | 0x9279
    ) || (GL_ASTC_SRGB_FIRST..GL_ASTC_SRGB_FIRST + ASTC_SIZES).contains(&internal_format)
}

/// Number of components in a GL pixel transfer format
pub fn gl_components(format: u32) -> Option<u32> {
    // plain, then _INTEGER and depth variants
    match format {
        0x1903 | GL_ALPHA | GL_LUMINANCE | 0x8D94 | 0x1902 => Some(1),
        0x8227 | GL_LUMINANCE_ALPHA | 0x8228 | 0x84F9 => Some(2),
        GL_RGB | 0x80E0 | 0x8D98 | 0x8D9A => Some(3),
        GL_RGBA | GL_BGRA | 0x8D99 | 0x8D9B => Some(4),
        _ => None,
    }
}

/// GL types that pack every component of a pixel into one value
pub fn gl_is_packed(ty: u32) -> bool {
    matches!(
        ty,
        0x8032..=0x8036 | 0x8362..=0x8368 | 0x84FA | 0x8C3B | 0x8C3E | 0x8DAD
    )
}

/// VkFormats for compressed encodings, including ones without a table entry
pub fn vulkan_is_compressed(vk_format: u32) -> bool {
    matches!(
        vk_format,
        131..=184 | 1_000_054_000..=1_000_054_007 | 1_000_066_000..=1_000_066_013
    )
}
