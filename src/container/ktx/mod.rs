// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! KTX and KTX2 files.
//!
//! Both versions index their own level data, so textures loaded from them
//! carry a layout of dimensions only. Their format numbers are translated into
//! the keys the DDS tables use, so both containers describe formats identically.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use enumflags2::BitFlags;
use log::{debug, warn};

use crate::container::ContainerKind;
use crate::dimensions::Dimensions;
use crate::error::{LoadError, LoadResult};
use crate::format::{resolve, BlockKind, ChannelLayout, ComponentType, FormatDescriptor, FormatFlag};
use crate::layout::{dummy_layout, TextureLayout};
use crate::shape::CubeFaceMask;
use crate::texture::Texture;

pub use self::ktx1::Ktx1Header;
pub use self::ktx2::{Ktx2File, Supercompression};

mod formats;
mod ktx1;
mod ktx2;

pub use self::ktx1::IDENTIFIER as KTX1_IDENTIFIER;
pub use self::ktx2::IDENTIFIER as KTX2_IDENTIFIER;

/// How a KTX file names its pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KtxFormatId {
    Vulkan(u32),
    Gl { internal_format: u32, format: u32, ty: u32 },
}

impl Display for KtxFormatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KtxFormatId::Vulkan(vk_format) => write!(f, "VkFormat {vk_format}"),
            KtxFormatId::Gl {
                internal_format,
                format,
                ty,
            } => write!(
                f,
                "glInternalFormat {internal_format:#06x} (glFormat {format:#06x}, glType {ty:#06x})"
            ),
        }
    }
}

/// Metadata a KTX decoder reports about its file
pub trait KtxSource {
    fn container(&self) -> ContainerKind;
    fn format_id(&self) -> KtxFormatId;

    fn is_compressed(&self) -> bool;
    fn has_alpha(&self) -> bool;
    fn is_premultiplied(&self) -> bool;
    fn is_srgb(&self) -> bool;

    fn dimensions(&self) -> Dimensions;
    fn depth(&self) -> u32;
    /// Number of array layers, 0 if the texture is not an array
    fn layers(&self) -> u32;
    fn faces(&self) -> u32;
    /// Number of mip levels, 0 meaning the reader should generate them
    fn levels(&self) -> u32;

    /// Size of one texel, if the file says and the format is not block compressed
    fn bits_per_texel(&self) -> Option<u32>;
    /// The most layers and faces the stored level data could hold
    fn max_elements(&self) -> u64;
    /// Offset of the first byte past the header and metadata
    fn header_len(&self) -> usize;

    fn format_name(&self) -> String {
        self.format_id().to_string()
    }
}

/// A format for a file whose format number is not in any table
fn opaque_format(source: &impl KtxSource) -> FormatDescriptor {
    if source.is_compressed() {
        FormatDescriptor::compressed("unknown compressed (KTX)", BlockKind::Opaque, BitFlags::EMPTY)
    } else {
        FormatDescriptor::uncompressed(
            "unknown uncompressed (KTX)",
            ChannelLayout::Opaque,
            ComponentType::Opaque,
            source.bits_per_texel().unwrap_or(0),
            BitFlags::EMPTY,
        )
    }
}

fn describe_format(source: &impl KtxSource) -> LoadResult<FormatDescriptor> {
    let premultiplied = source.is_premultiplied();
    let mapped = match source.format_id() {
        KtxFormatId::Vulkan(vk_format) => formats::vulkan(vk_format),
        KtxFormatId::Gl {
            internal_format,
            format,
            ty,
        } => formats::gl(internal_format, format, ty),
    };

    let mut format = match mapped {
        Some((key, flags)) => {
            let mut format = resolve(&key.to_raw(premultiplied))?;
            format.flags |= flags;
            format
        }
        None => {
            warn!("Unrecognized KTX format {}", source.format_name());
            let mut format = opaque_format(source);
            if source.has_alpha() {
                format.flags |= FormatFlag::HasAlpha;
            }
            format
        }
    };

    if source.is_srgb() {
        format.flags |= FormatFlag::Srgb;
    }
    if premultiplied && format.has_alpha() {
        format.flags |= FormatFlag::PremultipliedAlpha;
    }
    Ok(format)
}

/// Normalize a KTX file's metadata into a format and a layout of dummy levels
pub fn describe(source: &impl KtxSource) -> LoadResult<(FormatDescriptor, TextureLayout)> {
    let depth = source.depth();
    if depth > 1 {
        return Err(LoadError::UnsupportedTexture(format!(
            "volume texture with depth {depth}"
        )));
    }

    let faces = match source.faces() {
        1 => None,
        6 => Some(CubeFaceMask::all()),
        n => {
            return Err(LoadError::UnsupportedTexture(format!(
                "KTX file with {n} faces"
            )))
        }
    };
    let layers = Some(source.layers()).filter(|&l| l > 0);

    let dimensions = source.dimensions();
    let levels = source.levels().max(1);
    let chain = dimensions.mips().count();
    if levels as usize > chain {
        return Err(LoadError::Ktx(format!(
            "{levels} mip levels declared, but a {dimensions} texture has {chain}"
        )));
    }

    let elements = u64::from(source.layers().max(1)) * if faces.is_some() { 6 } else { 1 };
    if elements > source.max_elements() {
        return Err(LoadError::Ktx(format!(
            "{elements} layers and faces declared, but the level data holds at most {}",
            source.max_elements()
        )));
    }

    let format = describe_format(source)?;
    debug!(
        "{} format {} described as {format}",
        source.container(),
        source.format_name()
    );

    let layout = dummy_layout(dimensions, levels, layers, faces);
    Ok((format, layout))
}

fn load_source(source: impl KtxSource, bytes: &[u8]) -> LoadResult<Texture<'_>> {
    let (format, layout) = describe(&source)?;
    Ok(Texture {
        container: source.container(),
        format,
        layout,
        data: Cow::Borrowed(bytes),
        payload_offset: source.header_len(),
    })
}

pub fn load_ktx1(bytes: &[u8]) -> LoadResult<Texture<'_>> {
    load_source(Ktx1Header::parse(bytes)?, bytes)
}

pub fn load_ktx2(bytes: &[u8]) -> LoadResult<Texture<'_>> {
    load_source(Ktx2File::parse(bytes)?, bytes)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use itertools::Itertools;

    use super::*;
    use crate::format::FormatKind;
    use crate::shape::CubeFace;

    /// A KTX2-like file described field by field
    #[derive(Clone)]
    struct FakeKtx {
        vk_format: u32,
        compressed: bool,
        alpha: bool,
        premultiplied: bool,
        srgb: bool,
        width: u32,
        height: u32,
        depth: u32,
        layers: u32,
        faces: u32,
        levels: u32,
        stored: u64,
    }

    impl FakeKtx {
        fn new(vk_format: u32) -> Self {
            Self {
                vk_format,
                compressed: formats::vulkan_is_compressed(vk_format),
                alpha: false,
                premultiplied: false,
                srgb: false,
                width: 16,
                height: 16,
                depth: 0,
                layers: 0,
                faces: 1,
                levels: 1,
                stored: 1024,
            }
        }
    }

    impl KtxSource for FakeKtx {
        fn container(&self) -> ContainerKind {
            ContainerKind::Ktx2 {
                supercompression: None,
            }
        }
        fn format_id(&self) -> KtxFormatId {
            KtxFormatId::Vulkan(self.vk_format)
        }
        fn is_compressed(&self) -> bool {
            self.compressed
        }
        fn has_alpha(&self) -> bool {
            self.alpha
        }
        fn is_premultiplied(&self) -> bool {
            self.premultiplied
        }
        fn is_srgb(&self) -> bool {
            self.srgb
        }
        fn dimensions(&self) -> Dimensions {
            Dimensions::new(self.width, self.height)
        }
        fn depth(&self) -> u32 {
            self.depth
        }
        fn layers(&self) -> u32 {
            self.layers
        }
        fn faces(&self) -> u32 {
            self.faces
        }
        fn levels(&self) -> u32 {
            self.levels
        }
        fn bits_per_texel(&self) -> Option<u32> {
            (!self.compressed).then_some(24)
        }
        fn max_elements(&self) -> u64 {
            self.stored
        }
        fn header_len(&self) -> usize {
            0
        }
    }

    #[test]
    fn known_formats() -> Result<()> {
        let (format, _) = describe(&FakeKtx::new(37))?;
        assert_eq!(format.name, "RGBA8 UNORM");
        assert!(format.has_alpha());

        let (format, _) = describe(&FakeKtx::new(145))?;
        assert_eq!(
            format.kind,
            FormatKind::Compressed {
                block: BlockKind::BC7
            }
        );
        Ok(())
    }

    #[test]
    fn unknown_formats_are_opaque() -> Result<()> {
        // PVRTC1 4bpp
        let pvrtc = FakeKtx {
            alpha: true,
            ..FakeKtx::new(1_000_054_001)
        };
        let (format, layout) = describe(&pvrtc)?;
        assert_eq!(
            format.kind,
            FormatKind::Compressed {
                block: BlockKind::Opaque
            }
        );
        assert!(format.has_alpha());
        assert_eq!(format.size_rule(), None);
        assert_eq!(layout.num_mips(), 1);

        // A8B8G8R8_UNORM_PACK32 has no DXGI counterpart
        let (format, _) = describe(&FakeKtx::new(51))?;
        assert_eq!(format.name, "unknown uncompressed (KTX)");
        assert!(!format.is_compressed());
        Ok(())
    }

    #[test]
    fn source_flags_are_applied() -> Result<()> {
        let srgb = FakeKtx {
            srgb: true,
            ..FakeKtx::new(37)
        };
        assert!(describe(&srgb)?.0.is_srgb());

        let premultiplied = FakeKtx {
            premultiplied: true,
            ..FakeKtx::new(37)
        };
        assert!(describe(&premultiplied)?.0.is_premultiplied());

        // premultiplication means nothing without alpha
        let opaque = FakeKtx {
            premultiplied: true,
            ..FakeKtx::new(131)
        };
        assert!(!describe(&opaque)?.0.is_premultiplied());
        Ok(())
    }

    #[test]
    fn cubemap_array_levels() -> Result<()> {
        let source = FakeKtx {
            layers: 2,
            faces: 6,
            levels: 3,
            ..FakeKtx::new(37)
        };
        let (_, layout) = describe(&source)?;

        assert_eq!(layout.elements.len(), 12);
        assert_eq!(layout.layers, Some(2));
        assert_eq!(layout.faces, Some(CubeFaceMask::all()));
        assert_eq!(
            (layout.elements[7].layer, layout.elements[7].face),
            (Some(1), Some(CubeFace::NegativeX))
        );

        let widths = layout.elements[0].levels.iter().map(|l| l.width).collect_vec();
        assert_eq!(widths, [16, 8, 4]);
        assert!(layout.elements.iter().flat_map(|e| &e.levels).all(|l| l.range.is_none()));
        Ok(())
    }

    #[test]
    fn unsupported_shapes() {
        let volume = FakeKtx {
            depth: 4,
            ..FakeKtx::new(37)
        };
        assert!(matches!(describe(&volume), Err(LoadError::UnsupportedTexture(_))));

        let three_faces = FakeKtx {
            faces: 3,
            ..FakeKtx::new(37)
        };
        assert!(matches!(
            describe(&three_faces),
            Err(LoadError::UnsupportedTexture(_))
        ));
    }

    #[test]
    fn more_levels_than_the_chain() {
        let source = FakeKtx {
            levels: 6,
            ..FakeKtx::new(37)
        };
        assert!(matches!(describe(&source), Err(LoadError::Ktx(_))));

        let source = FakeKtx {
            levels: u32::MAX,
            ..FakeKtx::new(37)
        };
        assert!(matches!(describe(&source), Err(LoadError::Ktx(_))));
    }

    #[test]
    fn more_elements_than_data() -> Result<()> {
        let cubes = FakeKtx {
            layers: 4,
            faces: 6,
            stored: 24,
            ..FakeKtx::new(37)
        };
        assert_eq!(describe(&cubes)?.1.elements.len(), 24);

        let too_many = FakeKtx {
            layers: u32::MAX,
            ..cubes
        };
        assert!(matches!(describe(&too_many), Err(LoadError::Ktx(_))));
        Ok(())
    }

    #[test]
    fn format_ids_display() {
        assert_eq!(KtxFormatId::Vulkan(37).to_string(), "VkFormat 37");
        let gl = KtxFormatId::Gl {
            internal_format: 0x8058,
            format: 0x1908,
            ty: 0x1401,
        };
        assert_eq!(
            gl.to_string(),
            "glInternalFormat 0x8058 (glFormat 0x1908, glType 0x1401)"
        );
    }

    #[test]
    fn load_minimal_ktx2() -> Result<()> {
        let bytes = super::ktx2::tests::Ktx2Params::default().build();
        let texture = load_ktx2(&bytes)?;
        assert_eq!(texture.format.name, "RGBA8 UNORM");
        assert_eq!(texture.num_mips(), 1);
        assert_eq!(texture.dimensions(), Some(Dimensions::new(4, 4)));
        assert_eq!(texture.level_bytes(0, 0), None);
        Ok(())
    }
}
