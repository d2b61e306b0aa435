// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Cursor;

use binrw::BinRead;
use ktx2::{BasicDataFormatDescriptor, ColorModel, DataFormatFlags, TransferFunction};
use log::{debug, warn};
use strum::{Display, FromRepr};

use crate::container::ContainerKind;
use crate::dimensions::Dimensions;
use crate::error::{LoadError, LoadResult};

use super::formats::vulkan_is_compressed;
use super::{KtxFormatId, KtxSource};

pub const IDENTIFIER: &[u8; 12] = b"\xABKTX 20\xBB\r\n\x1A\n";
/// Identifier, header and index, up to the level index
pub const HEADER_LEN: usize = 80;
const LEVEL_INDEX_ENTRY_LEN: usize = 24;

/// Descriptor block header and the fixed part of a basic descriptor, without samples
const BASIC_DFD_LEN: u32 = 4 + 24;
/// BasisLZ global data: a fixed header, then one descriptor per image
const BASISLZ_GLOBAL_HEADER_LEN: u64 = 20;
const BASISLZ_IMAGE_DESC_LEN: u64 = 20;
const SAMPLE_LEN: usize = 16;
const CHANNEL_ALPHA: u8 = 15;
const UASTC_CHANNEL_RGBA: u8 = 3;
const UASTC_CHANNEL_RRRG: u8 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, FromRepr)]
#[repr(u32)]
pub enum Supercompression {
    BasisLZ = 1,
    Zstandard = 2,
    #[strum(serialize = "ZLIB")]
    Zlib = 3,
}

/// The raw header fields this crate needs that `ktx2` only exposes in parsed form,
/// up to the index entry of the base level
#[derive(BinRead, Debug, Clone, Copy)]
#[br(little, magic = b"\xABKTX 20\xBB\r\n\x1A\n")]
struct Ktx2Prelude {
    vk_format: u32,
    #[br(pad_before = 28)]
    supercompression_scheme: u32,
    dfd_byte_offset: u32,
    dfd_byte_length: u32,
    #[br(pad_before = 16)]
    sgd_byte_length: u64,
    #[br(pad_before = 8)]
    base_byte_length: u64,
    base_uncompressed_byte_length: u64,
}

/// What the basic data format descriptor says, if the file has a usable one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DescriptorInfo {
    srgb: bool,
    premultiplied: bool,
    block_compressed: bool,
    has_alpha: bool,
    bytes_per_block: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ktx2File {
    vk_format: u32,
    dimensions: Dimensions,
    depth: u32,
    layers: u32,
    faces: u32,
    levels: u32,
    supercompression: Option<Supercompression>,
    descriptor: Option<DescriptorInfo>,
    max_elements: u64,
}

impl Ktx2File {
    pub fn parse(bytes: &[u8]) -> LoadResult<Self> {
        if bytes.len() < HEADER_LEN + LEVEL_INDEX_ENTRY_LEN {
            return Err(LoadError::TruncatedHeader {
                needed: HEADER_LEN + LEVEL_INDEX_ENTRY_LEN,
                available: bytes.len(),
            });
        }

        let prelude = Ktx2Prelude::read(&mut Cursor::new(bytes))?;
        let reader = ktx2::Reader::new(bytes).map_err(|err| LoadError::Ktx(format!("{err:?}")))?;
        let header = reader.header();

        let supercompression = match prelude.supercompression_scheme {
            0 => None,
            scheme => Some(Supercompression::from_repr(scheme).ok_or_else(|| {
                LoadError::Ktx(format!("unknown supercompression scheme {scheme}"))
            })?),
        };

        // ktx2 does not guard against descriptors too short to hold a basic block
        let descriptor = if prelude.dfd_byte_length >= BASIC_DFD_LEN {
            reader
                .data_format_descriptors()
                .next()
                .and_then(|dfd| match BasicDataFormatDescriptor::parse(&dfd.data) {
                    Ok(basic) => Some(DescriptorInfo {
                        srgb: basic.transfer_function == Some(TransferFunction::SRGB),
                        premultiplied: basic.flags.contains(DataFormatFlags::ALPHA_PREMULTIPLIED),
                        block_compressed: basic.color_model == Some(ColorModel::UASTC)
                            || basic.color_model == Some(ColorModel::ETC1S),
                        has_alpha: false,
                        bytes_per_block: basic.bytes_planes[0],
                    }),
                    Err(err) => {
                        warn!("Ignoring unreadable KTX2 data format descriptor: {err:?}");
                        None
                    }
                })
                .map(|info| DescriptorInfo {
                    has_alpha: descriptor_has_alpha(bytes, &prelude, info.block_compressed),
                    ..info
                })
        } else {
            warn!(
                "KTX2 data format descriptor is only {} bytes long",
                prelude.dfd_byte_length
            );
            None
        };
        debug!("KTX2 VkFormat {} with descriptor {descriptor:?}", prelude.vk_format);

        // every image of the base level is at least one byte once inflated
        let max_elements = match supercompression {
            None => prelude.base_byte_length,
            Some(Supercompression::BasisLZ) => prelude
                .sgd_byte_length
                .saturating_sub(BASISLZ_GLOBAL_HEADER_LEN)
                / BASISLZ_IMAGE_DESC_LEN,
            Some(_) => prelude.base_uncompressed_byte_length,
        };

        Ok(Self {
            vk_format: prelude.vk_format,
            dimensions: Dimensions::new(header.pixel_width, header.pixel_height.max(1)),
            depth: header.pixel_depth,
            layers: header.layer_count,
            faces: header.face_count,
            levels: header.level_count,
            supercompression,
            descriptor,
            max_elements,
        })
    }
}

/// True if any sample of the first descriptor block stores alpha.
///
/// UASTC names its channel combinations instead of its channels.
fn descriptor_has_alpha(bytes: &[u8], prelude: &Ktx2Prelude, uastc_like: bool) -> bool {
    let start = prelude.dfd_byte_offset as usize + 4;
    let end = start.saturating_add(prelude.dfd_byte_length as usize - 4);
    let Some(block) = bytes.get(start..end) else {
        return false;
    };
    let Some(samples) = block.get(BASIC_DFD_LEN as usize - 4..) else {
        return false;
    };

    samples.chunks_exact(SAMPLE_LEN).any(|sample| {
        let channel = sample[3] & 0x0F;
        channel == CHANNEL_ALPHA
            || (uastc_like && (channel == UASTC_CHANNEL_RGBA || channel == UASTC_CHANNEL_RRRG))
    })
}

impl KtxSource for Ktx2File {
    fn container(&self) -> ContainerKind {
        ContainerKind::Ktx2 {
            supercompression: self.supercompression,
        }
    }

    fn format_id(&self) -> KtxFormatId {
        KtxFormatId::Vulkan(self.vk_format)
    }

    fn is_compressed(&self) -> bool {
        vulkan_is_compressed(self.vk_format)
            || self.supercompression == Some(Supercompression::BasisLZ)
            || self.descriptor.is_some_and(|d| d.block_compressed)
    }

    fn has_alpha(&self) -> bool {
        self.descriptor.is_some_and(|d| d.has_alpha)
    }

    fn is_premultiplied(&self) -> bool {
        self.descriptor.is_some_and(|d| d.premultiplied)
    }

    fn is_srgb(&self) -> bool {
        self.descriptor.is_some_and(|d| d.srgb)
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
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
        self.descriptor
            .map(|d| d.bytes_per_block)
            .filter(|&bytes| bytes > 0)
            .and_then(|bytes| bytes.checked_mul(8))
    }

    fn max_elements(&self) -> u64 {
        self.max_elements
    }

    fn header_len(&self) -> usize {
        HEADER_LEN + LEVEL_INDEX_ENTRY_LEN * self.levels.max(1) as usize
    }
}
