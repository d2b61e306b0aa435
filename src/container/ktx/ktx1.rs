// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Cursor;

use binrw::{binread, BinRead};

use crate::container::ContainerKind;
use crate::dimensions::Dimensions;
use crate::error::{LoadError, LoadResult};

use super::formats::{gl_components, gl_is_packed, gl_is_srgb};
use super::{KtxFormatId, KtxSource};

pub const IDENTIFIER: &[u8; 12] = b"\xABKTX 11\xBB\r\n\x1A\n";
pub const HEADER_LEN: usize = 64;

const LITTLE_ENDIAN: [u8; 4] = [0x01, 0x02, 0x03, 0x04];
const BIG_ENDIAN: [u8; 4] = [0x04, 0x03, 0x02, 0x01];

const GL_ALPHA: u32 = 0x1906;
const GL_RGBA: u32 = 0x1908;
const GL_LUMINANCE_ALPHA: u32 = 0x190A;
const GL_BGRA: u32 = 0x80E1;

#[derive(BinRead, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ktx1Fields {
    pub gl_type: u32,
    pub gl_type_size: u32,
    pub gl_format: u32,
    pub gl_internal_format: u32,
    pub gl_base_internal_format: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub number_of_array_elements: u32,
    pub number_of_faces: u32,
    pub number_of_mipmap_levels: u32,
    pub bytes_of_key_value_data: u32,
}

/// The 64-byte KTX1 header, in whichever byte order the writer used
#[binread]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[br(little, magic = b"\xABKTX 11\xBB\r\n\x1A\n")]
pub struct Ktx1Header {
    #[br(temp, assert(
        endianness == LITTLE_ENDIAN || endianness == BIG_ENDIAN,
        "invalid KTX endianness marker {:02x?}", endianness
    ))]
    endianness: [u8; 4],
    #[br(is_little = endianness == LITTLE_ENDIAN)]
    pub fields: Ktx1Fields,
    /// Bytes after the header and key/value data
    #[br(ignore)]
    pub data_len: usize,
}

impl Ktx1Header {
    pub fn parse(bytes: &[u8]) -> LoadResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(LoadError::TruncatedHeader {
                needed: HEADER_LEN,
                available: bytes.len(),
            });
        }
        let mut header = Self::read(&mut Cursor::new(bytes))?;

        let header_len = header.header_len();
        header.data_len = bytes
            .len()
            .checked_sub(header_len)
            .ok_or(LoadError::TruncatedHeader {
                needed: header_len,
                available: bytes.len(),
            })?;
        Ok(header)
    }
}

impl KtxSource for Ktx1Header {
    fn container(&self) -> ContainerKind {
        ContainerKind::Ktx1
    }

    fn format_id(&self) -> KtxFormatId {
        KtxFormatId::Gl {
            internal_format: self.fields.gl_internal_format,
            format: self.fields.gl_format,
            ty: self.fields.gl_type,
        }
    }

    fn is_compressed(&self) -> bool {
        self.fields.gl_type == 0
    }

    fn has_alpha(&self) -> bool {
        matches!(
            self.fields.gl_base_internal_format,
            GL_RGBA | GL_BGRA | GL_LUMINANCE_ALPHA | GL_ALPHA
        )
    }

    fn is_premultiplied(&self) -> bool {
        false
    }

    fn is_srgb(&self) -> bool {
        gl_is_srgb(self.fields.gl_internal_format)
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.fields.pixel_width, self.fields.pixel_height.max(1))
    }

    fn depth(&self) -> u32 {
        self.fields.pixel_depth
    }

    fn layers(&self) -> u32 {
        self.fields.number_of_array_elements
    }

    fn faces(&self) -> u32 {
        self.fields.number_of_faces
    }

    fn levels(&self) -> u32 {
        self.fields.number_of_mipmap_levels
    }

    fn bits_per_texel(&self) -> Option<u32> {
        let size = self.fields.gl_type_size;
        if gl_is_packed(self.fields.gl_type) {
            return size.checked_mul(8);
        }
        gl_components(self.fields.gl_format)?
            .checked_mul(size)?
            .checked_mul(8)
    }

    fn max_elements(&self) -> u64 {
        // every image of the base level takes at least one byte
        self.data_len as u64
    }

    fn header_len(&self) -> usize {
        HEADER_LEN.saturating_add(self.fields.bytes_of_key_value_data as usize)
    }
}
