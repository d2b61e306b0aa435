// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Small container files, written field by field

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

pub const DDPF_ALPHAPIXELS: u32 = 0x1;
pub const DDPF_FOURCC: u32 = 0x4;
pub const DDPF_RGB: u32 = 0x40;

pub const DDSCAPS2_CUBEMAP: u32 = 0x200;
pub const DDSCAPS2_POSITIVEX: u32 = 0x400;
pub const DDSCAPS2_NEGATIVEX: u32 = 0x800;
pub const DDSCAPS2_POSITIVEY: u32 = 0x1000;
pub const DDSCAPS2_NEGATIVEY: u32 = 0x2000;

fn words(words: impl IntoIterator<Item = u32>) -> impl Iterator<Item = u8> {
    words.into_iter().flat_map(u32::to_le_bytes)
}

#[derive(Clone, Debug, Default)]
pub struct Dds {
    pub width: u32,
    pub height: u32,
    pub mips: u32,
    pub pf_flags: u32,
    pub fourcc: [u8; 4],
    pub bit_count: u32,
    pub masks: [u32; 4],
    pub caps2: u32,
    /// dxgiFormat, dimension, misc flags, array size, misc flags 2
    pub dx10: Option<[u32; 5]>,
}

impl Dds {
    pub fn fourcc(width: u32, height: u32, fourcc: &[u8; 4]) -> Self {
        Self {
            width,
            height,
            pf_flags: DDPF_FOURCC,
            fourcc: *fourcc,
            ..Default::default()
        }
    }

    pub fn masks(width: u32, height: u32, pf_flags: u32, bit_count: u32, masks: [u32; 4]) -> Self {
        Self {
            width,
            height,
            pf_flags,
            bit_count,
            masks,
            ..Default::default()
        }
    }

    pub fn dx10(width: u32, height: u32, dx10: [u32; 5]) -> Self {
        Self {
            dx10: Some(dx10),
            ..Self::fourcc(width, height, b"DX10")
        }
    }

    pub fn with_payload(&self, payload_len: usize) -> Vec<u8> {
        let mut bytes = b"DDS ".to_vec();
        bytes.extend(words([124, 0x1007, self.height, self.width, 0, 0, self.mips]));
        bytes.extend(words([0; 11]));
        bytes.extend(words([
            32,
            self.pf_flags,
            u32::from_le_bytes(self.fourcc),
            self.bit_count,
        ]));
        bytes.extend(words(self.masks));
        bytes.extend(words([0x1000, self.caps2, 0, 0, 0]));
        if let Some(dx10) = self.dx10 {
            bytes.extend(words(dx10));
        }
        bytes.extend((0..payload_len).map(|i| (i % 251) as u8));
        bytes
    }
}

/// A little-endian KTX1 file with `payload_len` bytes after the header
pub fn ktx1(fields: [u32; 12], payload_len: usize) -> Vec<u8> {
    let mut bytes = b"\xABKTX 11\xBB\r\n\x1A\n".to_vec();
    bytes.extend(words([0x04030201]));
    bytes.extend(words(fields));
    bytes.resize(bytes.len() + payload_len, 0);
    bytes
}

/// A KTX2 RGBA8 file with a four-sample descriptor and one mip level
pub fn ktx2_rgba8(width: u32, height: u32, layers: u32, vk_format: u32) -> Vec<u8> {
    const HEADER_AND_INDEX: u32 = 80 + 24;
    const DFD_LEN: u32 = 4 + 24 + 4 * 16;
    let level_len = u64::from(width * height * 4 * layers.max(1));

    let mut bytes = b"\xABKTX 20\xBB\r\n\x1A\n".to_vec();
    bytes.extend(words([vk_format, 1, width, height, 0, layers, 1, 1, 0]));
    bytes.extend(words([HEADER_AND_INDEX, DFD_LEN, 0, 0]));
    bytes.extend([0u8; 16]); // no supercompression global data

    let data_offset = u64::from(HEADER_AND_INDEX + DFD_LEN);
    for value in [data_offset, level_len, level_len] {
        bytes.extend(value.to_le_bytes());
    }

    bytes.extend(words([DFD_LEN, 0]));
    bytes.extend(2u16.to_le_bytes());
    bytes.extend(((DFD_LEN - 4) as u16).to_le_bytes());
    bytes.extend([1, 1, 1, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0]);
    for (i, channel) in [0u8, 1, 2, 15].into_iter().enumerate() {
        bytes.extend([(i * 8) as u8, 0, 7, channel]);
        bytes.extend(words([0, 0, 255]));
    }

    bytes.resize(bytes.len() + level_len as usize, 0x7f);
    bytes
}

pub fn png(width: u32, height: u32) -> anyhow::Result<Vec<u8>> {
    let image = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 128]));
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
