// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! DirectDraw Surface files

use std::borrow::Cow;

use log::debug;

use crate::container::ContainerKind;
use crate::error::LoadResult;
use crate::format::resolve;
use crate::layout::layout;
use crate::texture::Texture;

pub use header::DdsHeader;

mod header;
#[cfg(test)]
mod tests;

pub const MAGIC: &[u8; 4] = b"DDS ";

/// Load a DDS file. The payload stays in `bytes`, which the texture borrows.
///
/// DDS files are ordered as Array(Cubemap(Mipmap(Surface)))
pub fn load(bytes: &[u8]) -> LoadResult<Texture<'_>> {
    let header = DdsHeader::parse(bytes)?;
    let format = resolve(header.pixel_format())?;
    debug!("DDS header {header:?} resolved to {format}");

    let payload_offset = header.payload_offset();
    let layout = layout(
        &format,
        header.dimensions(),
        header.mip_count(),
        header.layers(),
        header.faces(),
        bytes.len().saturating_sub(payload_offset),
    )?;

    Ok(Texture {
        container: ContainerKind::Dds,
        format,
        layout,
        data: Cow::Borrowed(bytes),
        payload_offset,
    })
}
