// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter};

use image::ImageFormat;
use log::debug;

use crate::error::{LoadError, LoadResult};
use crate::texture::Texture;

pub mod dds;
pub mod decoded;
pub mod ktx;

pub use ktx::Supercompression;

/// The kind of file a texture was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Dds,
    Ktx1,
    Ktx2 {
        supercompression: Option<Supercompression>,
    },
    /// An ordinary image, decoded to RGBA8
    Image(ImageFormat),
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerKind::Dds => write!(f, "DDS"),
            ContainerKind::Ktx1 => write!(f, "KTX"),
            ContainerKind::Ktx2 {
                supercompression: None,
            } => write!(f, "KTX2"),
            ContainerKind::Ktx2 {
                supercompression: Some(scheme),
            } => write!(f, "KTX2 ({scheme})"),
            ContainerKind::Image(format) => write!(f, "{format:?} image"),
        }
    }
}

/// Which loader a buffer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Dds,
    Ktx1,
    Ktx2,
    Other,
}

/// Identify a container by its leading bytes
pub fn detect(bytes: &[u8]) -> LoadResult<Signature> {
    if bytes.len() < dds::MAGIC.len() {
        return Err(LoadError::TruncatedHeader {
            needed: dds::MAGIC.len(),
            available: bytes.len(),
        });
    }

    Ok(if bytes.starts_with(dds::MAGIC) {
        Signature::Dds
    } else if bytes.starts_with(ktx::KTX1_IDENTIFIER) {
        Signature::Ktx1
    } else if bytes.starts_with(ktx::KTX2_IDENTIFIER) {
        Signature::Ktx2
    } else {
        Signature::Other
    })
}

/// Identify the container in `bytes` and describe the texture inside it.
///
/// DDS and KTX textures borrow `bytes`; anything else is handed to the `image`
/// crate and owns its decoded pixels.
pub fn load(bytes: &[u8]) -> LoadResult<Texture<'_>> {
    let signature = detect(bytes)?;
    debug!("Loading {} bytes as {signature:?}", bytes.len());

    match signature {
        Signature::Dds => dds::load(bytes),
        Signature::Ktx1 => ktx::load_ktx1(bytes),
        Signature::Ktx2 => ktx::load_ktx2(bytes),
        Signature::Other => decoded::load(bytes),
    }
}
