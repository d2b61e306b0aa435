// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Ordinary images, for files that are not texture containers

use std::borrow::Cow;

use log::{debug, warn};

use crate::container::ContainerKind;
use crate::dimensions::Dimensions;
use crate::error::{LoadError, LoadResult};
use crate::format::{resolve, AlphaMode, DxgiFormat, RawPixelFormat};
use crate::layout::layout;
use crate::texture::Texture;

/// Decode `bytes` with the `image` crate into a single-level RGBA8 texture
pub fn load(bytes: &[u8]) -> LoadResult<Texture<'static>> {
    let image_format = image::guess_format(bytes).map_err(|_| LoadError::UnsupportedContainer)?;
    let image = image::load_from_memory_with_format(bytes, image_format).map_err(|err| {
        warn!("Could not decode {image_format:?} image: {err}");
        LoadError::UnsupportedContainer
    })?;

    let alpha_mode = if image.color().has_alpha() {
        AlphaMode::Straight
    } else {
        AlphaMode::Opaque
    };
    let format = resolve(&RawPixelFormat::from_dxgi(
        DxgiFormat::R8G8B8A8UNorm.raw(),
        alpha_mode,
    ))?;
    debug!("Decoded {image_format:?} image with color type {:?}", image.color());

    let pixels = image.to_rgba8();
    let dimensions = Dimensions::new(pixels.width(), pixels.height());
    let data = pixels.into_raw();
    let layout = layout(&format, dimensions, 1, None, None, data.len())?;

    Ok(Texture {
        container: ContainerKind::Image(image_format),
        format,
        layout,
        data: Cow::Owned(data),
        payload_offset: 0,
    })
}
