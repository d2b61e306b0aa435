// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use enumflags2::BitFlags;

use crate::container::ContainerKind;
use crate::dimensions::Dimensions;
use crate::format::{FormatDescriptor, FormatFlag};
use crate::layout::{LayoutIssue, TextureLayout};

/// A loaded texture: its resolved format, the layout of its levels, and the bytes they live in.
///
/// Container files are borrowed from the caller; decoded images own their pixels.
#[derive(Debug, Clone)]
pub struct Texture<'a> {
    pub container: ContainerKind,
    pub format: FormatDescriptor,
    pub layout: TextureLayout,
    pub data: Cow<'a, [u8]>,
    /// Start of the pixel data within `data`. Level ranges are relative to this
    pub payload_offset: usize,
}

impl Texture<'_> {
    pub fn flags(&self) -> BitFlags<FormatFlag> {
        self.format.flags
    }

    /// Everything after the container's headers
    pub fn payload(&self) -> &[u8] {
        self.data.get(self.payload_offset..).unwrap_or_default()
    }

    /// The bytes of one mip level of one element.
    ///
    /// [`None`] if the level does not exist, or if the container stores its levels
    /// somewhere this crate does not track (KTX).
    pub fn level_bytes(&self, element: usize, mip: usize) -> Option<&[u8]> {
        let range = self.layout.level(element, mip)?.range.clone()?;
        self.payload().get(range)
    }

    pub fn num_elements(&self) -> usize {
        self.layout.elements.len()
    }

    pub fn num_mips(&self) -> usize {
        self.layout.num_mips()
    }

    /// Declared array size; 1 for textures that are not arrays
    pub fn num_layers(&self) -> usize {
        self.layout.layers.map_or(1, |l| l as usize)
    }

    /// Number of cube faces present; 0 for textures that are not cubemaps
    pub fn num_cubemap_faces(&self) -> usize {
        self.layout.faces.map_or(0, |f| f.len())
    }

    pub fn is_cubemap(&self) -> bool {
        self.layout.faces.is_some()
    }

    pub fn is_array(&self) -> bool {
        self.layout.layers.is_some()
    }

    /// Dimensions of the top mip level
    pub fn dimensions(&self) -> Option<Dimensions> {
        let level = self.layout.level(0, 0)?;
        Some(Dimensions::new(level.width, level.height))
    }

    pub fn is_partial(&self) -> bool {
        self.layout.is_partial()
    }

    pub fn issues(&self) -> &[LayoutIssue] {
        &self.layout.issues
    }

    /// Detach from the source buffer by copying it if it is borrowed
    pub fn into_owned(self) -> Texture<'static> {
        Texture {
            container: self.container,
            format: self.format,
            layout: self.layout,
            data: Cow::Owned(self.data.into_owned()),
            payload_offset: self.payload_offset,
        }
    }
}

/// A one-line summary, followed by one indented line per layout issue
impl Display for Texture<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.container, self.format)?;
        if let Some(dimensions) = self.dimensions() {
            write!(f, ", {dimensions}")?;
        }
        write!(f, ", {} mips", self.num_mips())?;
        if self.is_cubemap() {
            write!(f, ", {} cube faces", self.num_cubemap_faces())?;
        }
        if self.is_array() {
            write!(f, ", {} layers", self.num_layers())?;
        }
        if self.is_partial() {
            write!(f, " (partial)")?;
        }
        for issue in self.issues() {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}
