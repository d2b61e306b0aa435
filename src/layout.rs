// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Byte layout of every element and mip level in a texture payload

use std::fmt::{Display, Formatter};
use std::iter::successors;
use std::ops::Range;

use itertools::Itertools;
use log::warn;
use miette::Diagnostic;
use thiserror::Error;

use crate::dimensions::{Dimensioned, Dimensions};
use crate::format::{FormatDescriptor, SizeRule};
use crate::shape::{element_indices, CubeFace, CubeFaceMask};
use crate::util::div_ceil;

#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Mip level {level} of element {element} needs {needed} bytes, but only {available} remain")]
    #[diagnostic(code(texview::layout::truncated))]
    Truncated {
        element: usize,
        level: usize,
        needed: usize,
        available: usize,
    },

    #[error("Size of mip level {level} of element {element} does not fit in memory")]
    #[diagnostic(code(texview::layout::overflow))]
    Overflow { element: usize, level: usize },

    #[error("Format '{0}' has no known block size")]
    #[diagnostic(code(texview::layout::unsized_format))]
    UnsizedFormat(&'static str),
}

/// A problem found while building a layout that did not stop it from being built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutIssue {
    /// The payload ended early; the layout stops before `level` of `element`
    Truncated {
        element: usize,
        level: usize,
        needed: usize,
        available: usize,
    },
    /// The header declared more mip levels than the chain down to 1x1 has
    InconsistentMipCount { declared: u32, actual: u32 },
}

impl Display for LayoutIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutIssue::Truncated {
                element,
                level,
                needed,
                available,
            } => write!(
                f,
                "payload ends in mip level {level} of element {element} \
                 ({available} of {needed} bytes present)"
            ),
            LayoutIssue::InconsistentMipCount { declared, actual } => {
                write!(f, "{declared} mip levels declared, but the chain has {actual}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipLevel {
    pub width: u32,
    pub height: u32,
    /// Byte range relative to the start of the payload. [`None`] when the container
    /// manages its own level storage
    pub range: Option<Range<usize>>,
}

impl Dimensioned for MipLevel {
    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

impl MipLevel {
    pub fn len(&self) -> Option<usize> {
        self.range.as_ref().map(|r| r.len())
    }
}

/// One array layer of one cube face (either may be absent), with its own mip chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub layer: Option<u32>,
    pub face: Option<CubeFace>,
    pub levels: Vec<MipLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextureLayout {
    pub elements: Vec<Element>,
    pub issues: Vec<LayoutIssue>,
    /// Declared array size, if the texture is an array
    pub layers: Option<u32>,
    /// Declared cube faces, if the texture is a cubemap
    pub faces: Option<CubeFaceMask>,
}

impl TextureLayout {
    /// True if the payload ended before every declared level was found
    pub fn is_partial(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i, LayoutIssue::Truncated { .. }))
    }

    /// Number of mip levels in the first element
    pub fn num_mips(&self) -> usize {
        self.elements.first().map_or(0, |e| e.levels.len())
    }

    pub fn level(&self, element: usize, mip: usize) -> Option<&MipLevel> {
        self.elements.get(element)?.levels.get(mip)
    }

    fn record(&mut self, issue: LayoutIssue) {
        if !self.issues.contains(&issue) {
            self.issues.push(issue);
        }
    }
}

/// Byte size of one mip level of the given dimensions, or [`None`] on overflow.
///
/// A level always holds at least one texel, even if a header claims a zero extent.
pub fn level_size(rule: SizeRule, dimensions: Dimensions) -> Option<usize> {
    let w = (dimensions.width as usize).max(1);
    let h = (dimensions.height as usize).max(1);

    let blocks = |bw: usize, bh: usize| -> Option<usize> {
        let x = div_ceil(w, bw)?.max(1);
        let y = div_ceil(h, bh)?.max(1);
        x.checked_mul(y)
    };

    match rule {
        SizeRule::Block8 => blocks(4, 4)?.checked_mul(8),
        SizeRule::Block16 => blocks(4, 4)?.checked_mul(16),
        SizeRule::Astc {
            block_width,
            block_height,
        } => blocks(block_width as usize, block_height as usize)?.checked_mul(16),
        SizeRule::PackedPairs => div_ceil(w, 2)?.checked_mul(4)?.checked_mul(h),
        SizeRule::Bits(bpp) => div_ceil(w.checked_mul(bpp as usize)?, 8)?.checked_mul(h),
    }
}

/// Compute where every level of every element lives in a payload of `payload_len` bytes.
///
/// Elements are laid out array layers outer, cube faces inner, each with its full mip chain.
/// Levels stop at 1x1 even if more are declared; for textures with several elements the
/// remaining declared levels are skipped in the byte stream so the next element starts
/// where the writer put it. If the payload ends early the layout is returned as partial,
/// unless not even the first level fits.
pub fn layout(
    format: &FormatDescriptor,
    base: Dimensions,
    mip_count: u32,
    array_size: Option<u32>,
    faces: Option<CubeFaceMask>,
    payload_len: usize,
) -> Result<TextureLayout, LayoutError> {
    let rule = format
        .size_rule()
        .ok_or(LayoutError::UnsizedFormat(format.name))?;
    let declared = mip_count.max(1);
    let chain = base.mips().take(declared as usize).collect_vec();
    let skipped = declared as usize - chain.len();

    // the element count comes straight from the header, so elements are only
    // materialized while the payload still has bytes for them
    let multi_element =
        array_size.is_some_and(|l| l > 1) || faces.is_some_and(|f| f.len() > 1);

    let mut result = TextureLayout {
        layers: array_size,
        faces,
        ..Default::default()
    };
    let mut offset = 0usize;

    'elements: for (element, (layer, face)) in element_indices(array_size, faces).enumerate() {
        let mut levels = Vec::with_capacity(chain.len());

        for (level, dims) in chain.iter().enumerate() {
            let size = level_size(rule, *dims).ok_or(LayoutError::Overflow { element, level })?;
            let end = offset
                .checked_add(size)
                .ok_or(LayoutError::Overflow { element, level })?;

            if end > payload_len {
                let available = payload_len.saturating_sub(offset);
                if result.elements.is_empty() && levels.is_empty() {
                    return Err(LayoutError::Truncated {
                        element,
                        level,
                        needed: size,
                        available,
                    });
                }

                warn!(
                    "Mip level {level} ({dims}) of element {element} is incomplete: \
                     needs {size} bytes, {available} left"
                );
                result.record(LayoutIssue::Truncated {
                    element,
                    level,
                    needed: size,
                    available,
                });
                if !levels.is_empty() {
                    result.elements.push(Element {
                        layer,
                        face,
                        levels,
                    });
                }
                break 'elements;
            }

            levels.push(MipLevel {
                width: dims.width,
                height: dims.height,
                range: Some(offset..end),
            });
            offset = end;
        }

        if skipped > 0 {
            if element == 0 {
                warn!(
                    "Texture claims {declared} mip levels, but is already done after {}",
                    chain.len()
                );
            }
            result.record(LayoutIssue::InconsistentMipCount {
                declared,
                actual: chain.len() as u32,
            });

            if multi_element {
                let smallest = level_size(rule, Dimensions::new(1, 1))
                    .and_then(|size| size.checked_mul(skipped))
                    .and_then(|size| offset.checked_add(size))
                    .ok_or(LayoutError::Overflow {
                        element,
                        level: chain.len(),
                    })?;
                offset = smallest;
            }
        }

        result.elements.push(Element {
            layer,
            face,
            levels,
        });
    }

    Ok(result)
}

/// A layout for containers that index their own level data: dimensions only, no byte ranges.
///
/// Exactly `mip_count` levels are listed per element (0 counts as 1).
pub fn dummy_layout(
    base: Dimensions,
    mip_count: u32,
    array_size: Option<u32>,
    faces: Option<CubeFaceMask>,
) -> TextureLayout {
    let levels = successors(Some(base), |d| Some(d.next_mip()))
        .take(mip_count.max(1) as usize)
        .map(|d| MipLevel {
            width: d.width,
            height: d.height,
            range: None,
        })
        .collect_vec();

    let elements = element_indices(array_size, faces)
        .map(|(layer, face)| Element {
            layer,
            face,
            levels: levels.clone(),
        })
        .collect();

    TextureLayout {
        elements,
        issues: Vec::new(),
        layers: array_size,
        faces,
    }
}
