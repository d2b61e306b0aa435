// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use miette::Diagnostic;
use thiserror::Error;

use crate::format::FourCC;
use crate::layout::LayoutError;

#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error("File is too short for its header: needs {needed} bytes, has {available}")]
    #[diagnostic(code(texview::truncated_header))]
    TruncatedHeader { needed: usize, available: usize },

    #[error("Unknown pixel format: FourCC '{fourcc}' ({:#x}), dxgiFormat {dxgi}", .fourcc.to_u32())]
    #[diagnostic(
        code(texview::unknown_format),
        help("none of the format tables has an entry for this signature")
    )]
    UnknownFormat { fourcc: FourCC, dxgi: u32 },

    #[error("Not a DDS or KTX file, and no image decoder recognized it")]
    #[diagnostic(code(texview::unsupported_container))]
    UnsupportedContainer,

    #[error("Unsupported texture: {0}")]
    #[diagnostic(code(texview::unsupported_texture))]
    UnsupportedTexture(String),

    #[error(transparent)]
    #[diagnostic(code(texview::layout))]
    Layout(#[from] LayoutError),

    #[error("Error in file header: {0}")]
    #[diagnostic(code(texview::header))]
    Header(#[from] binrw::Error),

    #[error("KTX error: {0}")]
    #[diagnostic(code(texview::ktx))]
    Ktx(String),
}

pub type LoadResult<T> = Result<T, LoadError>;
