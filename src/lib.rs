// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Identify the container and exact pixel format of a texture file, and find its mip levels.
//!
//! ```no_run
//! let bytes = std::fs::read("texture.dds").unwrap();
//! let texture = texview::load(&bytes).unwrap();
//! println!("{} {}", texture.container, texture.format);
//! ```

pub mod container;
pub mod dimensions;
pub mod error;
pub mod format;
pub mod layout;
pub mod shape;
pub mod texture;
mod util;

pub use container::{load, ContainerKind};
pub use error::{LoadError, LoadResult};
pub use texture::Texture;
