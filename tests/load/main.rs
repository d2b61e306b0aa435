// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;
use std::process::Command;

use anyhow::Result;
use itertools::Itertools;
use tempfile::tempdir;

use texview::dimensions::Dimensions;
use texview::format::{BlockKind, FormatFlag, FormatKind};
use texview::layout::{LayoutError, LayoutIssue};
use texview::shape::CubeFace;
use texview::*;

use fixtures::*;

mod fixtures;

const BGRA8_MASKS: [u32; 4] = [0xff0000, 0xff00, 0xff, 0xff000000];

/// Four mips declared, bytes for two
#[test]
fn partial_dds() -> Result<()> {
    let file = Dds {
        mips: 4,
        ..Dds::fourcc(8, 8, b"DXT1")
    }
    .with_payload(32 + 8 + 2);
    let texture = load(&file)?;

    assert_eq!(texture.container, ContainerKind::Dds);
    assert!(texture.is_partial());
    assert_eq!(texture.num_mips(), 2);
    assert_eq!(texture.level_bytes(0, 1).map(<[u8]>::len), Some(8));
    assert_eq!(texture.level_bytes(0, 2), None);
    Ok(())
}

#[test]
fn empty_dds_payload() {
    let file = Dds::fourcc(8, 8, b"DXT5").with_payload(0);
    assert!(matches!(
        load(&file),
        Err(LoadError::Layout(LayoutError::Truncated { level: 0, .. }))
    ));
}

#[test]
fn incomplete_cubemap() -> Result<()> {
    let file = Dds {
        caps2: DDSCAPS2_CUBEMAP
            | DDSCAPS2_POSITIVEX
            | DDSCAPS2_NEGATIVEX
            | DDSCAPS2_POSITIVEY
            | DDSCAPS2_NEGATIVEY,
        ..Dds::masks(16, 16, DDPF_RGB | DDPF_ALPHAPIXELS, 32, BGRA8_MASKS)
    }
    .with_payload(4 * 16 * 16 * 4);
    let texture = load(&file)?;

    assert!(texture.is_cubemap());
    assert_eq!(texture.num_cubemap_faces(), 4);
    assert_eq!(texture.num_elements(), 4);
    assert_eq!(
        texture.layout.elements.iter().map(|e| e.face).collect_vec(),
        [
            Some(CubeFace::PositiveX),
            Some(CubeFace::NegativeX),
            Some(CubeFace::PositiveY),
            Some(CubeFace::NegativeY)
        ]
    );
    Ok(())
}

/// 256x256 has 9 levels; the 10th declared level still takes up space between array slots
#[test]
fn extra_mips_in_array() -> Result<()> {
    let chain: usize = (0..9).map(|i| (256usize >> i).pow(2) * 4).sum();
    let file = Dds {
        mips: 10,
        ..Dds::dx10(256, 256, [28, 3, 0, 2, 0])
    }
    .with_payload(2 * (chain + 4));
    let texture = load(&file)?;

    assert_eq!(texture.num_mips(), 9);
    assert_eq!(texture.num_elements(), 2);
    assert!(!texture.is_partial());
    assert_eq!(
        texture.issues(),
        [LayoutIssue::InconsistentMipCount {
            declared: 10,
            actual: 9
        }]
    );

    let second = texture.layout.level(1, 0).and_then(|l| l.range.clone());
    assert_eq!(second, Some(chain + 4..chain + 4 + 256 * 256 * 4));
    Ok(())
}

/// X1R5G5B5 without the alpha flag is not A1R5G5B5
#[test]
fn rgb5x1_masks() -> Result<()> {
    let file = Dds::masks(4, 4, DDPF_RGB, 16, [0x7c00, 0x3e0, 0x1f, 0]).with_payload(32);
    let texture = load(&file)?;
    assert_eq!(texture.format.name, "RGB5X1 UNORM");
    assert!(!texture.format.has_alpha());
    Ok(())
}

#[test]
fn dx10_srgb_bc7() -> Result<()> {
    let file = Dds::dx10(8, 8, [99, 3, 0, 1, 0]).with_payload(64);
    let texture = load(&file)?;
    assert_eq!(
        texture.format.kind,
        FormatKind::Compressed {
            block: BlockKind::BC7
        }
    );
    assert!(texture.flags().contains(FormatFlag::Srgb));
    assert_eq!(texture.payload_offset, 148);
    Ok(())
}

#[test]
fn ktx1_cubemap() -> Result<()> {
    // GL_UNSIGNED_BYTE, GL_RGBA, GL_RGBA8, 8x8 cube with 4 levels
    let fields = [0x1401, 1, 0x1908, 0x8058, 0x1908, 8, 8, 0, 0, 6, 4, 0];
    let file = ktx1(fields, 6 * 4 * (64 + 16 + 4 + 1) + 16);
    let texture = load(&file)?;

    assert_eq!(texture.container, ContainerKind::Ktx1);
    assert_eq!(texture.format.name, "RGBA8 UNORM");
    assert_eq!(texture.num_elements(), 6);
    assert_eq!(texture.num_cubemap_faces(), 6);
    assert_eq!(texture.num_mips(), 4);
    assert_eq!(texture.payload_offset, 64);
    // KTX files keep track of their own levels
    assert_eq!(texture.level_bytes(0, 0), None);
    Ok(())
}

#[test]
fn ktx1_compressed() -> Result<()> {
    // GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT
    let fields = [0, 1, 0, 0x8C4D, 0x1908, 16, 16, 0, 3, 1, 1, 0];
    let file = ktx1(fields, 3 * 128);
    let texture = load(&file)?;

    assert_eq!(
        texture.format.kind,
        FormatKind::Compressed {
            block: BlockKind::BC1
        }
    );
    assert!(texture.format.is_srgb());
    assert!(texture.format.has_alpha());
    assert_eq!(texture.num_layers(), 3);
    assert!(texture.is_array());
    Ok(())
}

#[test]
fn ktx2_array() -> Result<()> {
    let file = ktx2_rgba8(4, 2, 3, 43);
    let texture = load(&file)?;

    assert_eq!(
        texture.container,
        ContainerKind::Ktx2 {
            supercompression: None
        }
    );
    assert_eq!(texture.format.name, "RGBA8 UNORM SRGB");
    assert_eq!(texture.num_layers(), 3);
    assert_eq!(texture.dimensions(), Some(Dimensions::new(4, 2)));
    Ok(())
}

#[test]
fn png_fallback() -> Result<()> {
    let file = png(5, 3)?;
    let texture = load(&file)?;

    assert!(matches!(texture.container, ContainerKind::Image(_)));
    assert_eq!(texture.num_mips(), 1);
    let pixels = texture.level_bytes(0, 0).unwrap_or_default();
    assert_eq!(pixels.len(), 5 * 3 * 4);
    assert_eq!(&pixels[4..8], [1, 0, 0, 128]);

    // decoded images own their pixels
    let owned = texture.into_owned();
    assert_eq!(owned.payload().len(), 60);
    Ok(())
}

#[test]
fn unsupported_container() {
    assert!(matches!(
        load(b"GIF?nope, not a texture"),
        Err(LoadError::UnsupportedContainer)
    ));
    assert!(matches!(
        load(b"DD"),
        Err(LoadError::TruncatedHeader {
            needed: 4,
            available: 2
        })
    ));
}

/// Inspect a few files with the command line tool
#[test]
fn cli_report() -> Result<()> {
    let dir = tempdir()?;
    let dxt1 = dir.path().join("bc1.dds");
    let cube = dir.path().join("cube.ktx");
    let broken = dir.path().join("broken.dds");

    fs::write(&dxt1, Dds::fourcc(4, 4, b"DXT1").with_payload(8))?;
    fs::write(
        &cube,
        ktx1([0x1401, 1, 0x1908, 0x8058, 0x1908, 2, 2, 0, 0, 6, 1, 0], 6 * 20),
    )?;
    fs::write(&broken, &Dds::fourcc(4, 4, b"DXT1").with_payload(0)[..100])?;

    let good = Command::new(env!("CARGO_BIN_EXE_texview"))
        .args([&dxt1, &cube])
        .output()?;
    assert!(good.status.success());
    let stdout = String::from_utf8(good.stdout)?;
    assert!(stdout.contains("bc1.dds: DDS, DXT1 (BC1), 4x4, 1 mips"), "{stdout}");
    assert!(stdout.contains("cube.ktx: KTX, RGBA8 UNORM"), "{stdout}");
    assert!(stdout.contains("6 cube faces"), "{stdout}");

    let bad = Command::new(env!("CARGO_BIN_EXE_texview"))
        .args([&dxt1, &broken])
        .output()?;
    assert!(!bad.status.success());
    assert!(String::from_utf8(bad.stderr)?.contains("broken.dds"));
    Ok(())
}
