// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a [`RawPixelFormat`] into a [`FormatDescriptor`] by walking the format tables in order

use log::debug;

use crate::error::{LoadError, LoadResult};
use crate::format::tables::{self, AstcRow, CompressedRow, MaskRow, UncompressedRow};
use crate::format::{
    AlphaMode, DxgiFormat, FormatDescriptor, FormatFlag, FourCC, PixelFormatFlags, RawPixelFormat,
};

/// Resolve a container's pixel format signature to its canonical format.
///
/// Tables are tried in a fixed order and the first matching row wins:
/// ASTC, block-compressed, uncompressed by FourCC/DXGI, and finally channel masks.
pub fn resolve(raw: &RawPixelFormat) -> LoadResult<FormatDescriptor> {
    let format = lookup(raw)?.ok_or(LoadError::UnknownFormat {
        fourcc: raw.fourcc,
        dxgi: raw.dxgi(),
    })?;
    let format = apply_alpha_mode(format, raw.alpha_mode_bits());
    Ok(srgb_from_name(format))
}

fn lookup(raw: &RawPixelFormat) -> LoadResult<Option<FormatDescriptor>> {
    let dxgi = raw.dxgi();

    let dxgi_is_astc = raw.is_dx10() && DxgiFormat::is_astc_range(dxgi);
    if dxgi_is_astc || raw.fourcc.is_astc_like() {
        if let Some(row) = find_astc(raw.fourcc, dxgi) {
            debug!("{:?}/{dxgi} matched ASTC row '{}'", raw.fourcc, row.format.name);
            return Ok(Some(row.format));
        }
        if dxgi_is_astc {
            // a DXGI number inside the ASTC range is never anything else
            return Err(LoadError::UnknownFormat {
                fourcc: raw.fourcc,
                dxgi,
            });
        }
    }

    if let Some(row) = find_compressed(raw) {
        debug!("{:?}/{dxgi} matched compressed row '{}'", raw.fourcc, row.format.name);
        let mut format = row.format;
        if row.alpha_mode == AlphaMode::Premultiplied {
            format.flags |= FormatFlag::PremultipliedAlpha;
        }
        return Ok(Some(format));
    }

    let fourcc_usable = !raw.fourcc.is_none()
        && (raw.fourcc.looks_like_chars() || raw.flags.contains(PixelFormatFlags::FourCC));
    if fourcc_usable {
        if let Some(row) = find_uncompressed(raw.fourcc, dxgi) {
            debug!("{:?}/{dxgi} matched uncompressed row '{}'", raw.fourcc, row.format.name);
            return Ok(Some(row.format));
        }
    }

    if raw.flags.intersects(PixelFormatFlags::MASK_SIGNATURE) {
        if let Some(mask) = find_mask(raw) {
            let row = find_uncompressed(mask.d3dfmt, mask.dxgi.raw());
            if let Some(row) = row {
                debug!(
                    "{}-bit masks {:#x}/{:#x}/{:#x}/{:#x} matched '{}'",
                    raw.bit_count, raw.r_mask, raw.g_mask, raw.b_mask, raw.a_mask, row.format.name
                );
            }
            return Ok(row.map(|row| row.format));
        }
    }

    Ok(None)
}

/// `dxgi` must be 0 unless `fourcc` is `"DX10"`
fn find_astc(fourcc: FourCC, dxgi: u32) -> Option<&'static AstcRow> {
    tables::astc().find(|row| row.fourcc == fourcc && row.dxgi.raw() == dxgi)
}

fn find_compressed(raw: &RawPixelFormat) -> Option<&'static CompressedRow> {
    let dxgi = raw.dxgi();
    let alpha_mode = raw.alpha_mode_bits();

    tables::COMPRESSED.iter().find(|row| {
        let row_mode = row.alpha_mode as u8;
        row.fourcc == raw.fourcc
            && row.dxgi.raw() == dxgi
            && raw.flags.contains(row.required_flags)
            // most writers leave the alpha mode at 0, so only compare when both sides set it
            && (alpha_mode == 0 || row_mode == 0 || alpha_mode == row_mode)
    })
}

/// The D3DFMT number and DXGI number are alternative keys: either one matching selects the row
fn find_uncompressed(d3dfmt: FourCC, dxgi: u32) -> Option<&'static UncompressedRow> {
    let d3dfmt = if d3dfmt == FourCC::DX10 {
        FourCC::NONE
    } else {
        d3dfmt
    };

    tables::UNCOMPRESSED.iter().find(|row| {
        (dxgi != 0 && row.dxgi.raw() == dxgi) || (!d3dfmt.is_none() && row.d3dfmt == d3dfmt)
    })
}

fn find_mask(raw: &RawPixelFormat) -> Option<&'static MaskRow> {
    let signature = raw.flags & PixelFormatFlags::MASK_SIGNATURE;

    tables::MASKS.iter().find(|row| {
        if row.bit_count != raw.bit_count || row.flags != signature {
            return false;
        }
        let alpha_ok = !row.flags.intersects(PixelFormatFlags::Alpha | PixelFormatFlags::AlphaPixels)
            || row.a_mask == raw.a_mask;
        let luminance_ok = !row.flags.contains(PixelFormatFlags::Luminance) || row.r_mask == raw.r_mask;
        let rgb_ok = !row.flags.contains(PixelFormatFlags::RGB)
            || (row.r_mask == raw.r_mask && row.g_mask == raw.g_mask && row.b_mask == raw.b_mask);

        alpha_ok && luminance_ok && rgb_ok
    })
}

/// The file's own alpha mode overrides what the table row says
fn apply_alpha_mode(mut format: FormatDescriptor, alpha_mode: u8) -> FormatDescriptor {
    match AlphaMode::from_repr(alpha_mode) {
        Some(AlphaMode::Opaque) => {
            format.flags.remove(FormatFlag::HasAlpha | FormatFlag::PremultipliedAlpha);
        }
        Some(AlphaMode::Premultiplied) if format.has_alpha() => {
            format.flags |= FormatFlag::PremultipliedAlpha;
        }
        _ => {}
    }
    format
}

fn srgb_from_name(mut format: FormatDescriptor) -> FormatDescriptor {
    if !format.is_srgb() && format.name.to_ascii_lowercase().contains("srgb") {
        format.flags |= FormatFlag::Srgb;
    }
    format
}
