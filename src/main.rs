// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use clap::Parser;
use lightweight_mmap::handles::ReadOnlyFileHandle;
use lightweight_mmap::mmap::ReadOnlyMmap;
use log::LevelFilter;
use miette::{miette, IntoDiagnostic};
use rayon::prelude::*;

/// Print the container, pixel format and mip layout of texture files
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Also log how each format was identified
    #[arg(short, long)]
    verbose: bool,

    /// DDS, KTX, KTX2 or image files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn inspect(path: &Path) -> miette::Result<String> {
    let name = path
        .to_str()
        .ok_or_else(|| miette!("{} is not a valid UTF-8 path", path.display()))?;
    let handle =
        ReadOnlyFileHandle::open(name).map_err(|e| miette!("Could not open {name}: {e}"))?;
    let size = handle
        .size()
        .map_err(|e| miette!("Could not get the size of {name}: {e}"))? as usize;

    // empty files cannot be mapped
    if size == 0 {
        return Ok(texview::load(&[])?.to_string());
    }
    let mapping =
        ReadOnlyMmap::new(&handle, 0, size).map_err(|e| miette!("Could not map {name}: {e}"))?;

    let texture = texview::load(mapping.as_slice())?;
    Ok(texture.to_string())
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .into_diagnostic()?;

    let reports: Vec<_> = cli.files.par_iter().map(|path| inspect(path)).collect();

    let mut failed = 0;
    for (path, report) in cli.files.iter().zip(reports) {
        match report {
            Ok(summary) => println!("{}: {summary}", path.display()),
            Err(err) => {
                failed += 1;
                eprintln!("{}: {err:?}", path.display());
            }
        }
    }

    if failed > 0 {
        return Err(miette!("{failed} of {} files could not be loaded", cli.files.len()));
    }
    Ok(())
}
