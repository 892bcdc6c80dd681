//! `bk filename` – extract the filename from a header value.

use anyhow::{Context, Result};
use bk_core::disposition;
use std::io::{self, Write};

pub fn run_filename(header_value: &str) -> Result<()> {
    write_filename(&mut io::stdout().lock(), header_value)
}

fn write_filename(out: &mut impl Write, header_value: &str) -> Result<()> {
    let name = disposition::filename_from_header_value(header_value)
        .with_context(|| format!("cannot decode filename from {:?}", header_value))?;
    print_filename(out, &name)
}

/// Writes `name` on its own line, or nothing when no filename could be determined.
pub(super) fn print_filename(out: &mut impl Write, name: &str) -> Result<()> {
    if name.is_empty() {
        tracing::info!("no filename in content-disposition");
    } else {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
