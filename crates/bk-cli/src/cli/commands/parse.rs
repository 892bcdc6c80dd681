//! `bk parse <url>` – ask the API to parse a blog post and list the files.

use anyhow::Result;
use bk_core::api::{self, ParseRequest, ParsedFile};
use bk_core::config::ClientConfig;
use std::io::{self, Write};

pub fn run_parse(cfg: &ClientConfig, url: &str, formats: &[String]) -> Result<()> {
    let files = api::parse_blog(cfg, &parse_request(url, formats))?;
    write_files(&mut io::stdout().lock(), &files)
}

pub(super) fn parse_request(url: &str, formats: &[String]) -> ParseRequest {
    ParseRequest {
        url: url.to_string(),
        file_content: false,
        formats: formats.to_vec(),
    }
}

fn write_files(out: &mut impl Write, files: &[ParsedFile]) -> Result<()> {
    if files.is_empty() {
        writeln!(out, "No files produced.")?;
        return Ok(());
    }
    writeln!(out, "{:<8} {:<10} {}", "FORMAT", "SIZE", "NAME")?;
    for f in files {
        writeln!(out, "{:<8} {:<10} {}", f.format, f.size, f.archive_name())?;
    }
    Ok(())
}
