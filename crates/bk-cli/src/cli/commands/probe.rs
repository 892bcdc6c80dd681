//! `bk probe <url>` – HEAD a URL and print the filename from its response.

use anyhow::{Context, Result};
use bk_core::{disposition, fetch_head};
use std::io;

use super::filename::print_filename;

pub fn run_probe(url: &str, raw_headers: &[String]) -> Result<()> {
    let custom = fetch_head::parse_request_headers(raw_headers)?;
    let head = fetch_head::probe(url, &custom)?;
    tracing::info!(url, status = head.status, "probed");
    let name = disposition::filename_from_response(&head)
        .with_context(|| format!("cannot decode filename from {}", url))?;
    print_filename(&mut io::stdout().lock(), &name)
}
