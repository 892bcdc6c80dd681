//! `bk download <url>` – parse a blog post, batch-download its files as a zip
//! and save it under the name the server sends in Content-Disposition.

use anyhow::Result;
use bk_core::api::{self, BatchDownloadRequest};
use bk_core::config::ClientConfig;
use std::path::Path;

use super::parse::parse_request;

pub fn run_download(
    cfg: &ClientConfig,
    url: &str,
    formats: &[String],
    output_dir: &Path,
) -> Result<()> {
    let files = api::parse_blog(cfg, &parse_request(url, formats))?;
    if files.is_empty() {
        anyhow::bail!("server produced no files for {}", url);
    }
    let request = BatchDownloadRequest::from_parsed(&files);
    let saved = api::batch_download(cfg, &request, output_dir)?;
    println!("{}", saved.display());
    Ok(())
}
