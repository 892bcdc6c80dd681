//! Client for the Blog Keeper API: `POST /parse` and `POST /batch-download`.
//!
//! `/parse` turns a blog URL into downloadable files; `/batch-download` zips a
//! selection of them. The zip's name comes from the response's
//! Content-Disposition, resolved with [`crate::disposition`].

mod client;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ClientConfig;
use crate::disposition;
use crate::headers::ResponseHeaders;

pub use client::HttpResponse;

/// Formats `/parse` accepts.
pub const FORMATS: &[&str] = &["html", "md", "pdf", "mhtml"];

/// Prefix every batch-download file URL carries (server-side static mount).
pub const DOWNLOAD_PREFIX: &str = "/download/";

/// Body of `POST /parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseRequest {
    pub url: String,
    /// Ask the server to inline file contents in the response.
    #[serde(rename = "fileContent")]
    pub file_content: bool,
    pub formats: Vec<String>,
}

impl ParseRequest {
    pub fn validate(&self) -> Result<()> {
        crate::fetch_head::check_url(&self.url)?;
        if self.formats.is_empty() {
            anyhow::bail!("at least one format is required");
        }
        for f in &self.formats {
            if !FORMATS.contains(&f.as_str()) {
                anyhow::bail!("invalid format {:?}; valid formats are {:?}", f, FORMATS);
            }
        }
        Ok(())
    }
}

/// One entry of the `/parse` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsedFile {
    pub title: String,
    /// Server path under [`DOWNLOAD_PREFIX`], already percent-encoded.
    pub download_url: String,
    pub size: u64,
    /// Server-side format name (`markdown`, `html`, `pdf`, `mhtml`).
    pub format: String,
    #[serde(default)]
    pub file_content: String,
}

impl ParsedFile {
    /// Name the file should carry inside the batch zip: `<title>.<ext>`.
    pub fn archive_name(&self) -> String {
        let ext = match self.format.as_str() {
            "markdown" => "md",
            other => other,
        };
        format!("{}.{}", self.title, ext)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchDownloadFile {
    pub url: String,
    pub filename: String,
}

/// Body of `POST /batch-download`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchDownloadRequest {
    pub files: Vec<BatchDownloadFile>,
}

impl BatchDownloadRequest {
    pub fn from_parsed(files: &[ParsedFile]) -> Self {
        Self {
            files: files
                .iter()
                .map(|f| BatchDownloadFile {
                    url: f.download_url.clone(),
                    filename: f.archive_name(),
                })
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            anyhow::bail!("files list cannot be empty");
        }
        for f in &self.files {
            if !f.url.starts_with(DOWNLOAD_PREFIX) {
                anyhow::bail!("file url {:?} must start with {}", f.url, DOWNLOAD_PREFIX);
            }
        }
        Ok(())
    }

    /// Name the server gives the zip: first filename without its extension, plus `.zip`.
    pub fn default_zip_name(&self) -> String {
        let stem = self
            .files
            .first()
            .map(|f| match f.filename.rsplit_once('.') {
                Some((stem, _)) => stem,
                None => f.filename.as_str(),
            })
            .unwrap_or("blog_content");
        format!("{}.zip", stem)
    }
}

/// Joins `path` onto the configured API host, keeping any base path.
pub fn endpoint(cfg: &ClientConfig, path: &str) -> Result<String> {
    let mut base = url::Url::parse(&cfg.api_host)
        .with_context(|| format!("api_host {:?} is not a valid URL", cfg.api_host))?;
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    let joined = base
        .join(path.trim_start_matches('/'))
        .with_context(|| format!("joining {:?} onto {}", path, base))?;
    Ok(joined.into())
}

/// `POST /parse`: returns the files the server produced for `request.url`.
pub fn parse_blog(cfg: &ClientConfig, request: &ParseRequest) -> Result<Vec<ParsedFile>> {
    request.validate()?;
    let url = endpoint(cfg, "parse")?;
    let body = serde_json::to_vec(request)?;
    let resp = client::post_json(&url, &body)?;
    let files: Vec<ParsedFile> =
        serde_json::from_slice(&resp.body).context("decoding /parse response")?;
    tracing::info!(url = %request.url, files = files.len(), "parsed blog");
    Ok(files)
}

/// `POST /batch-download` and save the zip into `dest_dir`.
///
/// The saved name is the response's Content-Disposition filename; when the
/// server sends none, the name the server would have chosen is used.
pub fn batch_download(
    cfg: &ClientConfig,
    request: &BatchDownloadRequest,
    dest_dir: &Path,
) -> Result<PathBuf> {
    request.validate()?;
    let url = endpoint(cfg, "batch-download")?;
    let body = serde_json::to_vec(request)?;
    let resp = client::post_json(&url, &body)?;

    let name = save_name(&resp, request)?;
    let path = dest_dir.join(&name);
    fs::write(&path, &resp.body).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = resp.body.len(), "saved batch download");
    Ok(path)
}

/// Resolves the local filename for a batch-download response.
pub fn save_name(response: &dyn ResponseHeaders, request: &BatchDownloadRequest) -> Result<String> {
    let extracted = disposition::filename_from_response(response)
        .context("cannot decode filename from batch-download response")?;
    let candidate = if extracted.is_empty() {
        request.default_zip_name()
    } else {
        extracted
    };
    local_file_name(&candidate)
        .with_context(|| format!("server filename {:?} is not a usable file name", candidate))
}

/// Last path component of `name`, so a header can't point outside the target dir.
fn local_file_name(name: &str) -> Option<String> {
    let last = name.rsplit(&['/', '\\'][..]).next()?.trim();
    match last {
        "" | "." | ".." => None,
        s if s.contains('\0') => None,
        s => Some(s.to_string()),
    }
}
