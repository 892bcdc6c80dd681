//! HTTP HEAD probing.
//!
//! Uses the curl crate (libcurl) to fetch the response headers of a URL so the
//! download filename can be resolved without transferring the body.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::str;
use std::time::Duration;

use crate::headers::{HeaderSet, ResponseHeaders};

/// Result of a HEAD request: final status and that response's headers.
#[derive(Debug, Clone)]
pub struct HeadResult {
    /// HTTP status of the final response (after redirects).
    pub status: u32,
    /// Headers of the final response; redirect hops are dropped.
    pub headers: HeaderSet,
}

impl ResponseHeaders for HeadResult {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.header(name)
    }
}

/// Performs a HEAD request and returns the collected headers.
///
/// Follows redirects. Optional custom request headers can be passed (e.g. auth).
/// Runs in the current thread.
pub fn probe(url: &str, custom_headers: &HashMap<String, String>) -> Result<HeadResult> {
    check_url(url)?;

    let mut lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    let mut list = curl::easy::List::new();
    for (k, v) in custom_headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !custom_headers.is_empty() {
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform().context("HEAD request failed")?;
    }

    let status = easy.response_code().context("no response code")?;
    if !(200..300).contains(&status) {
        anyhow::bail!("HEAD {} returned HTTP {}", url, status);
    }
    tracing::debug!(url, status, header_lines = lines.len(), "HEAD probe done");

    Ok(HeadResult {
        status,
        headers: HeaderSet::from_lines(&lines),
    })
}

/// Parses custom request headers given as `Name: value`.
pub fn parse_request_headers(raw: &[String]) -> Result<HashMap<String, String>> {
    let mut out = HashMap::new();
    for h in raw {
        let (name, value) = h
            .split_once(':')
            .with_context(|| format!("header {:?} is not in `Name: value` form", h))?;
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("header {:?} has an empty name", h);
        }
        out.insert(name.to_string(), value.trim().to_string());
    }
    Ok(out)
}

pub(crate) fn check_url(url: &str) -> Result<()> {
    let parsed = url::Url::parse(url).with_context(|| format!("invalid URL {:?}", url))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("unsupported URL scheme {:?} (expected http or https)", other),
    }
}
