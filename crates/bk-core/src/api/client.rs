//! JSON POST over libcurl.

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

use crate::headers::{HeaderSet, ResponseHeaders};

/// Error bodies longer than this are cut in error messages.
const ERROR_BODY_PREVIEW: usize = 512;

/// A complete response: status, final headers, body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub headers: HeaderSet,
    pub body: Vec<u8>,
}

impl ResponseHeaders for HttpResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.header(name)
    }
}

/// POSTs `body` as JSON to `url` and returns the response. Non-2xx is an error
/// carrying the start of the server's reply (the API puts its reason in `detail`).
pub(super) fn post_json(url: &str, body: &[u8]) -> Result<HttpResponse> {
    let mut lines: Vec<String> = Vec::new();
    let mut data: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.post(true)?;
    easy.post_fields_copy(body)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    // /parse renders pages server-side and can take minutes.
    easy.timeout(Duration::from_secs(300))?;

    let mut list = curl::easy::List::new();
    list.append("Content-Type: application/json")?;
    list.append("Accept: application/json, application/zip")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|h| {
            if let Ok(s) = str::from_utf8(h) {
                lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|chunk| {
            data.extend_from_slice(chunk);
            Ok(chunk.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("POST {} failed", url))?;
    }

    let status = easy.response_code().context("no response code")?;
    if !(200..300).contains(&status) {
        anyhow::bail!(
            "POST {} returned HTTP {}: {}",
            url,
            status,
            error_preview(&data)
        );
    }
    tracing::debug!(url, status, bytes = data.len(), "POST done");

    Ok(HttpResponse {
        status,
        headers: HeaderSet::from_lines(&lines),
        body: data,
    })
}

fn error_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    match text.char_indices().nth(ERROR_BODY_PREVIEW) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
