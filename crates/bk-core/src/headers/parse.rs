//! Parse raw HTTP response header lines into name/value pairs.

/// Splits `Name: value` lines of the final response.
///
/// Each `HTTP/` status line starts a new response (redirect hop or `100 Continue`),
/// so only headers after the last one are kept. Blank lines and lines without a
/// colon are skipped; names and values are trimmed.
pub(super) fn parse_header_lines<S: AsRef<str>>(lines: &[S]) -> Vec<(String, String)> {
    let mut entries = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();
        if line.starts_with("HTTP/") {
            entries.clear();
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            entries.push((name.to_string(), value.trim().to_string()));
        }
    }

    entries
}
