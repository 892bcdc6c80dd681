//! Content-Disposition filename extraction (`filename*` and `filename`).
//!
//! The extended RFC 5987 form `filename*=UTF-8''...` is percent-decoded and
//! always wins over the legacy `filename="..."` form, wherever the two appear
//! in the header. An absent header or a value with neither form yields the
//! empty string, which callers must read as "undetermined".

mod decode;
mod error;

use regex::Regex;
use std::sync::OnceLock;

use crate::headers::ResponseHeaders;

pub use error::ExtractError;

/// Response header carrying the filename hint.
pub const CONTENT_DISPOSITION: &str = "content-disposition";

/// `filename*=UTF-8''<value>`; the value runs up to the next `;`.
const EXTENDED_PATTERN: &str = r"(?i)(?:^|[;\s])filename\*=UTF-8''([^;]+)";

/// `filename=` with an optional opening quote. Quoted values run to the next `"`,
/// bare ones to the next `;`.
const LEGACY_PATTERN: &str = r#"(?i)(?:^|[;\s])filename=(?:"([^"]+)|([^";]+))"#;

/// Strategy for turning a Content-Disposition header into a filename.
///
/// [`DefaultFilenameExtractor`] covers the `filename*`/`filename` dialect; other
/// implementations can be swapped in wherever an extractor is taken.
pub trait FilenameExtractor {
    /// Extracts the filename from a raw header value. Returns `""` when no
    /// filename can be determined.
    fn extract_from_header_value(&self, value: &str) -> Result<String, ExtractError>;

    /// Looks up `content-disposition` on `response` and extracts from it.
    ///
    /// A missing header short-circuits to `""` without touching the parser.
    fn extract_from_response(
        &self,
        response: &dyn ResponseHeaders,
    ) -> Result<String, ExtractError> {
        match response.header(CONTENT_DISPOSITION) {
            Some(value) => self.extract_from_header_value(value),
            None => {
                tracing::debug!("no content-disposition header");
                Ok(String::new())
            }
        }
    }
}

/// Regex-backed extractor for `filename*=UTF-8''...` and `filename="..."`.
#[derive(Debug, Clone)]
pub struct DefaultFilenameExtractor {
    extended: Regex,
    legacy: Regex,
}

impl DefaultFilenameExtractor {
    /// Compiles the built-in patterns.
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern fails to compile.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extended: Regex::new(EXTENDED_PATTERN).expect("invalid filename* pattern"),
            legacy: Regex::new(LEGACY_PATTERN).expect("invalid filename pattern"),
        }
    }

    fn match_extended<'a>(&self, value: &'a str) -> Option<&'a str> {
        let encoded = self.extended.captures(value)?.get(1)?.as_str();
        let encoded = encoded.trim_end_matches(|c: char| c.is_ascii_whitespace());
        (!encoded.is_empty()).then_some(encoded)
    }

    fn match_legacy<'a>(&self, value: &'a str) -> Option<&'a str> {
        let caps = self.legacy.captures(value)?;
        if let Some(quoted) = caps.get(1) {
            return Some(quoted.as_str());
        }
        let bare = caps.get(2)?.as_str().trim();
        (!bare.is_empty()).then_some(bare)
    }
}

impl Default for DefaultFilenameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FilenameExtractor for DefaultFilenameExtractor {
    fn extract_from_header_value(&self, value: &str) -> Result<String, ExtractError> {
        if let Some(encoded) = self.match_extended(value) {
            return match decode::percent_decode_utf8(encoded) {
                Ok(name) => {
                    tracing::debug!(filename = %name, "filename from filename*");
                    Ok(name)
                }
                Err(err) => {
                    tracing::warn!(value = %encoded, error = %err, "undecodable filename*");
                    Err(err)
                }
            };
        }

        if let Some(name) = self.match_legacy(value) {
            tracing::debug!(filename = %name, "filename from filename");
            return Ok(name.to_string());
        }

        Ok(String::new())
    }
}

/// Process-wide default extractor, compiled on first use.
pub fn default_extractor() -> &'static DefaultFilenameExtractor {
    static EXTRACTOR: OnceLock<DefaultFilenameExtractor> = OnceLock::new();
    EXTRACTOR.get_or_init(DefaultFilenameExtractor::new)
}

/// Extracts the filename from a raw Content-Disposition value using the default extractor.
///
/// # Examples
///
/// - `attachment; filename*=UTF-8''%E6%8A%A5%E5%91%8A.pdf` → `"报告.pdf"`
/// - `attachment; filename="report.pdf"` → `"report.pdf"`
/// - `inline` → `""`
pub fn filename_from_header_value(value: &str) -> Result<String, ExtractError> {
    default_extractor().extract_from_header_value(value)
}

/// Extracts the filename from a response's headers using the default extractor.
pub fn filename_from_response(response: &dyn ResponseHeaders) -> Result<String, ExtractError> {
    default_extractor().extract_from_response(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::HeaderSet;
    use std::cell::Cell;

    fn extract(value: &str) -> String {
        filename_from_header_value(value).unwrap()
    }

    #[test]
    fn extended_utf8() {
        assert_eq!(
            extract("attachment; filename*=UTF-8''%E6%8A%A5%E5%91%8A.pdf"),
            "报告.pdf"
        );
    }

    #[test]
    fn extended_token_case_insensitive() {
        assert_eq!(extract("attachment; FILENAME*=utf-8''caf%C3%A9.txt"), "café.txt");
        assert_eq!(extract("attachment; Filename*=Utf-8''a%20b.txt"), "a b.txt");
    }

    #[test]
    fn extended_stops_at_semicolon() {
        assert_eq!(
            extract("attachment; filename*=UTF-8''data.csv ; size=10"),
            "data.csv"
        );
    }

    #[test]
    fn quoted() {
        assert_eq!(extract("attachment; filename=\"report.pdf\""), "report.pdf");
    }

    #[test]
    fn quoted_kept_verbatim() {
        assert_eq!(
            extract("attachment; filename=\"a;b %41.txt\""),
            "a;b %41.txt"
        );
    }

    #[test]
    fn token() {
        assert_eq!(extract("attachment; filename=report.pdf"), "report.pdf");
        assert_eq!(
            extract("attachment; filename=report.pdf; size=42"),
            "report.pdf"
        );
    }

    #[test]
    fn legacy_case_insensitive() {
        assert_eq!(extract("attachment; FileName=\"X.ZIP\""), "X.ZIP");
    }

    #[test]
    fn extended_precedence_either_order() {
        assert_eq!(
            extract("attachment; filename=\"fallback.bin\"; filename*=UTF-8''real%20name.dat"),
            "real name.dat"
        );
        assert_eq!(
            extract("attachment; filename*=UTF-8''real%20name.dat; filename=\"fallback.bin\""),
            "real name.dat"
        );
    }

    #[test]
    fn other_charset_falls_back_to_legacy() {
        assert_eq!(
            extract("attachment; filename*=ISO-8859-1''r%E9sum%E9.txt; filename=\"resume.txt\""),
            "resume.txt"
        );
    }

    #[test]
    fn no_filename() {
        assert_eq!(extract("inline"), "");
        assert_eq!(extract(""), "");
        assert_eq!(extract("attachment; filename="), "");
        assert_eq!(extract("attachment; filename=\"\""), "");
    }

    #[test]
    fn ignores_params_ending_in_filename() {
        assert_eq!(extract("attachment; xfilename=evil.sh"), "");
    }

    #[test]
    fn malformed_escape_is_error() {
        assert_eq!(
            filename_from_header_value("attachment; filename*=UTF-8''bad%ZZ.pdf"),
            Err(ExtractError::MalformedEscape { offset: 3 })
        );
    }

    #[test]
    fn invalid_utf8_is_error() {
        assert!(matches!(
            filename_from_header_value("attachment; filename*=UTF-8''%FF%FE"),
            Err(ExtractError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn response_without_header_is_empty() {
        let headers = HeaderSet::from_lines(&["Content-Type: application/zip"]);
        assert_eq!(filename_from_response(&headers).unwrap(), "");
    }

    #[test]
    fn response_header_name_case_insensitive() {
        let headers = HeaderSet::from_lines(&[
            "CONTENT-DISPOSITION: attachment; filename*=UTF-8''blog.zip",
        ]);
        assert_eq!(filename_from_response(&headers).unwrap(), "blog.zip");
    }

    struct Counting {
        calls: Cell<usize>,
    }

    impl FilenameExtractor for Counting {
        fn extract_from_header_value(&self, _value: &str) -> Result<String, ExtractError> {
            self.calls.set(self.calls.get() + 1);
            Ok("counted".to_string())
        }
    }

    #[test]
    fn missing_header_skips_parser() {
        let extractor = Counting { calls: Cell::new(0) };
        let empty = HeaderSet::default();
        assert_eq!(extractor.extract_from_response(&empty).unwrap(), "");
        assert_eq!(extractor.calls.get(), 0);

        let present = HeaderSet::from_lines(&["Content-Disposition: inline"]);
        assert_eq!(extractor.extract_from_response(&present).unwrap(), "counted");
        assert_eq!(extractor.calls.get(), 1);
    }
}
