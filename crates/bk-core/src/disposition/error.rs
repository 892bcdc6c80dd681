//! Error type for `filename*` decoding.

use thiserror::Error;

/// Failure to decode the RFC 5987 `filename*` value.
///
/// Absent headers and unmatched values are not errors; they resolve to the
/// empty string. Only a matched extended value that cannot be decoded ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A `%` not followed by two hex digits. `offset` is the byte index of the `%`
    /// within the encoded value.
    #[error("malformed percent-escape at byte {offset} in filename*")]
    MalformedEscape { offset: usize },
    /// Escapes decoded fine but the bytes are not UTF-8.
    #[error("filename* does not decode to valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
