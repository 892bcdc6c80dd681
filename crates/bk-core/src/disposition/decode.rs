//! Strict percent-decoding for the `filename*` value (RFC 5987).

use super::ExtractError;

/// Percent-decodes `input` as UTF-8.
///
/// A `%` must be followed by two hex digits; anything else is an error and
/// nothing is passed through undecoded.
pub(super) fn percent_decode_utf8(input: &str) -> Result<String, ExtractError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let high = bytes.get(i + 1).copied().and_then(hex_digit);
            let low = bytes.get(i + 2).copied().and_then(hex_digit);
            match (high, low) {
                (Some(h), Some(l)) => out.push(h << 4 | l),
                _ => return Err(ExtractError::MalformedEscape { offset: i }),
            }
            i += 3;
        } else {
            out.push(b);
            i += 1;
        }
    }
    Ok(String::from_utf8(out)?)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_multibyte() {
        assert_eq!(
            percent_decode_utf8("caf%C3%A9.txt").unwrap(),
            "café.txt"
        );
    }

    #[test]
    fn lowercase_hex() {
        assert_eq!(percent_decode_utf8("a%2fb").unwrap(), "a/b");
    }

    #[test]
    fn plain_passthrough() {
        assert_eq!(percent_decode_utf8("report.pdf").unwrap(), "report.pdf");
    }

    #[test]
    fn rejects_non_hex_escape() {
        assert_eq!(
            percent_decode_utf8("bad%ZZname"),
            Err(ExtractError::MalformedEscape { offset: 3 })
        );
    }

    #[test]
    fn rejects_truncated_escape() {
        assert_eq!(
            percent_decode_utf8("name%4"),
            Err(ExtractError::MalformedEscape { offset: 4 })
        );
        assert_eq!(
            percent_decode_utf8("%"),
            Err(ExtractError::MalformedEscape { offset: 0 })
        );
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(matches!(
            percent_decode_utf8("%FF.bin"),
            Err(ExtractError::InvalidUtf8(_))
        ));
    }
}
