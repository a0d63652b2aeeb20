//! Base64 decoding for the text tool.
//!
//! Input comes straight out of a textarea, so it may carry line breaks,
//! padding or no padding, or a whole `data:` URL pasted from somewhere.
//! All of those decode; genuinely malformed input surfaces an error the
//! page displays verbatim.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine as _;
use thiserror::Error;

/// Errors for the Base64 tool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Base64Error {
    /// The input was not valid Base64.
    #[error("Invalid Base64 input: {0}")]
    InvalidBase64(String),

    /// The decoded bytes were not valid UTF-8.
    #[error("Decoded data is not valid UTF-8 text")]
    NotUtf8,

    /// Nothing to decode after trimming.
    #[error("Input is empty")]
    EmptyInput,
}

/// Decode Base64 input to raw bytes.
///
/// Whitespace anywhere in the input is ignored, a `data:*;base64,` prefix
/// is stripped, and missing padding is tolerated.
pub fn decode_base64(input: &str) -> Result<Vec<u8>, Base64Error> {
    let payload = strip_data_url(input);
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return Err(Base64Error::EmptyInput);
    }

    let engine = if cleaned.len() % 4 == 0 {
        &STANDARD
    } else {
        &STANDARD_NO_PAD
    };

    engine
        .decode(cleaned.as_bytes())
        .map_err(|e| Base64Error::InvalidBase64(e.to_string()))
}

/// Decode Base64 input and interpret the bytes as UTF-8 text.
pub fn decode_base64_text(input: &str) -> Result<String, Base64Error> {
    let bytes = decode_base64(input)?;
    String::from_utf8(bytes).map_err(|_| Base64Error::NotUtf8)
}

/// Encode bytes as standard Base64 with padding.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Strip a `data:*;base64,` prefix, if present.
fn strip_data_url(input: &str) -> &str {
    let trimmed = input.trim();
    if trimmed.starts_with("data:") {
        if let Some(comma) = trimmed.find(";base64,") {
            return &trimmed[comma + ";base64,".len()..];
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple_text() {
        assert_eq!(decode_base64_text("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn test_decode_without_padding() {
        assert_eq!(decode_base64_text("aGVsbG8").unwrap(), "hello");
    }

    #[test]
    fn test_decode_ignores_whitespace() {
        assert_eq!(decode_base64_text("aGVs\nbG8g\nd29y\nbGQ=").unwrap(), "hello world");
        assert_eq!(decode_base64_text("  aGVsbG8=  ").unwrap(), "hello");
    }

    #[test]
    fn test_decode_data_url() {
        assert_eq!(
            decode_base64_text("data:text/plain;base64,aGVsbG8=").unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_decode_bytes() {
        assert_eq!(decode_base64("AAEC").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert!(matches!(
            decode_base64("not!!valid@@"),
            Err(Base64Error::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(decode_base64("").unwrap_err(), Base64Error::EmptyInput);
        assert_eq!(decode_base64("   \n  ").unwrap_err(), Base64Error::EmptyInput);
    }

    #[test]
    fn test_non_utf8_bytes_reported() {
        // 0xFF 0xFE is valid Base64 payload but not valid UTF-8
        let encoded = encode_base64(&[0xFF, 0xFE]);
        assert_eq!(decode_base64(&encoded).unwrap(), vec![0xFF, 0xFE]);
        assert_eq!(decode_base64_text(&encoded).unwrap_err(), Base64Error::NotUtf8);
    }

    #[test]
    fn test_encode_matches_known_vector() {
        assert_eq!(encode_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
