//! Percent-escaping for the `encode` and `decode` commands.
//!
//! Two flavours: path-segment escaping (spaces become `%20`, sub-delimiters
//! such as `&` and `=` survive) and query-component escaping (everything
//! outside the unreserved set is escaped, spaces become `+`).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::CodecError;

/// Bytes left as-is inside a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Bytes left as-is inside a query key or value.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeMode {
    #[default]
    Path,
    Component,
    /// Query-component escaping applied twice.
    Double,
}

impl EncodeMode {
    /// `component` takes precedence over `double`.
    pub fn from_flags(component: bool, double: bool) -> Self {
        match (component, double) {
            (true, _) => EncodeMode::Component,
            (false, true) => EncodeMode::Double,
            (false, false) => EncodeMode::Path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    #[default]
    Path,
    Component,
    /// Query-component unescaping applied twice.
    Double,
}

impl DecodeMode {
    /// `double` takes precedence over `component`.
    pub fn from_flags(component: bool, double: bool) -> Self {
        match (component, double) {
            (_, true) => DecodeMode::Double,
            (true, false) => DecodeMode::Component,
            (false, false) => DecodeMode::Path,
        }
    }
}

pub fn encode(input: &str, mode: EncodeMode) -> String {
    match mode {
        EncodeMode::Path => utf8_percent_encode(input, PATH_SEGMENT).to_string(),
        EncodeMode::Component => escape_component(input),
        EncodeMode::Double => escape_component(&escape_component(input)),
    }
}

pub fn decode(input: &str, mode: DecodeMode) -> Result<String, CodecError> {
    match mode {
        DecodeMode::Path => unescape(input, false),
        DecodeMode::Component => unescape(input, true),
        DecodeMode::Double => unescape(&unescape(input, true)?, true),
    }
}

fn escape_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// Strict percent-decoding: a `%` must be followed by two hex digits.
fn unescape(input: &str, plus_as_space: bool) -> Result<String, CodecError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let high = bytes.get(i + 1).copied().and_then(hex_digit);
                let low = bytes.get(i + 2).copied().and_then(hex_digit);
                match (high, low) {
                    (Some(h), Some(l)) => out.push(h << 4 | l),
                    _ => {
                        let end = (i + 3).min(bytes.len());
                        return Err(CodecError::InvalidEscape {
                            position: i,
                            escape: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                        });
                    }
                }
                i += 3;
            }
            b'+' if plus_as_space => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    // Invalid UTF-8 sequences decode to U+FFFD.
    Ok(String::from_utf8_lossy(&out).into_owned())
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
    fn mode_precedence() {
        assert_eq!(EncodeMode::from_flags(true, true), EncodeMode::Component);
        assert_eq!(EncodeMode::from_flags(false, true), EncodeMode::Double);
        assert_eq!(DecodeMode::from_flags(true, true), DecodeMode::Double);
        assert_eq!(DecodeMode::from_flags(true, false), DecodeMode::Component);
        assert_eq!(DecodeMode::from_flags(false, false), DecodeMode::Path);
    }

    #[test]
    fn encode_path_keeps_sub_delims() {
        assert_eq!(encode("a b/c?d", EncodeMode::Path), "a%20b%2Fc%3Fd");
        assert_eq!(encode("k=v&x:y@z", EncodeMode::Path), "k=v&x:y@z");
    }

    #[test]
    fn encode_component_uses_plus() {
        assert_eq!(
            encode("a b&c=d/é", EncodeMode::Component),
            "a+b%26c%3Dd%2F%C3%A9"
        );
        assert_eq!(encode("safe-_.~", EncodeMode::Component), "safe-_.~");
    }

    #[test]
    fn encode_double() {
        assert_eq!(encode("a b&c", EncodeMode::Double), "a%2Bb%2526c");
    }

    #[test]
    fn decode_path_keeps_plus() {
        assert_eq!(decode("a%20b+c", DecodeMode::Path).unwrap(), "a b+c");
    }

    #[test]
    fn decode_component_maps_plus() {
        assert_eq!(
            decode("a+b%26c%3Dd%2F%C3%A9", DecodeMode::Component).unwrap(),
            "a b&c=d/é"
        );
    }

    #[test]
    fn decode_double() {
        assert_eq!(decode("a%2Bb%2526c", DecodeMode::Double).unwrap(), "a b&c");
    }

    #[test]
    fn decode_rejects_bad_escapes() {
        assert_eq!(
            decode("ab%zz", DecodeMode::Path),
            Err(CodecError::InvalidEscape {
                position: 2,
                escape: "%zz".to_string()
            })
        );
        assert_eq!(
            decode("trail%4", DecodeMode::Component),
            Err(CodecError::InvalidEscape {
                position: 5,
                escape: "%4".to_string()
            })
        );
    }

    #[test]
    fn decode_replaces_invalid_utf8() {
        assert_eq!(decode("%ff", DecodeMode::Path).unwrap(), "\u{FFFD}");
        assert_eq!(decode("a%ffb", DecodeMode::Component).unwrap(), "a\u{FFFD}b");
        assert_eq!(decode("%C3%A9%ff", DecodeMode::Path).unwrap(), "é\u{FFFD}");
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let s = "päth with spaces & symbols=?#";
        assert_eq!(decode(&encode(s, EncodeMode::Path), DecodeMode::Path).unwrap(), s);
        assert_eq!(
            decode(&encode(s, EncodeMode::Component), DecodeMode::Component).unwrap(),
            s
        );
    }
}
