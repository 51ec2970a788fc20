// Dweve Wirebench - Wire Format Benchmarks
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canonical text form of a [`Document`].
//!
//! The canonical form is compact JSON: no insignificant whitespace, object
//! keys in insertion order, floats always carrying a fractional part or
//! exponent. It is the reference representation every other codec's round
//! trip is checked against.

use crate::document::Document;
use crate::error::{MalformedInputError, MalformedKind, ParseResult};

/// Parses canonical text into a document.
///
/// # Errors
///
/// Returns [`MalformedInputError`](crate::MalformedInputError) for unterminated
/// strings or structures, invalid literals, unexpected or trailing tokens,
/// and with [`MalformedKind::Data`] for an integer literal wider than 64 bits.
///
/// # Examples
///
/// ```
/// use wirebench_core::{parse, Document};
///
/// let doc = parse(r#"{"a": 1, "b": [true, null, "x"]}"#).unwrap();
/// assert_eq!(doc.get("a").and_then(Document::as_u64), Some(1));
/// ```
pub fn parse(text: &str) -> ParseResult<Document> {
    let doc = serde_json::from_str(text)?;
    check_integer_widths(&doc, text.as_bytes())?;
    Ok(doc)
}

/// Parses canonical text from UTF-8 bytes.
pub fn parse_slice(bytes: &[u8]) -> ParseResult<Document> {
    let doc = serde_json::from_slice(bytes)?;
    check_integer_widths(&doc, bytes)?;
    Ok(doc)
}

/// serde_json reads an integer literal beyond the 64-bit range as a float.
/// Such a literal always yields a float, so the text is only rescanned when
/// the parsed tree holds one.
fn check_integer_widths(doc: &Document, text: &[u8]) -> ParseResult<()> {
    if contains_float(doc) {
        reject_wide_integers(text)
    } else {
        Ok(())
    }
}

fn contains_float(doc: &Document) -> bool {
    match doc {
        Document::Number(n) => n.is_f64(),
        Document::Array(items) => items.iter().any(contains_float),
        Document::Object(map) => map.values().any(contains_float),
        _ => false,
    }
}

/// Finds the first integer literal (no fraction, no exponent) outside a
/// string that fits neither `u64` nor `i64`. The text is already known to
/// be well-formed.
fn reject_wide_integers(text: &[u8]) -> ParseResult<()> {
    let mut line = 1;
    let mut line_start = 0;
    let mut i = 0;
    while i < text.len() {
        match text[i] {
            b'"' => {
                i += 1;
                while i < text.len() {
                    match text[i] {
                        b'\\' => i += 2,
                        b'"' => break,
                        _ => i += 1,
                    }
                }
                i += 1;
            }
            b'\n' => {
                line += 1;
                i += 1;
                line_start = i;
            }
            b'-' | b'0'..=b'9' => {
                let start = i;
                while i < text.len()
                    && matches!(text[i], b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9')
                {
                    i += 1;
                }
                let literal = &text[start..i];
                let integer = !literal.iter().any(|b| matches!(b, b'.' | b'e' | b'E'));
                if integer && !fits_64_bits(literal) {
                    return Err(MalformedInputError::new(
                        MalformedKind::Data,
                        format!(
                            "integer {} does not fit in 64 bits",
                            String::from_utf8_lossy(literal)
                        ),
                        line,
                        start - line_start + 1,
                    ));
                }
            }
            _ => i += 1,
        }
    }
    Ok(())
}

fn fits_64_bits(literal: &[u8]) -> bool {
    match std::str::from_utf8(literal) {
        Ok(s) if s.starts_with('-') => s.parse::<i64>().is_ok(),
        Ok(s) => s.parse::<u64>().is_ok(),
        Err(_) => false,
    }
}

/// Serializes a document into compact canonical text.
///
/// # Examples
///
/// ```
/// use wirebench_core::{parse, to_canonical_string};
///
/// let doc = parse(r#"{"a": 1, "b": [true, null, "x"]}"#).unwrap();
/// assert_eq!(to_canonical_string(&doc), r#"{"a":1,"b":[true,null,"x"]}"#);
/// ```
pub fn to_canonical_string(doc: &Document) -> String {
    // Keys are strings and floats are finite, so this cannot fail.
    serde_json::to_string(doc).expect("document serialization is infallible")
}

/// Serializes a document into compact canonical text bytes.
pub fn to_canonical_vec(doc: &Document) -> Vec<u8> {
    serde_json::to_vec(doc).expect("document serialization is infallible")
}

/// Serializes a document into indented text, for diagnostics.
pub fn to_pretty_string(doc: &Document) -> String {
    serde_json::to_string_pretty(doc).expect("document serialization is infallible")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedKind;

    #[test]
    fn test_canonical_scenario() {
        let doc = parse(r#"{"a": 1, "b": [true, null, "x"]}"#).unwrap();
        assert_eq!(to_canonical_string(&doc), r#"{"a":1,"b":[true,null,"x"]}"#);
    }

    #[test]
    fn test_float_keeps_fraction() {
        let doc = parse("[1.0, 2.5, -0.125, 1e3]").unwrap();
        assert_eq!(to_canonical_string(&doc), "[1.0,2.5,-0.125,1000.0]");
    }

    #[test]
    fn test_large_integers() {
        let text = format!("[{},{}]", u64::MAX, i64::MIN);
        let doc = parse(&text).unwrap();
        assert_eq!(doc.as_array().unwrap()[0].as_u64(), Some(u64::MAX));
        assert_eq!(doc.as_array().unwrap()[1].as_i64(), Some(i64::MIN));
        assert_eq!(to_canonical_string(&doc), text);
    }

    #[test]
    fn test_wide_integer_rejected() {
        let err = parse("[1.5,\n 18446744073709551616]").unwrap_err();
        assert_eq!(err.kind, MalformedKind::Data);
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 2);
        assert!(err.message.contains("18446744073709551616"));
    }

    #[test]
    fn test_wide_integer_inside_string_ignored() {
        let doc = parse(r#"{"n": "18446744073709551616\"9", "f": 0.5}"#).unwrap();
        assert_eq!(doc.get("f").and_then(Document::as_f64), Some(0.5));
    }

    #[test]
    fn test_exponent_literals_stay_floats() {
        let doc = parse("[1e20, 123456789012345678901234.0, -5E+2]").unwrap();
        let items = doc.as_array().unwrap();
        assert_eq!(items[0].as_f64(), Some(1e20));
        assert_eq!(items[1].as_f64(), Some(123456789012345678901234.0));
        assert_eq!(items[2].as_f64(), Some(-500.0));
    }

    #[test]
    fn test_duplicate_key_keeps_last_value() {
        let doc = parse(r#"{"a":1,"b":2,"a":3}"#).unwrap();
        assert_eq!(to_canonical_string(&doc), r#"{"a":3,"b":2}"#);
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse(r#"{"a": "oops"#).unwrap_err();
        assert_eq!(err.kind, MalformedKind::Eof);
    }

    #[test]
    fn test_unterminated_structure() {
        let err = parse("[1, 2").unwrap_err();
        assert_eq!(err.kind, MalformedKind::Eof);
    }

    #[test]
    fn test_invalid_number() {
        let err = parse("[01]").unwrap_err();
        assert_eq!(err.kind, MalformedKind::Syntax);
    }

    #[test]
    fn test_trailing_tokens() {
        let err = parse("{} {}").unwrap_err();
        assert_eq!(err.kind, MalformedKind::Syntax);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_parse_slice_matches_parse() {
        let text = r#"{"ключ":"значение","n":-1}"#;
        assert_eq!(parse_slice(text.as_bytes()).unwrap(), parse(text).unwrap());
    }

    #[test]
    fn test_pretty_reparses() {
        let doc = parse(r#"{"a":[1,{"b":null}]}"#).unwrap();
        let pretty = to_pretty_string(&doc);
        assert!(pretty.contains('\n'));
        assert_eq!(parse(&pretty).unwrap(), doc);
    }
}
