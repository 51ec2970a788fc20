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

//! Canonical text parse/serialize tests.
//!
//! Covers:
//! - Round trip of every corpus document through the canonical form
//! - Property-based round trip of arbitrary documents
//! - Malformed input rejection with position information

use proptest::prelude::*;
use wirebench_core::{parse, parse_slice, to_canonical_string, Document, MalformedKind};
use wirebench_test::errors::invalid_text_samples;
use wirebench_test::{arb_document, fixtures};

/// Number of test cases to run per property
const TEST_CASES: u32 = 256;

#[test]
fn test_corpus_roundtrip() {
    for (name, fixture_fn) in fixtures::all() {
        let doc = fixture_fn();
        let text = to_canonical_string(&doc);
        let reparsed = parse(&text).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(reparsed, doc, "fixture {} changed through text", name);
    }
}

#[test]
fn test_canonical_form_is_stable() {
    for (name, fixture_fn) in fixtures::all() {
        let once = to_canonical_string(&fixture_fn());
        let twice = to_canonical_string(&parse(&once).unwrap());
        assert_eq!(once, twice, "fixture {}", name);
    }
}

#[test]
fn test_scenario_text() {
    assert_eq!(
        to_canonical_string(&fixtures::scenario()),
        r#"{"a":1,"b":[true,null,"x"]}"#
    );
}

#[test]
fn test_whitespace_is_not_significant() {
    let spaced = parse("{ \"a\" :\n 1 ,\t\"b\" : [ true , null , \"x\" ] }").unwrap();
    assert_eq!(spaced, fixtures::scenario());
}

#[test]
fn test_invalid_samples_rejected() {
    for (name, text) in invalid_text_samples() {
        let result = parse(text);
        assert!(result.is_err(), "sample {} unexpectedly parsed", name);
        let err = result.unwrap_err();
        assert!(!err.message.is_empty(), "sample {} has empty message", name);
    }
}

#[test]
fn test_error_carries_position() {
    let err = parse("{\n  \"a\": [1, 2,\n  }").unwrap_err();
    assert_eq!(err.kind, MalformedKind::Syntax);
    assert_eq!(err.line, 3);
}

#[test]
fn test_invalid_utf8_rejected() {
    let bytes = b"[\"\xff\xfe\"]";
    assert!(parse_slice(bytes).is_err());
}

#[test]
fn test_integer_and_float_stay_distinct() {
    let doc = parse("[1, 1.0]").unwrap();
    let items = doc.as_array().unwrap();
    assert_ne!(items[0], items[1]);
    assert_eq!(to_canonical_string(&doc), "[1,1.0]");
}

#[test]
fn test_integers_beyond_64_bits_rejected() {
    for text in [
        "[18446744073709551616]",
        "[-9223372036854775809]",
        r#"{"a": 340282366920938463463374607431768211456}"#,
    ] {
        let err = parse(text).unwrap_err();
        assert_eq!(err.kind, MalformedKind::Data, "{}", text);
        assert!(err.message.contains("64 bits"), "{}", text);
        assert_eq!(parse_slice(text.as_bytes()).unwrap_err(), err);
    }
}

#[test]
fn test_integer_range_bounds_accepted() {
    let text = format!("[{},{},{}]", u64::MAX, i64::MIN, i64::MAX);
    assert_eq!(to_canonical_string(&parse(&text).unwrap()), text);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(TEST_CASES))]

    #[test]
    fn prop_text_roundtrip(doc in arb_document()) {
        let text = to_canonical_string(&doc);
        let reparsed: Document = parse(&text).unwrap();
        prop_assert_eq!(reparsed, doc);
    }

    #[test]
    fn prop_parse_slice_agrees(doc in arb_document()) {
        let text = to_canonical_string(&doc);
        prop_assert_eq!(parse_slice(text.as_bytes()).unwrap(), parse(&text).unwrap());
    }
}
