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

//! Malformed canonical text samples for parser error testing.

/// Invalid text samples as (name, text) pairs.
pub fn invalid_text_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "   \t\n  "),
        ("unclosed_string", r#"{"a": "unclosed"#),
        ("unclosed_array", "[1, 2, 3"),
        ("unclosed_object", r#"{"a": 1"#),
        ("mismatched_brackets", "[1, 2}"),
        ("invalid_number", "[123.456.789]"),
        ("leading_zero", "[0123]"),
        ("bare_word", "[nope]"),
        ("single_quotes", "{'a': 1}"),
        ("trailing_comma", "[1, 2,]"),
        ("missing_colon", r#"{"a" 1}"#),
        ("non_string_key", "{1: 2}"),
        ("invalid_escape", r#"["\x"]"#),
        ("trailing_tokens", "{} []"),
    ]
}
