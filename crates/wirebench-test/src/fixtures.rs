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

//! Representative documents every codec must round-trip.

use crate::FixtureList;
use wirebench_core::{Document, Map};

/// Returns all fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("empty_map", empty_map),
        ("empty_array", empty_array),
        ("scalars", scalars),
        ("nulls", nulls),
        ("large_integers", large_integers),
        ("fractional_floats", fractional_floats),
        ("non_ascii", non_ascii),
        ("deep_nest", deep_nest),
        ("records", records),
        ("scenario", scenario),
    ]
}

/// Fixtures without integers above `i64::MAX` or NUL bytes in keys.
///
/// These are the documents a format without unsigned 64-bit integers can
/// carry.
pub fn signed_safe() -> FixtureList {
    all()
        .into_iter()
        .filter(|(name, _)| *name != "large_integers")
        .chain(std::iter::once(("signed_large_integers", signed_large_integers as fn() -> Document)))
        .collect()
}

pub fn empty_map() -> Document {
    Document::Object(Map::new())
}

pub fn empty_array() -> Document {
    Document::Array(Vec::new())
}

/// `{"a": 1, "b": [true, null, "x"]}`
pub fn scenario() -> Document {
    Document::object([
        ("a", Document::from(1u8)),
        (
            "b",
            Document::array([Document::from(true), Document::Null, Document::from("x")]),
        ),
    ])
}

pub fn scalars() -> Document {
    Document::object([
        ("null", Document::Null),
        ("true", Document::from(true)),
        ("false", Document::from(false)),
        ("zero", Document::from(0u8)),
        ("negative", Document::from(-17i32)),
        ("float", float(3.25)),
        ("string", Document::from("hello")),
        ("empty_string", Document::from("")),
    ])
}

pub fn nulls() -> Document {
    Document::object([
        ("a", Document::Null),
        ("b", Document::array([Document::Null, Document::Null])),
        ("c", Document::object([("inner", Document::Null)])),
    ])
}

pub fn large_integers() -> Document {
    Document::array([
        Document::from(u64::MAX),
        Document::from(i64::MAX),
        Document::from(i64::MIN),
        Document::from(u32::MAX as u64 + 1),
        Document::from(-(u32::MAX as i64) - 1),
    ])
}

/// Large integers that all fit in `i64`.
pub fn signed_large_integers() -> Document {
    Document::array([
        Document::from(i64::MAX),
        Document::from(i64::MIN),
        Document::from(u32::MAX as u64 + 1),
        Document::from(-(u32::MAX as i64) - 1),
    ])
}

pub fn fractional_floats() -> Document {
    Document::array([
        float(0.5),
        float(-1.25),
        float(3.141592653589793),
        float(1.0e-300),
        float(6.02214076e23),
        float(1.0),
        float(-0.1),
    ])
}

pub fn non_ascii() -> Document {
    Document::object([
        ("ascii", Document::from("plain")),
        ("latin", Document::from("café déjà vu")),
        ("cyrillic", Document::from("Привет, мир")),
        ("cjk", Document::from("日本語のテキスト")),
        ("emoji", Document::from("🚀✨")),
        ("ключ", Document::from("key is not ASCII")),
        ("escapes", Document::from("quote \" backslash \\ newline \n tab \t")),
    ])
}

/// Alternating arrays and objects, nested eight levels deep.
pub fn deep_nest() -> Document {
    (0..8).fold(Document::from("leaf"), |inner, level| {
        if level % 2 == 0 {
            Document::array([Document::from(level as u64), inner])
        } else {
            Document::object([("level", Document::from(level as u64)), ("child", inner)])
        }
    })
}

/// An array of records sharing the same keys.
pub fn records() -> Document {
    Document::array((0..16u64).map(|i| {
        Document::object([
            ("id", Document::from(i)),
            ("name", Document::from(format!("user-{}", i))),
            ("email", Document::from(format!("user{}@example.com", i))),
            ("active", Document::from(i % 3 != 0)),
            ("balance", float(i as f64 * 12.5 + 0.25)),
            (
                "tags",
                Document::array([Document::from("alpha"), Document::from("beta")]),
            ),
        ])
    }))
}

fn float(value: f64) -> Document {
    Document::float(value).unwrap_or(Document::Null)
}
