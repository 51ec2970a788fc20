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

//! Shared test fixtures and utilities for wirebench codecs.
//!
//! This crate provides the representative document corpus, malformed input
//! samples, and proptest strategies used by the codec and harness test
//! suites, so every codec is checked against the same inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use wirebench_test::fixtures;
//!
//! for (name, fixture_fn) in fixtures::all() {
//!     let doc = fixture_fn();
//!     // encode/decode `doc` with the codec under test
//!     # let _ = (name, doc);
//! }
//! ```

use wirebench_core::Document;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Document)>;

/// Representative documents.
pub mod fixtures;

/// Malformed canonical text samples.
pub mod errors;

/// Proptest strategies for arbitrary documents.
pub mod strategies;

pub use fixtures::*;
pub use strategies::{arb_document, arb_bson_safe_document};

/// Returns every fixture as (name, canonical text) pairs.
pub fn fixtures_as_text() -> Vec<(&'static str, String)> {
    fixtures::all()
        .into_iter()
        .map(|(name, fixture_fn)| (name, wirebench_core::to_canonical_string(&fixture_fn())))
        .collect()
}
