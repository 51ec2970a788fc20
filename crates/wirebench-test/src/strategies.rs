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

//! Proptest strategies generating arbitrary documents.

use proptest::prelude::*;
use wirebench_core::Document;

/// Maximum nesting depth of generated documents.
pub const MAX_DEPTH: u32 = 6;

/// Arbitrary documents over the full numeric range, including integers
/// above `i64::MAX`.
pub fn arb_document() -> impl Strategy<Value = Document> {
    nested(leaf(any::<u64>().prop_map(Document::from).boxed()))
}

/// Arbitrary documents whose integers all fit in `i64`.
pub fn arb_bson_safe_document() -> impl Strategy<Value = Document> {
    nested(leaf((0..=i64::MAX).prop_map(Document::from).boxed()))
}

fn leaf(non_negative: BoxedStrategy<Document>) -> BoxedStrategy<Document> {
    prop_oneof![
        Just(Document::Null),
        any::<bool>().prop_map(Document::from),
        non_negative,
        (i64::MIN..0).prop_map(Document::from),
        any::<f64>().prop_filter_map("finite floats only", Document::float),
        "\\PC{0,16}".prop_map(Document::from),
    ]
    .boxed()
}

fn nested(leaf: BoxedStrategy<Document>) -> impl Strategy<Value = Document> {
    leaf.prop_recursive(MAX_DEPTH, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Document::Array),
            prop::collection::vec(("\\PC{0,8}", inner), 0..8).prop_map(Document::object),
        ]
    })
}
