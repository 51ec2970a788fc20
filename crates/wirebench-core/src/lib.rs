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

//! Wirebench Core
//!
//! The canonical in-memory document shared by every wirebench codec.
//!
//! ## Model
//!
//! A [`Document`] is one of null, boolean, [`Number`], string, array, or
//! an insertion-ordered object. It implements `serde::Serialize` and
//! `serde::Deserialize`, so any self-describing serde format can encode it
//! and decode it back.
//!
//! ## Canonical text
//!
//! [`parse`] reads JSON text into a document; [`to_canonical_string`] writes
//! it back in compact form:
//!
//! ```
//! use wirebench_core::{parse, to_canonical_string};
//!
//! let doc = parse(r#"{"a": 1, "b": [true, null, "x"]}"#)?;
//! assert_eq!(to_canonical_string(&doc), r#"{"a":1,"b":[true,null,"x"]}"#);
//! # Ok::<(), wirebench_core::MalformedInputError>(())
//! ```

mod de;
pub mod document;
pub mod error;
pub mod number;
mod ser;
pub mod text;

pub use document::{Document, DocumentKind, Map};
pub use error::{MalformedInputError, MalformedKind, ParseResult};
pub use number::Number;
pub use text::{parse, parse_slice, to_canonical_string, to_canonical_vec, to_pretty_string};
