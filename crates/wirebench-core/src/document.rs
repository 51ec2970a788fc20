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

//! The canonical document tree.

use crate::number::Number;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// Object storage. Insertion order is preserved.
pub type Map = IndexMap<String, Document>;

/// A generic tree-shaped value shared by every codec.
///
/// Every codec encodes a `Document` and must decode its own output back into
/// an equal `Document`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Document {
    /// Null value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer or float.
    Number(Number),
    /// UTF-8 text.
    String(String),
    /// Ordered sequence.
    Array(Vec<Document>),
    /// String-keyed mapping.
    Object(Map),
}

/// The variant of a [`Document`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl DocumentKind {
    /// Returns the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Null => "null",
            DocumentKind::Bool => "bool",
            DocumentKind::Number => "number",
            DocumentKind::String => "string",
            DocumentKind::Array => "array",
            DocumentKind::Object => "object",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Document {
    /// Builds an object from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Document)>,
    {
        Document::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds an array from items.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        Document::Array(items.into_iter().collect())
    }

    /// Creates a float document. Returns `None` for non-finite values.
    pub fn float(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Document::Number)
    }

    /// Returns the variant of this document.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Null => DocumentKind::Null,
            Document::Bool(_) => DocumentKind::Bool,
            Document::Number(_) => DocumentKind::Number,
            Document::String(_) => DocumentKind::String,
            Document::Array(_) => DocumentKind::Array,
            Document::Object(_) => DocumentKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Document::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    /// Returns the value as a float. Integers are converted.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Document>> {
        match self {
            Document::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Document::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key when this document is an object.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Nesting depth. Scalars have depth 0, an empty container has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Document::Array(items) => 1 + items.iter().map(Document::depth).max().unwrap_or(0),
            Document::Object(map) => 1 + map.values().map(Document::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    /// Total number of values in the tree, including this one.
    pub fn node_count(&self) -> usize {
        match self {
            Document::Array(items) => 1 + items.iter().map(Document::node_count).sum::<usize>(),
            Document::Object(map) => 1 + map.values().map(Document::node_count).sum::<usize>(),
            _ => 1,
        }
    }

    /// Returns true if any object key string occurs more than once across
    /// the whole tree, e.g. an array of records sharing a schema.
    pub fn has_repeated_keys(&self) -> bool {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        self.count_keys(&mut seen);
        seen.values().any(|&count| count > 1)
    }

    fn count_keys<'a>(&'a self, seen: &mut HashMap<&'a str, usize>) {
        match self {
            Document::Array(items) => {
                for item in items {
                    item.count_keys(seen);
                }
            }
            Document::Object(map) => {
                for (key, value) in map {
                    *seen.entry(key.as_str()).or_insert(0) += 1;
                    value.count_keys(seen);
                }
            }
            _ => {}
        }
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Bool(value)
    }
}

impl From<Number> for Document {
    fn from(value: Number) -> Self {
        Document::Number(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Document {
                fn from(value: $ty) -> Self {
                    Document::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_string())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<Vec<Document>> for Document {
    fn from(value: Vec<Document>) -> Self {
        Document::Array(value)
    }
}

impl From<Map> for Document {
    fn from(value: Map) -> Self {
        Document::Object(value)
    }
}

impl<T: Into<Document>> From<Option<T>> for Document {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Document::Null)
    }
}
