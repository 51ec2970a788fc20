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

//! `Deserialize` for [`Document`].
//!
//! The visitor accepts every shape a self-describing format can report and
//! folds it into the canonical model. Integer widths collapse through
//! [`Number`]; byte strings and non-string map keys are data errors.

use crate::document::{Document, Map};
use crate::number::Number;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a document value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Document, E> {
        Ok(Document::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Document, E> {
        Ok(Document::Number(Number::from(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Document, E> {
        Ok(Document::Number(Number::from(v)))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Document, E>
    where
        E: de::Error,
    {
        Number::from_i128(v)
            .map(Document::Number)
            .ok_or_else(|| E::custom(format!("integer {} does not fit in 64 bits", v)))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Document, E>
    where
        E: de::Error,
    {
        Number::from_u128(v)
            .map(Document::Number)
            .ok_or_else(|| E::custom(format!("integer {} does not fit in 64 bits", v)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Document, E>
    where
        E: de::Error,
    {
        Number::from_f64(v)
            .map(Document::Number)
            .ok_or_else(|| E::custom(format!("non-finite float {}", v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<Document, E> {
        Ok(Document::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Document, E> {
        Ok(Document::String(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Document, E>
    where
        E: de::Error,
    {
        Err(E::invalid_type(de::Unexpected::Bytes(v), &self))
    }

    fn visit_none<E>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Document, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_unit<E>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Document, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Document::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Document, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some(key) = access.next_key::<String>()? {
            let value = access.next_value()?;
            map.insert(key, value);
        }
        Ok(Document::Object(map))
    }
}
