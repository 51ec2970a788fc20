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

//! The fixed set of codecs.
//!
//! The formats are known at compile time, so the registry is a closed enum
//! ([`CodecKind`]) with enum dispatch ([`AnyCodec`]) rather than a plugin
//! table.

use crate::bson_codec::BsonCodec;
use crate::cbor_codec::CborCodec;
use crate::codec::{Codec, CodecDescriptor};
use crate::error::CodecResult;
use crate::json_codec::JsonCodec;
use crate::msgpack_codec::MsgPackCodec;
use crate::smile_codec::SmileCodec;
use std::fmt;
use std::str::FromStr;
use wirebench_core::Document;

/// Identifier of a registered codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodecKind {
    /// JSON text, the canonical form.
    Json,
    /// CBOR (RFC 8949).
    Cbor,
    /// MessagePack.
    MsgPack,
    /// Smile, with shared keys and strings.
    Smile,
    /// BSON.
    Bson,
}

impl CodecKind {
    /// Every registered codec, text codec first.
    pub const ALL: [CodecKind; 5] = [
        CodecKind::Json,
        CodecKind::Cbor,
        CodecKind::MsgPack,
        CodecKind::Smile,
        CodecKind::Bson,
    ];

    /// Returns the codec name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecKind::Json => "json",
            CodecKind::Cbor => "cbor",
            CodecKind::MsgPack => "msgpack",
            CodecKind::Smile => "smile",
            CodecKind::Bson => "bson",
        }
    }

    /// Returns true for codecs producing arbitrary bytes.
    pub fn is_binary(&self) -> bool {
        !matches!(self, CodecKind::Json)
    }

    /// Constructs a fresh codec instance.
    pub fn build(&self) -> AnyCodec {
        match self {
            CodecKind::Json => AnyCodec::Json(JsonCodec::new()),
            CodecKind::Cbor => AnyCodec::Cbor(CborCodec::new()),
            CodecKind::MsgPack => AnyCodec::MsgPack(MsgPackCodec::new()),
            CodecKind::Smile => AnyCodec::Smile(SmileCodec::new()),
            CodecKind::Bson => AnyCodec::Bson(BsonCodec::new()),
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A codec name that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown codec '{0}' (expected one of: json, cbor, msgpack, smile, bson)")]
pub struct UnknownCodec(pub String);

impl FromStr for CodecKind {
    type Err = UnknownCodec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(CodecKind::Json),
            "cbor" => Ok(CodecKind::Cbor),
            "msgpack" | "messagepack" | "mp" => Ok(CodecKind::MsgPack),
            "smile" => Ok(CodecKind::Smile),
            "bson" => Ok(CodecKind::Bson),
            _ => Err(UnknownCodec(s.to_string())),
        }
    }
}

/// Any registered codec.
#[derive(Debug, Clone, Copy)]
pub enum AnyCodec {
    Json(JsonCodec),
    Cbor(CborCodec),
    MsgPack(MsgPackCodec),
    Smile(SmileCodec),
    Bson(BsonCodec),
}

impl AnyCodec {
    pub fn kind(&self) -> CodecKind {
        self.descriptor().kind
    }
}

impl Codec for AnyCodec {
    fn descriptor(&self) -> &'static CodecDescriptor {
        match self {
            AnyCodec::Json(c) => c.descriptor(),
            AnyCodec::Cbor(c) => c.descriptor(),
            AnyCodec::MsgPack(c) => c.descriptor(),
            AnyCodec::Smile(c) => c.descriptor(),
            AnyCodec::Bson(c) => c.descriptor(),
        }
    }

    fn encode(&self, doc: &Document) -> CodecResult<Vec<u8>> {
        match self {
            AnyCodec::Json(c) => c.encode(doc),
            AnyCodec::Cbor(c) => c.encode(doc),
            AnyCodec::MsgPack(c) => c.encode(doc),
            AnyCodec::Smile(c) => c.encode(doc),
            AnyCodec::Bson(c) => c.encode(doc),
        }
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Document> {
        match self {
            AnyCodec::Json(c) => c.decode(bytes),
            AnyCodec::Cbor(c) => c.decode(bytes),
            AnyCodec::MsgPack(c) => c.decode(bytes),
            AnyCodec::Smile(c) => c.decode(bytes),
            AnyCodec::Bson(c) => c.decode(bytes),
        }
    }
}

/// One instance of every registered codec, built once per harness setup.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    codecs: Vec<AnyCodec>,
}

impl CodecRegistry {
    /// Builds every registered codec.
    pub fn new() -> Self {
        Self::with_kinds(&CodecKind::ALL)
    }

    /// Builds only the given codecs, in registry order, without duplicates.
    pub fn with_kinds(kinds: &[CodecKind]) -> Self {
        let codecs = CodecKind::ALL
            .iter()
            .filter(|kind| kinds.contains(*kind))
            .map(CodecKind::build)
            .collect();
        Self { codecs }
    }

    pub fn get(&self, kind: CodecKind) -> Option<&AnyCodec> {
        self.codecs.iter().find(|c| c.kind() == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnyCodec> {
        self.codecs.iter()
    }

    /// Codecs with binary output.
    pub fn binary(&self) -> impl Iterator<Item = &AnyCodec> {
        self.codecs.iter().filter(|c| c.descriptor().binary)
    }

    pub fn kinds(&self) -> Vec<CodecKind> {
        self.codecs.iter().map(AnyCodec::kind).collect()
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
