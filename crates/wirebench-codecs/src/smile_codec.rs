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

//! Smile codec backed by `serde-smile`.
//!
//! Smile is a binary rendering of the JSON data model. Besides compact type
//! tags it interns short strings: a repeated object key or string value is
//! written once and later replaced by a back-reference into a window of
//! recently seen strings. Both tables are enabled here, so documents with a
//! repeated schema shrink the most.
//!
//! Every encoding starts with the `:)\n` header and its feature byte. An
//! optional `0xff` end-of-stream marker after the value is accepted.

use crate::codec::{Codec, CodecDescriptor};
use crate::error::{CodecError, CodecErrorKind, CodecResult};
use crate::registry::CodecKind;
use serde::{Deserialize, Serialize};
use wirebench_core::Document;

static DESCRIPTOR: CodecDescriptor = CodecDescriptor {
    kind: CodecKind::Smile,
    name: "smile",
    binary: true,
    streaming: false,
    numeric_policy: "lossless: integers above i64::MAX as BigInteger, floats as float64",
};

const END_OF_STREAM: u8 = 0xff;

/// Compact type tags with back-referenced keys and short strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmileCodec;

impl SmileCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for SmileCodec {
    fn descriptor(&self) -> &'static CodecDescriptor {
        &DESCRIPTOR
    }

    fn encode(&self, doc: &Document) -> CodecResult<Vec<u8>> {
        let mut serializer = serde_smile::Serializer::builder()
            .shared_properties(true)
            .shared_strings(true)
            .build(Vec::new());
        doc.serialize(&mut serializer).map_err(|e| {
            CodecError::encode(DESCRIPTOR.name, CodecErrorKind::Unsupported, e.to_string())
        })?;
        Ok(serializer.into_inner())
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Document> {
        let mut reader = bytes;
        let result = {
            let mut de = serde_smile::Deserializer::from_reader(&mut reader);
            Document::deserialize(&mut de)
        };
        let consumed = bytes.len() - reader.len();
        let doc = result.map_err(|e| map_decode_error(&e).with_offset(consumed))?;
        match reader {
            [] | [END_OF_STREAM] => Ok(doc),
            rest => Err(CodecError::decode(
                DESCRIPTOR.name,
                CodecErrorKind::Trailing,
                format!("{} bytes after end of value", rest.len()),
            )
            .with_offset(consumed)),
        }
    }
}

/// serde-smile keeps its error kinds private; they are told apart by message.
fn map_decode_error(err: &serde_smile::Error) -> CodecError {
    let message = err.to_string();
    let kind = if message.starts_with("EOF while parsing") {
        CodecErrorKind::Truncated
    } else if message == "recursion limit exceeded" {
        CodecErrorKind::Unsupported
    } else {
        CodecErrorKind::Corrupt
    };
    CodecError::decode(DESCRIPTOR.name, kind, message)
}
