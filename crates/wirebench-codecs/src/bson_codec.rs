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

//! BSON codec backed by the `bson` crate.
//!
//! BSON frames every document as a length-prefixed record and requires a
//! document at the root, so the value is carried in a one-field envelope
//! `{"v": <document>}`. Two values have no BSON representation and are
//! rejected at encode time instead of being narrowed:
//!
//! - integers above `i64::MAX` (BSON has no unsigned 64-bit type)
//! - object keys containing NUL (keys are C strings)

use crate::codec::{Codec, CodecDescriptor};
use crate::error::{CodecError, CodecErrorKind, CodecResult};
use crate::registry::CodecKind;
use serde::{Deserialize, Serialize};
use wirebench_core::Document;

static DESCRIPTOR: CodecDescriptor = CodecDescriptor {
    kind: CodecKind::Bson,
    name: "bson",
    binary: true,
    streaming: false,
    numeric_policy: "reject: integers above i64::MAX fail to encode; i64 and f64 are lossless",
};

/// Envelope field name.
const VALUE_FIELD: &str = "v";

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    v: &'a Document,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    v: Document,
}

/// Length-prefixed records.
#[derive(Debug, Clone, Copy, Default)]
pub struct BsonCodec;

impl BsonCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for BsonCodec {
    fn descriptor(&self) -> &'static CodecDescriptor {
        &DESCRIPTOR
    }

    fn encode(&self, doc: &Document) -> CodecResult<Vec<u8>> {
        check_representable(doc)?;
        bson::to_vec(&EnvelopeRef { v: doc }).map_err(|e| {
            CodecError::encode(DESCRIPTOR.name, CodecErrorKind::Unsupported, e.to_string())
        })
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Document> {
        check_frame(bytes)?;
        let envelope: Envelope = bson::from_slice(bytes).map_err(|e| {
            let kind = match e {
                bson::de::Error::EndOfStream => CodecErrorKind::Truncated,
                _ => CodecErrorKind::Corrupt,
            };
            CodecError::decode(DESCRIPTOR.name, kind, e.to_string())
        })?;
        Ok(envelope.v)
    }
}

/// Validates the outer length prefix against the input length.
fn check_frame(bytes: &[u8]) -> CodecResult<()> {
    // int32 length + terminating NUL
    const MIN_DOCUMENT: usize = 5;

    if bytes.len() < MIN_DOCUMENT {
        return Err(CodecError::decode(
            DESCRIPTOR.name,
            CodecErrorKind::Truncated,
            format!("{} bytes is shorter than an empty document", bytes.len()),
        )
        .with_offset(bytes.len()));
    }
    let declared = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let declared = usize::try_from(declared).map_err(|_| {
        CodecError::decode(
            DESCRIPTOR.name,
            CodecErrorKind::Corrupt,
            format!("negative document length {}", declared),
        )
        .with_offset(0)
    })?;
    if declared > bytes.len() {
        return Err(CodecError::decode(
            DESCRIPTOR.name,
            CodecErrorKind::Truncated,
            format!("document declares {} bytes, {} available", declared, bytes.len()),
        )
        .with_offset(bytes.len()));
    }
    if declared < bytes.len() {
        return Err(CodecError::decode(
            DESCRIPTOR.name,
            CodecErrorKind::Trailing,
            format!("{} bytes after end of document", bytes.len() - declared),
        )
        .with_offset(declared));
    }
    Ok(())
}

/// Rejects values BSON cannot carry without loss.
fn check_representable(doc: &Document) -> CodecResult<()> {
    match doc {
        Document::Number(n) if n.is_integer() && !n.is_i64() => Err(CodecError::encode(
            DESCRIPTOR.name,
            CodecErrorKind::Unsupported,
            format!("integer {} exceeds the signed 64-bit range", n),
        )),
        Document::Array(items) => items.iter().try_for_each(check_representable),
        Document::Object(map) => map.iter().try_for_each(|(key, value)| {
            if key.contains('\0') {
                return Err(CodecError::encode(
                    DESCRIPTOR.name,
                    CodecErrorKind::Unsupported,
                    format!("key {:?} contains a NUL byte", key),
                ));
            }
            check_representable(value)
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        assert_eq!(BsonCodec.name(), "bson");
        assert!(BsonCodec.descriptor().binary);
        assert!(BsonCodec.descriptor().numeric_policy.starts_with("reject"));
    }

    #[test]
    fn test_envelope_layout() {
        let bytes = BsonCodec.encode(&Document::Null).unwrap();
        // int32 total length, null element "v", document terminator
        assert_eq!(bytes, vec![8, 0, 0, 0, 0x0a, b'v', 0x00, 0x00]);
        assert_eq!(VALUE_FIELD, "v");
    }

    #[test]
    fn test_u64_above_i64_rejected() {
        let err = BsonCodec.encode(&Document::from(u64::MAX)).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Unsupported);
        assert!(err.is_encode());
        assert!(BsonCodec.encode(&Document::from(i64::MAX as u64)).is_ok());
    }

    #[test]
    fn test_nul_key_rejected() {
        let doc = Document::object([("a\0b", Document::Null)]);
        let err = BsonCodec.encode(&doc).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Unsupported);
    }

    #[test]
    fn test_frame_checks() {
        let bytes = BsonCodec.encode(&Document::from(true)).unwrap();

        let err = BsonCodec.decode(&bytes[..bytes.len() - 1]).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Truncated);

        let mut longer = bytes.clone();
        longer.push(0);
        let err = BsonCodec.decode(&longer).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Trailing);
        assert_eq!(err.offset, Some(bytes.len()));

        let err = BsonCodec.decode(&[0xff, 0xff, 0xff, 0xff, 0x00]).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Corrupt);

        let err = BsonCodec.decode(&[1, 2]).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Truncated);
    }
}
