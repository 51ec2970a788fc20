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

//! CBOR codec (RFC 8949) backed by `ciborium`.

use crate::codec::{Codec, CodecDescriptor};
use crate::error::{CodecError, CodecErrorKind, CodecResult};
use crate::registry::CodecKind;
use std::io;
use wirebench_core::Document;

static DESCRIPTOR: CodecDescriptor = CodecDescriptor {
    kind: CodecKind::Cbor,
    name: "cbor",
    binary: true,
    streaming: false,
    numeric_policy: "lossless: native u64/negative integers; floats may be stored \
                     in half or single precision only when exact",
};

/// Compact type-tag framing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CborCodec;

impl CborCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for CborCodec {
    fn descriptor(&self) -> &'static CodecDescriptor {
        &DESCRIPTOR
    }

    fn encode(&self, doc: &Document) -> CodecResult<Vec<u8>> {
        let mut out = Vec::new();
        ciborium::into_writer(doc, &mut out).map_err(|e| match e {
            ciborium::ser::Error::Io(io_err) => {
                CodecError::encode(DESCRIPTOR.name, CodecErrorKind::Unsupported, io_err.to_string())
            }
            ciborium::ser::Error::Value(msg) => {
                CodecError::encode(DESCRIPTOR.name, CodecErrorKind::Unsupported, msg)
            }
        })?;
        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Document> {
        let mut reader = bytes;
        let doc: Document = ciborium::from_reader(&mut reader).map_err(|e| {
            let consumed = bytes.len() - reader.len();
            map_decode_error(e, consumed)
        })?;
        if !reader.is_empty() {
            let consumed = bytes.len() - reader.len();
            return Err(CodecError::decode(
                DESCRIPTOR.name,
                CodecErrorKind::Trailing,
                format!("{} bytes after end of value", reader.len()),
            )
            .with_offset(consumed));
        }
        Ok(doc)
    }
}

fn map_decode_error(err: ciborium::de::Error<io::Error>, consumed: usize) -> CodecError {
    use ciborium::de::Error;

    match err {
        Error::Io(io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof => CodecError::decode(
            DESCRIPTOR.name,
            CodecErrorKind::Truncated,
            "unexpected end of input",
        )
        .with_offset(consumed),
        Error::Io(io_err) => {
            CodecError::decode(DESCRIPTOR.name, CodecErrorKind::Corrupt, io_err.to_string())
                .with_offset(consumed)
        }
        Error::Syntax(offset) => CodecError::decode(
            DESCRIPTOR.name,
            CodecErrorKind::Corrupt,
            "invalid CBOR header",
        )
        .with_offset(offset),
        Error::Semantic(offset, msg) => {
            let err = CodecError::decode(DESCRIPTOR.name, CodecErrorKind::Corrupt, msg);
            err.with_offset(offset.unwrap_or(consumed))
        }
        Error::RecursionLimitExceeded => CodecError::decode(
            DESCRIPTOR.name,
            CodecErrorKind::Unsupported,
            "nesting exceeds the decoder recursion limit",
        )
        .with_offset(consumed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        assert_eq!(CborCodec.name(), "cbor");
        assert!(CborCodec.descriptor().binary);
    }

    #[test]
    fn test_small_map_layout() {
        let doc = Document::object([("a", Document::from(1u8))]);
        // map(1), text(1) "a", unsigned(1)
        assert_eq!(CborCodec.encode(&doc).unwrap(), vec![0xa1, 0x61, b'a', 0x01]);
    }

    #[test]
    fn test_truncated() {
        let bytes = CborCodec
            .encode(&Document::array([Document::from("hello")]))
            .unwrap();
        let err = CborCodec.decode(&bytes[..bytes.len() - 2]).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Truncated);
    }

    #[test]
    fn test_trailing() {
        let mut bytes = CborCodec.encode(&Document::from(true)).unwrap();
        bytes.push(0x00);
        let err = CborCodec.decode(&bytes).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Trailing);
        assert_eq!(err.offset, Some(1));
    }

    #[test]
    fn test_byte_strings_rejected() {
        // bytes(2) 0x01 0x02: the document model has no byte string type
        let err = CborCodec.decode(&[0x42, 0x01, 0x02]).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Corrupt);
    }
}
