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

//! JSON text codec (`serde_json`). This is the canonical form.

use crate::codec::{Codec, CodecDescriptor};
use crate::error::{CodecError, CodecErrorKind, CodecResult};
use crate::registry::CodecKind;
use wirebench_core::{parse_slice, to_canonical_vec, Document, MalformedInputError, MalformedKind};

static DESCRIPTOR: CodecDescriptor = CodecDescriptor {
    kind: CodecKind::Json,
    name: "json",
    binary: false,
    streaming: false,
    numeric_policy: "lossless: u64, i64 and finite f64 are written as JSON numbers",
};

/// Compact JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn descriptor(&self) -> &'static CodecDescriptor {
        &DESCRIPTOR
    }

    fn encode(&self, doc: &Document) -> CodecResult<Vec<u8>> {
        Ok(to_canonical_vec(doc))
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Document> {
        parse_slice(bytes).map_err(|e| malformed_to_codec_error(bytes, e))
    }
}

fn malformed_to_codec_error(bytes: &[u8], err: MalformedInputError) -> CodecError {
    let kind = match err.kind {
        MalformedKind::Eof => CodecErrorKind::Truncated,
        MalformedKind::Syntax if err.message.contains("trailing characters") => {
            CodecErrorKind::Trailing
        }
        MalformedKind::Syntax | MalformedKind::Encoding => CodecErrorKind::Corrupt,
        MalformedKind::Data => CodecErrorKind::Unsupported,
    };
    let offset = byte_offset(bytes, err.line, err.column);
    let decode_err = CodecError::decode(DESCRIPTOR.name, kind, err.to_string());
    match offset {
        Some(offset) => decode_err.with_offset(offset),
        None => decode_err,
    }
}

/// Converts a 1-based line/column position into a byte offset.
fn byte_offset(bytes: &[u8], line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut line_start = 0;
    for _ in 1..line {
        let newline = bytes[line_start..].iter().position(|&b| b == b'\n')?;
        line_start += newline + 1;
    }
    Some((line_start + column.saturating_sub(1)).min(bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let codec = JsonCodec::new();
        assert_eq!(codec.name(), "json");
        assert!(!codec.descriptor().binary);
        assert!(!codec.descriptor().streaming);
    }

    #[test]
    fn test_encode_is_canonical() {
        let doc = wirebench_core::parse(r#"{ "a" : 1 , "b" : [ true , null , "x" ] }"#).unwrap();
        let bytes = JsonCodec.encode(&doc).unwrap();
        assert_eq!(bytes, br#"{"a":1,"b":[true,null,"x"]}"#.to_vec());
    }

    #[test]
    fn test_truncated() {
        let err = JsonCodec.decode(br#"{"a":[1,2"#).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Truncated);
        assert_eq!(err.codec, "json");
    }

    #[test]
    fn test_trailing() {
        let err = JsonCodec.decode(b"[1] 2").unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Trailing);
    }

    #[test]
    fn test_byte_offset() {
        let bytes = b"ab\ncd\nef";
        assert_eq!(byte_offset(bytes, 1, 1), Some(0));
        assert_eq!(byte_offset(bytes, 2, 2), Some(4));
        assert_eq!(byte_offset(bytes, 3, 1), Some(6));
        assert_eq!(byte_offset(bytes, 9, 1), None);
        assert_eq!(byte_offset(bytes, 0, 0), None);
    }
}
