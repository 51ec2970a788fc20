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

//! MessagePack codec backed by `rmp-serde`.

use crate::codec::{Codec, CodecDescriptor};
use crate::error::{CodecError, CodecErrorKind, CodecResult};
use crate::registry::CodecKind;
use std::io;
use wirebench_core::Document;

static DESCRIPTOR: CodecDescriptor = CodecDescriptor {
    kind: CodecKind::MsgPack,
    name: "msgpack",
    binary: true,
    streaming: false,
    numeric_policy: "lossless: uint64/int64 markers cover the integer range, floats as float64",
};

/// Compact type-tag framing with string map keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackCodec;

impl MsgPackCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for MsgPackCodec {
    fn descriptor(&self) -> &'static CodecDescriptor {
        &DESCRIPTOR
    }

    fn encode(&self, doc: &Document) -> CodecResult<Vec<u8>> {
        rmp_serde::to_vec(doc).map_err(|e| {
            CodecError::encode(DESCRIPTOR.name, CodecErrorKind::Unsupported, e.to_string())
        })
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Document> {
        let mut reader = bytes;
        let doc: Document = rmp_serde::from_read(&mut reader).map_err(|e| {
            let consumed = bytes.len() - reader.len();
            map_decode_error(e).with_offset(consumed)
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

fn map_decode_error(err: rmp_serde::decode::Error) -> CodecError {
    use rmp_serde::decode::Error;

    let kind = match &err {
        Error::InvalidMarkerRead(io_err) | Error::InvalidDataRead(io_err)
            if io_err.kind() == io::ErrorKind::UnexpectedEof =>
        {
            CodecErrorKind::Truncated
        }
        Error::DepthLimitExceeded => CodecErrorKind::Unsupported,
        _ => CodecErrorKind::Corrupt,
    };
    CodecError::decode(DESCRIPTOR.name, kind, err.to_string())
}
