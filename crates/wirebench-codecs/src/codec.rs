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

//! The codec abstraction.
//!
//! A [`Codec`] turns a [`Document`] into bytes and back. Every codec is
//! stateless: configuration only, a fresh output buffer per call, so one
//! instance can be reused across any number of benchmark iterations.

use crate::error::{CodecError, CodecErrorKind, CodecOp, CodecResult};
use crate::registry::CodecKind;
use crate::text_safe;
use wirebench_core::Document;

/// Static description of a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecDescriptor {
    /// Registry identifier.
    pub kind: CodecKind,
    /// Short lowercase name (`json`, `cbor`, ...).
    pub name: &'static str,
    /// Output is arbitrary bytes rather than UTF-8 text.
    pub binary: bool,
    /// Supports incremental encode/decode. Not used by the harness.
    pub streaming: bool,
    /// How the format treats numbers outside its native range.
    pub numeric_policy: &'static str,
}

/// Whether a payload holds raw bytes or their base64 rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadForm {
    Raw,
    Base64,
}

/// Bytes produced by one codec invocation, tagged with their producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    codec: CodecKind,
    form: PayloadForm,
    bytes: Vec<u8>,
}

impl EncodedPayload {
    /// Wraps raw bytes produced by `codec`.
    pub fn raw(codec: CodecKind, bytes: Vec<u8>) -> Self {
        Self {
            codec,
            form: PayloadForm::Raw,
            bytes,
        }
    }

    pub fn codec(&self) -> CodecKind {
        self.codec
    }

    pub fn form(&self) -> PayloadForm {
        self.form
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the text-safe rendering of this payload.
    ///
    /// A payload that is already text-safe is returned unchanged.
    pub fn to_text_safe(&self) -> EncodedPayload {
        match self.form {
            PayloadForm::Base64 => self.clone(),
            PayloadForm::Raw => Self {
                codec: self.codec,
                form: PayloadForm::Base64,
                bytes: text_safe::encode(&self.bytes).into_bytes(),
            },
        }
    }

    /// The base64 text, if this payload is in text-safe form.
    pub fn as_text(&self) -> Option<&str> {
        match self.form {
            PayloadForm::Base64 => std::str::from_utf8(&self.bytes).ok(),
            PayloadForm::Raw => None,
        }
    }
}

/// A paired encode/decode strategy for one wire format.
///
/// Implementations must be deterministic and free of hidden mutable state.
pub trait Codec: Send + Sync {
    /// Static description of this codec.
    fn descriptor(&self) -> &'static CodecDescriptor;

    /// Encodes a document.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] with [`CodecErrorKind::Unsupported`] if the
    /// document holds a value the format cannot represent.
    fn encode(&self, doc: &Document) -> CodecResult<Vec<u8>>;

    /// Decodes bytes produced by [`Codec::encode`].
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the bytes are truncated, corrupt, carry an
    /// unknown type tag, or are followed by trailing bytes.
    fn decode(&self, bytes: &[u8]) -> CodecResult<Document>;

    /// Short lowercase name of this codec.
    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Encodes a document into a tagged payload.
    fn encode_payload(&self, doc: &Document) -> CodecResult<EncodedPayload> {
        Ok(EncodedPayload::raw(self.descriptor().kind, self.encode(doc)?))
    }

    /// Encodes a document, then renders the bytes as base64 text.
    fn encode_text(&self, doc: &Document) -> CodecResult<String> {
        Ok(text_safe::encode(&self.encode(doc)?))
    }

    /// Decodes base64 text produced by [`Codec::encode_text`].
    fn decode_text(&self, text: &str) -> CodecResult<Document> {
        let bytes = text_safe::decode(text).map_err(|e| {
            let err = CodecError::new(
                self.name(),
                CodecOp::TextDecode,
                CodecErrorKind::Base64,
                e.to_string(),
            );
            match text_safe::error_offset(&e) {
                Some(offset) => err.with_offset(offset),
                None => err,
            }
        })?;
        self.decode(&bytes)
    }

    /// Decodes a payload in either form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecErrorKind::Corrupt`] if the payload was produced by a
    /// different codec.
    fn decode_payload(&self, payload: &EncodedPayload) -> CodecResult<Document> {
        if payload.codec() != self.descriptor().kind {
            return Err(CodecError::decode(
                self.name(),
                CodecErrorKind::Corrupt,
                format!("payload was produced by {}", payload.codec()),
            ));
        }
        match payload.form() {
            PayloadForm::Raw => self.decode(payload.as_bytes()),
            PayloadForm::Base64 => {
                let text = payload.as_text().ok_or_else(|| {
                    CodecError::new(
                        self.name(),
                        CodecOp::TextDecode,
                        CodecErrorKind::Base64,
                        "payload text is not UTF-8",
                    )
                })?;
                self.decode_text(text)
            }
        }
    }
}
