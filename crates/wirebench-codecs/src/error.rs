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

//! Error types for codec and compressor operations.

use std::fmt;
use std::io;
use thiserror::Error;

/// The codec operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecOp {
    /// Document to bytes.
    Encode,
    /// Bytes to document.
    Decode,
    /// Base64 text to bytes to document.
    TextDecode,
}

impl fmt::Display for CodecOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
            Self::TextDecode => write!(f, "text decode"),
        }
    }
}

/// Why a codec operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecErrorKind {
    /// The document holds a value the format cannot represent.
    Unsupported,
    /// Input ended before a complete value.
    Truncated,
    /// Input is malformed or carries an unknown type tag.
    Corrupt,
    /// A complete value was followed by extra bytes.
    Trailing,
    /// The text-safe rendering is not valid base64.
    Base64,
}

impl fmt::Display for CodecErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "UnsupportedValue"),
            Self::Truncated => write!(f, "Truncated"),
            Self::Corrupt => write!(f, "Corrupt"),
            Self::Trailing => write!(f, "TrailingBytes"),
            Self::Base64 => write!(f, "InvalidBase64"),
        }
    }
}

/// A codec could not process a document or byte sequence.
///
/// Carries the codec name, the operation and, when the underlying library
/// reports one, the byte offset of the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{codec} {op} failed: {kind}{}: {message}", offset_suffix(.offset))]
pub struct CodecError {
    /// Name of the codec.
    pub codec: &'static str,
    /// Operation that failed.
    pub op: CodecOp,
    /// Failure category.
    pub kind: CodecErrorKind,
    /// Message from the underlying library.
    pub message: String,
    /// Byte offset into the input, if known.
    pub offset: Option<usize>,
}

fn offset_suffix(offset: &Option<usize>) -> String {
    offset
        .map(|o| format!(" at byte {}", o))
        .unwrap_or_default()
}

impl CodecError {
    /// Create a new error.
    pub fn new(
        codec: &'static str,
        op: CodecOp,
        kind: CodecErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            codec,
            op,
            kind,
            message: message.into(),
            offset: None,
        }
    }

    /// Add byte offset information.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    // Convenience constructors for the common cases
    pub fn encode(codec: &'static str, kind: CodecErrorKind, message: impl Into<String>) -> Self {
        Self::new(codec, CodecOp::Encode, kind, message)
    }

    pub fn decode(codec: &'static str, kind: CodecErrorKind, message: impl Into<String>) -> Self {
        Self::new(codec, CodecOp::Decode, kind, message)
    }

    /// Returns true if the error came from an encode call.
    pub fn is_encode(&self) -> bool {
        self.op == CodecOp::Encode
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// The compressor failed to compress or decompress a byte stream.
#[derive(Debug, Error)]
pub enum CompressionError {
    /// Compression failed.
    #[error("compression failed: {0}")]
    Compress(#[source] io::Error),
    /// Decompression failed (corrupt or truncated stream).
    #[error("decompression failed: {0}")]
    Decompress(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_offset() {
        let err = CodecError::encode("bson", CodecErrorKind::Unsupported, "u64 out of range");
        assert_eq!(
            err.to_string(),
            "bson encode failed: UnsupportedValue: u64 out of range"
        );
        assert!(err.is_encode());
    }

    #[test]
    fn test_display_with_offset() {
        let err = CodecError::decode("cbor", CodecErrorKind::Corrupt, "bad header").with_offset(12);
        assert_eq!(
            err.to_string(),
            "cbor decode failed: Corrupt at byte 12: bad header"
        );
        assert!(!err.is_encode());
    }

    #[test]
    fn test_op_display() {
        assert_eq!(CodecOp::TextDecode.to_string(), "text decode");
    }

    #[test]
    fn test_compression_error_display() {
        let err = CompressionError::Decompress(io::Error::new(io::ErrorKind::InvalidData, "bad"));
        assert_eq!(err.to_string(), "decompression failed: bad");
    }
}
