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

//! Text-safe rendering of binary payloads (standard padded base64).

use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine as _};

/// Renders bytes as base64 text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Parses base64 text back into bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(text)
}

/// Byte offset of a decode failure, when base64 reports one.
pub fn error_offset(err: &DecodeError) -> Option<usize> {
    match err {
        DecodeError::InvalidByte(offset, _) => Some(*offset),
        DecodeError::InvalidLastSymbol(offset, _) => Some(*offset),
        DecodeError::InvalidLength(len) => Some(*len),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_padded_alphabet() {
        assert_eq!(encode(b"ab"), "YWI=");
        assert_eq!(encode(&[0xfb, 0xff]), "+/8=");
    }

    #[test]
    fn test_invalid_byte_offset() {
        let err = decode("YW*=").unwrap_err();
        assert_eq!(error_offset(&err), Some(2));
    }
}
