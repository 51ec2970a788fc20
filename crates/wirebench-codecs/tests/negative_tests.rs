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

//! Negative tests for codec error handling.
//!
//! Every malformed input must produce a [`CodecError`] naming the codec and
//! operation, never a panic or a partially decoded document.

use wirebench_codecs::{Codec, CodecErrorKind, CodecKind, CodecOp, CodecRegistry, EncodedPayload};
use wirebench_core::Document;
use wirebench_test::{errors::invalid_text_samples, fixtures};

// ============================================================================
// CATEGORY 1: Truncated input
// ============================================================================

#[test]
fn test_empty_input_rejected_by_every_codec() {
    for codec in CodecRegistry::new().iter() {
        let err = codec.decode(&[]).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Truncated, "{}", codec.name());
        assert_eq!(err.op, CodecOp::Decode);
        assert_eq!(err.codec, codec.name());
    }
}

#[test]
fn test_every_prefix_is_rejected() {
    let doc = fixtures::scenario();
    for codec in CodecRegistry::new().iter() {
        let bytes = codec.encode(&doc).unwrap();
        for cut in 0..bytes.len() {
            assert!(
                codec.decode(&bytes[..cut]).is_err(),
                "{} accepted a {}-byte prefix of {} bytes",
                codec.name(),
                cut,
                bytes.len()
            );
        }
    }
}

#[test]
fn test_truncated_binary_payloads_report_truncation() {
    let doc = fixtures::records();
    for codec in CodecRegistry::new().binary() {
        let bytes = codec.encode(&doc).unwrap();
        let err = codec.decode(&bytes[..bytes.len() - 1]).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Truncated, "{}: {}", codec.name(), err);
    }
}

// ============================================================================
// CATEGORY 2: Trailing bytes
// ============================================================================

#[test]
fn test_trailing_bytes_rejected() {
    let doc = fixtures::scenario();
    for codec in CodecRegistry::new().iter() {
        let mut bytes = codec.encode(&doc).unwrap();
        let complete = bytes.len();
        bytes.extend_from_slice(b"\x00\x00");
        let err = codec.decode(&bytes).unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Trailing, "{}: {}", codec.name(), err);
        if codec.descriptor().binary {
            assert_eq!(err.offset, Some(complete), "{}", codec.name());
        }
    }
}

// ============================================================================
// CATEGORY 3: Corrupt input
// ============================================================================

#[test]
fn test_invalid_json_text_rejected() {
    let json = CodecKind::Json.build();
    for (name, text) in invalid_text_samples() {
        let err = json.decode(text.as_bytes()).unwrap_err();
        assert_eq!(err.op, CodecOp::Decode, "sample {}", name);
    }
}

#[test]
fn test_reserved_type_tags_rejected() {
    // 0xff is a break code outside an indefinite container in CBOR,
    // 0xc1 is never used in MessagePack.
    let cbor = CodecKind::Cbor.build();
    assert_eq!(cbor.decode(&[0xff]).unwrap_err().kind, CodecErrorKind::Corrupt);
    let msgpack = CodecKind::MsgPack.build();
    assert_eq!(msgpack.decode(&[0xc1]).unwrap_err().kind, CodecErrorKind::Corrupt);
}

#[test]
fn test_smile_bad_header_rejected() {
    let smile = CodecKind::Smile.build();
    // JSON text where the ":)\n" header should be
    let err = smile.decode(b"{\"a\":1}").unwrap_err();
    assert_eq!(err.kind, CodecErrorKind::Corrupt);
    // unsupported version nibble
    let err = smile.decode(b":)\n\x30\x21").unwrap_err();
    assert_eq!(err.kind, CodecErrorKind::Corrupt);
    assert_eq!(err.codec, "smile");
}

#[test]
fn test_bson_negative_length_rejected() {
    let err = CodecKind::Bson
        .build()
        .decode(&[0xff, 0xff, 0xff, 0xff, 0x00])
        .unwrap_err();
    assert_eq!(err.kind, CodecErrorKind::Corrupt);
    assert_eq!(err.offset, Some(0));
}

#[test]
fn test_error_message_names_codec_and_operation() {
    let err = CodecKind::MsgPack.build().decode(&[]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("msgpack"), "got: {}", msg);
    assert!(msg.contains("decode"), "got: {}", msg);
    assert!(msg.contains("Truncated"), "got: {}", msg);
}

// ============================================================================
// CATEGORY 4: Text-safe decoding
// ============================================================================

#[test]
fn test_invalid_base64_rejected() {
    for codec in CodecRegistry::new().binary() {
        let err = codec.decode_text("not*base64").unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::Base64, "{}", codec.name());
        assert_eq!(err.op, CodecOp::TextDecode);
        assert_eq!(err.offset, Some(3));
    }
}

#[test]
fn test_valid_base64_of_garbage_rejected_by_codec() {
    // "AAAA" decodes to three zero bytes
    for codec in CodecRegistry::new().binary() {
        let err = codec.decode_text("AAAA").unwrap_err();
        assert_eq!(err.op, CodecOp::Decode, "{}: {}", codec.name(), err);
    }
}

// ============================================================================
// CATEGORY 5: Payload mismatch and unsupported values
// ============================================================================

#[test]
fn test_payload_from_other_codec_rejected() {
    let doc = fixtures::scenario();
    let cbor_payload = CodecKind::Cbor.build().encode_payload(&doc).unwrap();
    let err = CodecKind::MsgPack
        .build()
        .decode_payload(&cbor_payload)
        .unwrap_err();
    assert_eq!(err.kind, CodecErrorKind::Corrupt);
    assert!(err.message.contains("cbor"));
}

#[test]
fn test_text_payload_of_garbage_rejected() {
    let payload = EncodedPayload::raw(CodecKind::Cbor, vec![0xff, 0xfe]).to_text_safe();
    // base64 of arbitrary bytes is valid text
    assert!(payload.as_text().is_some());
    let err = CodecKind::Cbor.build().decode_payload(&payload).unwrap_err();
    assert_eq!(err.op, CodecOp::Decode);
}

#[test]
fn test_bson_rejects_nul_in_key() {
    let doc = Document::object([("a\0b", Document::from(1u8))]);
    let err = CodecKind::Bson.build().encode(&doc).unwrap_err();
    assert_eq!(err.kind, CodecErrorKind::Unsupported);
    assert_eq!(err.op, CodecOp::Encode);
}
