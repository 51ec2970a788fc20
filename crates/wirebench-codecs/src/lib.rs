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

//! Wirebench Codecs
//!
//! Uniform encode/decode over five wire formats, all driven by the same
//! [`Document`](wirebench_core::Document) model:
//!
//! | Codec | Crate | Framing |
//! |-------|-------|---------|
//! | `json` | `serde_json` | text, the canonical form |
//! | `cbor` | `ciborium` | compact type tags |
//! | `msgpack` | `rmp-serde` | compact type tags |
//! | `smile` | `serde-smile` | compact type tags, back-referenced strings |
//! | `bson` | `bson` | length-prefixed records |
//!
//! Binary codecs additionally offer a text-safe (base64) rendering through
//! [`Codec::encode_text`] and [`Codec::decode_text`]. [`GzipCompressor`]
//! provides the compression data point on top of the JSON text.
//!
//! # Example
//!
//! ```
//! use wirebench_codecs::{Codec, CodecKind};
//! use wirebench_core::parse;
//!
//! let doc = parse(r#"{"a": 1, "b": [true, null, "x"]}"#).unwrap();
//! for kind in CodecKind::ALL {
//!     let codec = kind.build();
//!     let bytes = codec.encode(&doc).unwrap();
//!     assert_eq!(codec.decode(&bytes).unwrap(), doc);
//! }
//! ```

pub mod bson_codec;
pub mod cbor_codec;
pub mod codec;
pub mod compress;
pub mod error;
pub mod json_codec;
pub mod msgpack_codec;
pub mod registry;
pub mod smile_codec;
pub mod text_safe;

pub use bson_codec::BsonCodec;
pub use cbor_codec::CborCodec;
pub use codec::{Codec, CodecDescriptor, EncodedPayload, PayloadForm};
pub use compress::GzipCompressor;
pub use error::{CodecError, CodecErrorKind, CodecOp, CodecResult, CompressionError};
pub use json_codec::JsonCodec;
pub use msgpack_codec::MsgPackCodec;
pub use registry::{AnyCodec, CodecKind, CodecRegistry, UnknownCodec};
pub use smile_codec::SmileCodec;
