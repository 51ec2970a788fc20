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

//! Per-fork benchmark state.
//!
//! Setup loads the fixture once, pre-computes every encoding the decode-side
//! operations need, and checks that every codec round-trips the fixture.
//! A codec that fails the check is marked failed here; its pairs are then
//! reported as failures without being measured.

use crate::error::{BenchError, Result};
use crate::fixtures::load_fixture;
use crate::harness::plan::{Operation, Target};
use crate::reporters::types::SizeRow;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};
use wirebench_codecs::{
    AnyCodec, Codec, CodecKind, CodecRegistry, EncodedPayload, GzipCompressor, JsonCodec,
};
use wirebench_core::{to_canonical_vec, Document};

/// Pre-computed outputs of one codec.
#[derive(Debug, Clone)]
struct Encoded {
    codec: AnyCodec,
    raw: EncodedPayload,
    /// Base64 rendering, binary codecs only.
    text: Option<EncodedPayload>,
}

/// Everything one fork needs to measure any pair.
#[derive(Debug)]
pub struct BenchState {
    document: Document,
    gzip: GzipCompressor,
    json_text: Vec<u8>,
    gzip_bytes: Option<Vec<u8>>,
    encoded: BTreeMap<CodecKind, Encoded>,
    failures: BTreeMap<Target, String>,
    size_rows: Vec<SizeRow>,
}

impl BenchState {
    /// Loads and parses the fixture at `path`, then prepares every codec.
    ///
    /// # Errors
    ///
    /// Fails only for fixture problems. Codec failures are recorded per
    /// target; see [`BenchState::failure`].
    pub fn setup(path: &Path) -> Result<Self> {
        let document = load_fixture(path)?;
        info!(
            fixture = %path.display(),
            nodes = document.node_count(),
            depth = document.depth(),
            "loaded fixture"
        );
        Ok(Self::from_document(document))
    }

    /// Prepares every codec for an already parsed document.
    pub fn from_document(document: Document) -> Self {
        let registry = CodecRegistry::new();
        let gzip = GzipCompressor::new();
        let json_text = to_canonical_vec(&document);

        let mut encoded = BTreeMap::new();
        let mut failures = BTreeMap::new();
        for codec in registry.iter() {
            let kind = codec.kind();
            match prepare_codec(*codec, &document) {
                Ok(enc) => {
                    debug!(codec = %kind, bytes = enc.raw.len(), "codec verified");
                    encoded.insert(kind, enc);
                }
                Err(e) => {
                    warn!(codec = %kind, error = %e, "codec failed setup, its pairs will be skipped");
                    failures.insert(Target::Codec(kind), e.to_string());
                }
            }
        }

        let gzip_bytes = match prepare_gzip(&gzip, &json_text) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(error = %e, "gzip failed setup, its pairs will be skipped");
                failures.insert(Target::Gzip, e.to_string());
                None
            }
        };

        let size_rows = size_table(&document, &json_text, &encoded, gzip_bytes.as_deref());
        for row in &size_rows {
            info!(
                format = %row.format,
                bytes = row.bytes,
                ratio = row.ratio_vs_json,
                flagged = row.flagged,
                "encoded size"
            );
        }

        Self {
            document,
            gzip,
            json_text,
            gzip_bytes,
            encoded,
            failures,
            size_rows,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Size of every encoding of the fixture, JSON first.
    pub fn size_rows(&self) -> &[SizeRow] {
        &self.size_rows
    }

    /// Setup failure recorded for `target`, if any.
    pub fn failure(&self, target: Target) -> Option<&str> {
        self.failures.get(&target).map(String::as_str)
    }

    /// Performs one operation on the fixture.
    ///
    /// The decoded or encoded result is passed through
    /// [`std::hint::black_box`] and dropped.
    pub fn execute(&self, target: Target, operation: Operation) -> Result<()> {
        match target {
            Target::Codec(kind) => {
                let enc = self
                    .encoded
                    .get(&kind)
                    .ok_or_else(|| unavailable(Target::Codec(kind)))?;
                self.execute_codec(enc, operation)
            }
            Target::Gzip => self.execute_gzip(operation),
        }
    }

    fn execute_codec(&self, enc: &Encoded, operation: Operation) -> Result<()> {
        let codec = &enc.codec;
        match (operation, enc.text.as_ref()) {
            (Operation::Encode, _) => {
                std::hint::black_box(codec.encode(&self.document)?);
            }
            (Operation::Decode, _) => {
                std::hint::black_box(codec.decode_payload(&enc.raw)?);
            }
            (Operation::EncodeText, Some(_)) => {
                std::hint::black_box(codec.encode_text(&self.document)?);
            }
            (Operation::DecodeText, Some(text)) => {
                std::hint::black_box(codec.decode_payload(text)?);
            }
            _ => return Err(unsupported(Target::Codec(codec.kind()), operation)),
        }
        Ok(())
    }

    fn execute_gzip(&self, operation: Operation) -> Result<()> {
        let packed = self
            .gzip_bytes
            .as_deref()
            .ok_or_else(|| unavailable(Target::Gzip))?;
        match operation {
            Operation::Compress => {
                let text = JsonCodec.encode(&self.document)?;
                std::hint::black_box(self.gzip.compress(&text)?);
            }
            Operation::Decompress => {
                let text = self.gzip.decompress(packed)?;
                std::hint::black_box(JsonCodec.decode(&text)?);
            }
            _ => return Err(unsupported(Target::Gzip, operation)),
        }
        Ok(())
    }

    /// Canonical JSON text of the fixture.
    pub fn json_text(&self) -> &[u8] {
        &self.json_text
    }
}

fn unsupported(target: Target, operation: Operation) -> BenchError {
    BenchError::UnsupportedOperation {
        target: target.to_string(),
        operation: operation.to_string(),
    }
}

fn unavailable(target: Target) -> BenchError {
    BenchError::TargetUnavailable {
        target: target.to_string(),
    }
}

/// Encodes, decodes and compares; for binary codecs also the base64 form.
fn prepare_codec(codec: AnyCodec, document: &Document) -> Result<Encoded> {
    let raw = codec.encode_payload(document)?;
    let decoded = codec.decode_payload(&raw)?;
    if decoded != *document {
        return Err(round_trip_mismatch(codec.name(), "raw"));
    }

    let text = if codec.descriptor().binary {
        let text = raw.to_text_safe();
        if codec.decode_payload(&text)? != *document {
            return Err(round_trip_mismatch(codec.name(), "text-safe"));
        }
        Some(text)
    } else {
        None
    };

    Ok(Encoded { codec, raw, text })
}

fn prepare_gzip(gzip: &GzipCompressor, json_text: &[u8]) -> Result<Vec<u8>> {
    let packed = gzip.compress(json_text)?;
    if gzip.decompress(&packed)? != json_text {
        return Err(round_trip_mismatch("gzip", "compressed"));
    }
    Ok(packed)
}

fn round_trip_mismatch(name: &str, form: &'static str) -> BenchError {
    BenchError::RoundTripMismatch {
        target: name.to_string(),
        form,
    }
}

/// Builds the size table.
///
/// A binary codec is flagged when its raw output is larger than JSON on a
/// document with repeated keys.
fn size_table(
    document: &Document,
    json_text: &[u8],
    encoded: &BTreeMap<CodecKind, Encoded>,
    gzip_bytes: Option<&[u8]>,
) -> Vec<SizeRow> {
    let json_len = json_text.len();
    let repeated_keys = document.has_repeated_keys();
    let row = |format: String, bytes: usize, flagged: bool| SizeRow {
        format,
        bytes,
        ratio_vs_json: if json_len == 0 {
            0.0
        } else {
            bytes as f64 / json_len as f64
        },
        flagged,
    };

    let mut rows = Vec::new();
    for (kind, enc) in encoded {
        let binary = kind.is_binary();
        rows.push(row(
            kind.to_string(),
            enc.raw.len(),
            binary && repeated_keys && enc.raw.len() > json_len,
        ));
        if let Some(text) = &enc.text {
            rows.push(row(format!("{} (base64)", kind), text.len(), false));
        }
    }
    if let Some(packed) = gzip_bytes {
        rows.push(row("json+gzip".to_string(), packed.len(), false));
    }
    rows
}
