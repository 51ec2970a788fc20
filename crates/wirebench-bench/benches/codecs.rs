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

//! Codec benchmarks.
//!
//! Criterion counterpart of the harness: every codec's raw and text-safe
//! encode/decode, plus gzip over the JSON text, on the bundled fixture.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wirebench_bench::{default_fixture_path, load_fixture};
use wirebench_codecs::{Codec, CodecRegistry, GzipCompressor};
use wirebench_core::{parse_slice, to_canonical_vec, Document};

fn fixture() -> Document {
    load_fixture(&default_fixture_path()).expect("bundled fixture loads")
}

// ============================================================================
// Raw encode/decode
// ============================================================================

fn bench_raw(c: &mut Criterion) {
    let doc = fixture();
    let mut encode = c.benchmark_group("encode");
    for codec in CodecRegistry::new().iter() {
        let bytes = codec.encode(&doc).unwrap();
        encode.throughput(Throughput::Bytes(bytes.len() as u64));
        encode.bench_with_input(BenchmarkId::from_parameter(codec.name()), &doc, |b, doc| {
            b.iter(|| codec.encode(black_box(doc)).unwrap())
        });
    }
    encode.finish();

    let mut decode = c.benchmark_group("decode");
    for codec in CodecRegistry::new().iter() {
        let bytes = codec.encode(&doc).unwrap();
        decode.throughput(Throughput::Bytes(bytes.len() as u64));
        decode.bench_with_input(BenchmarkId::from_parameter(codec.name()), &bytes, |b, bytes| {
            b.iter(|| codec.decode(black_box(bytes)).unwrap())
        });
    }
    decode.finish();
}

// ============================================================================
// Text-safe encode/decode
// ============================================================================

fn bench_text(c: &mut Criterion) {
    let doc = fixture();
    let registry = CodecRegistry::new();

    let mut encode = c.benchmark_group("encode_text");
    for codec in registry.binary() {
        encode.bench_with_input(BenchmarkId::from_parameter(codec.name()), &doc, |b, doc| {
            b.iter(|| codec.encode_text(black_box(doc)).unwrap())
        });
    }
    encode.finish();

    let mut decode = c.benchmark_group("decode_text");
    for codec in registry.binary() {
        let text = codec.encode_text(&doc).unwrap();
        decode.throughput(Throughput::Bytes(text.len() as u64));
        decode.bench_with_input(BenchmarkId::from_parameter(codec.name()), &text, |b, text| {
            b.iter(|| codec.decode_text(black_box(text)).unwrap())
        });
    }
    decode.finish();
}

// ============================================================================
// Compression
// ============================================================================

fn bench_gzip(c: &mut Criterion) {
    let doc = fixture();
    let gzip = GzipCompressor::new();
    let text = to_canonical_vec(&doc);
    let packed = gzip.compress(&text).unwrap();

    let mut group = c.benchmark_group("gzip");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("compress_text", |b| {
        b.iter(|| gzip.compress(&to_canonical_vec(black_box(&doc))).unwrap())
    });
    group.bench_function("decompress_text", |b| {
        b.iter(|| parse_slice(&gzip.decompress(black_box(&packed)).unwrap()).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_raw, bench_text, bench_gzip);
criterion_main!(benches);
