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

//! Benchmark pairs and the planner that enumerates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wirebench_codecs::CodecKind;

/// What a pair exercises: a codec, or the gzip compressor over JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    Codec(CodecKind),
    Gzip,
}

impl Target {
    pub fn name(&self) -> &'static str {
        match self {
            Target::Codec(kind) => kind.as_str(),
            Target::Gzip => "gzip",
        }
    }

    /// Operations this target supports, in report order.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            Target::Codec(kind) if kind.is_binary() => &[
                Operation::Encode,
                Operation::Decode,
                Operation::EncodeText,
                Operation::DecodeText,
            ],
            Target::Codec(_) => &[Operation::Encode, Operation::Decode],
            Target::Gzip => &[Operation::Compress, Operation::Decompress],
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A measured operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Document to raw bytes.
    Encode,
    /// Raw bytes to document.
    Decode,
    /// Document to bytes to base64 text.
    EncodeText,
    /// Base64 text to bytes to document.
    DecodeText,
    /// Document to JSON text to gzip.
    Compress,
    /// Gzip to JSON text to document.
    Decompress,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Encode,
        Operation::Decode,
        Operation::EncodeText,
        Operation::DecodeText,
        Operation::Compress,
        Operation::Decompress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Encode => "encode",
            Operation::Decode => "decode",
            Operation::EncodeText => "encode-text",
            Operation::DecodeText => "decode-text",
            Operation::Compress => "compress",
            Operation::Decompress => "decompress",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown operation '{}' (expected one of: {})",
                    s,
                    Operation::ALL.map(|op| op.as_str()).join(", ")
                )
            })
    }
}

/// One (target, operation) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub target: Target,
    pub operation: Operation,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.target, self.operation)
    }
}

/// Lists every valid pair, restricted by the codec and operation filters.
///
/// Empty filters select everything. The gzip target compresses JSON text,
/// so a codec filter keeps it only when it selects `json`.
pub fn plan_operations(codecs: &[CodecKind], operations: &[Operation]) -> Vec<Pair> {
    let codec_selected = |kind: CodecKind| codecs.is_empty() || codecs.contains(&kind);
    let op_selected = |op: &Operation| operations.is_empty() || operations.contains(op);

    CodecKind::ALL
        .into_iter()
        .filter(|kind| codec_selected(*kind))
        .map(Target::Codec)
        .chain(codec_selected(CodecKind::Json).then_some(Target::Gzip))
        .flat_map(move |target| {
            target
                .operations()
                .iter()
                .copied()
                .filter(move |op| op_selected(op))
                .map(move |operation| Pair { target, operation })
        })
        .collect()
}
