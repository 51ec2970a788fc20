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

//! Report data structures.

use crate::core::{Measurement, RunConfig};
use crate::harness::{Operation, Pair};
use serde::{Deserialize, Serialize};

/// Encoded size of the fixture in one format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRow {
    /// Format label, e.g. `cbor` or `cbor (base64)`.
    pub format: String,
    /// Encoded length in bytes.
    pub bytes: usize,
    /// `bytes / json bytes`.
    pub ratio_vs_json: f64,
    /// Binary output larger than JSON on a document with repeated keys.
    pub flagged: bool,
}

/// Result of measuring one pair across all forks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PairOutcome {
    /// Every warm-up and measured iteration completed.
    Measured { measurement: Measurement },
    /// An operation failed; no partial numbers are kept.
    Failed { error: String },
}

impl PairOutcome {
    /// Combines the outcomes of two forks for the same pair.
    ///
    /// Samples are concatenated, so throughput stays Σops / Σelapsed. If
    /// either fork failed the pair is failed, keeping the first error.
    pub fn merge(self, other: PairOutcome) -> PairOutcome {
        match (self, other) {
            (PairOutcome::Measured { mut measurement }, PairOutcome::Measured { measurement: m }) => {
                measurement.merge(m);
                PairOutcome::Measured { measurement }
            }
            (failed @ PairOutcome::Failed { .. }, _) => failed,
            (_, failed) => failed,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PairOutcome::Failed { .. })
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            PairOutcome::Measured { measurement } => Some(measurement),
            PairOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PairOutcome::Failed { error } => Some(error),
            PairOutcome::Measured { .. } => None,
        }
    }
}

/// One row of the throughput table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
    /// Codec name or `gzip`.
    pub target: String,
    pub operation: Operation,
    /// Σops / Σelapsed, absent for failed pairs.
    pub ops_per_sec: Option<f64>,
    pub outcome: PairOutcome,
}

impl PairReport {
    pub fn new(pair: Pair, outcome: PairOutcome) -> Self {
        Self {
            target: pair.target.name().to_string(),
            operation: pair.operation,
            ops_per_sec: outcome.measurement().map(Measurement::ops_per_sec),
            outcome,
        }
    }

    pub fn total_ops(&self) -> u64 {
        self.outcome.measurement().map_or(0, Measurement::total_ops)
    }

    pub fn iterations(&self) -> usize {
        self.outcome.measurement().map_or(0, Measurement::iterations)
    }
}

/// Protocol parameters echoed into the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolSummary {
    pub warmup_iterations: u32,
    pub warmup_duration_ms: u64,
    pub measurement_iterations: u32,
    pub measurement_duration_ms: u64,
    pub forks: u32,
    pub parallel: bool,
}

impl From<&RunConfig> for ProtocolSummary {
    fn from(config: &RunConfig) -> Self {
        Self {
            warmup_iterations: config.warmup_iterations,
            warmup_duration_ms: config.warmup_duration.as_millis() as u64,
            measurement_iterations: config.measurement_iterations,
            measurement_duration_ms: config.measurement_duration.as_millis() as u64,
            forks: config.forks,
            parallel: config.parallel,
        }
    }
}

/// Complete output of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Fixture path as given.
    pub fixture: String,
    pub protocol: ProtocolSummary,
    /// Encoded sizes, JSON first.
    pub sizes: Vec<SizeRow>,
    /// Pairs in plan order.
    pub results: Vec<PairReport>,
}

impl RunReport {
    /// Number of failed pairs.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_failed()).count()
    }

    /// Looks up a pair by target name and operation.
    pub fn find(&self, target: &str, operation: Operation) -> Option<&PairReport> {
        self.results
            .iter()
            .find(|r| r.target == target && r.operation == operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IterationSample;
    use crate::harness::Target;
    use std::time::Duration;
    use wirebench_codecs::CodecKind;

    fn measured(ops: u64) -> PairOutcome {
        let mut measurement = Measurement::new();
        measurement.push(IterationSample {
            ops,
            elapsed: Duration::from_secs(1),
        });
        PairOutcome::Measured { measurement }
    }

    fn failed(msg: &str) -> PairOutcome {
        PairOutcome::Failed {
            error: msg.to_string(),
        }
    }

    #[test]
    fn test_merge_sums_samples() {
        let merged = measured(100).merge(measured(300));
        let m = merged.measurement().unwrap();
        assert_eq!(m.total_ops(), 400);
        assert!((m.ops_per_sec() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_failure_wins() {
        assert_eq!(measured(1).merge(failed("b")).error(), Some("b"));
        assert_eq!(failed("a").merge(measured(1)).error(), Some("a"));
        assert_eq!(failed("a").merge(failed("b")).error(), Some("a"));
    }

    #[test]
    fn test_pair_report() {
        let pair = Pair {
            target: Target::Codec(CodecKind::Cbor),
            operation: Operation::Decode,
        };
        let report = PairReport::new(pair, measured(50));
        assert_eq!(report.target, "cbor");
        assert_eq!(report.total_ops(), 50);
        assert_eq!(report.iterations(), 1);
        assert!((report.ops_per_sec.unwrap() - 50.0).abs() < 1e-9);

        let report = PairReport::new(pair, failed("boom"));
        assert!(report.ops_per_sec.is_none());
        assert_eq!(report.total_ops(), 0);
    }

    #[test]
    fn test_outcome_serialization_tag() {
        let json = serde_json::to_string(&failed("boom")).unwrap();
        assert_eq!(json, r#"{"status":"failed","error":"boom"}"#);
    }
}
