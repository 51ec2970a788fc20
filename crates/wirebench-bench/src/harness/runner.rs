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

//! Benchmark runner: warm-up, measurement and fork merging.

use crate::core::{run_iteration, Measurement, RunConfig};
use crate::error::Result;
use crate::fixtures::default_fixture_path;
use crate::harness::plan::{plan_operations, Pair};
use crate::harness::state::BenchState;
use crate::reporters::types::{PairOutcome, PairReport, ProtocolSummary, RunReport, SizeRow};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcomes of one fork, in plan order.
#[derive(Debug)]
struct ForkResult {
    sizes: Vec<SizeRow>,
    outcomes: Vec<PairOutcome>,
}

/// Runs every planned pair under the configured protocol.
///
/// # Example
///
/// ```no_run
/// use wirebench_bench::core::config::RunConfig;
/// use wirebench_bench::harness::BenchmarkRunner;
///
/// let runner = BenchmarkRunner::new(RunConfig::quick()).unwrap();
/// let report = runner.run().unwrap();
/// println!("{} pairs, {} failed", report.results.len(), report.failure_count());
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    config: RunConfig,
    fixture: PathBuf,
    plan: Vec<Pair>,
}

impl BenchmarkRunner {
    /// Validates the configuration and plans the pairs.
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        let fixture = config.fixture.clone().unwrap_or_else(default_fixture_path);
        let plan = plan_operations(&config.codecs, &config.operations);
        Ok(Self {
            config,
            fixture,
            plan,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn fixture(&self) -> &Path {
        &self.fixture
    }

    /// Pairs to be measured, in report order.
    pub fn plan(&self) -> &[Pair] {
        &self.plan
    }

    /// Runs all forks and merges their results.
    ///
    /// # Errors
    ///
    /// Fails only when a fork cannot set up (missing or malformed fixture).
    /// Codec failures are reported per pair in the returned report.
    pub fn run(&self) -> Result<RunReport> {
        info!(
            fixture = %self.fixture.display(),
            pairs = self.plan.len(),
            forks = self.config.forks,
            parallel = self.config.parallel,
            "starting run"
        );

        let forks: Vec<ForkResult> = if self.config.parallel {
            (0..self.config.forks)
                .into_par_iter()
                .map(|fork| self.run_fork(fork))
                .collect::<Result<_>>()?
        } else {
            (0..self.config.forks)
                .map(|fork| self.run_fork(fork))
                .collect::<Result<_>>()?
        };

        let report = self.merge(forks);
        info!(
            pairs = report.results.len(),
            failed = report.failure_count(),
            "run complete"
        );
        Ok(report)
    }

    fn run_fork(&self, fork: u32) -> Result<ForkResult> {
        debug!(fork, "fork setup");
        let state = BenchState::setup(&self.fixture)?;
        let outcomes = self
            .plan
            .iter()
            .map(|&pair| self.run_pair(&state, pair, fork))
            .collect();
        Ok(ForkResult {
            sizes: state.size_rows().to_vec(),
            outcomes,
        })
    }

    fn run_pair(&self, state: &BenchState, pair: Pair, fork: u32) -> PairOutcome {
        if let Some(error) = state.failure(pair.target) {
            return PairOutcome::Failed {
                error: error.to_string(),
            };
        }

        debug!(fork, %pair, "measuring");
        match measure_pair(state, pair, &self.config) {
            Ok(measurement) => {
                debug!(
                    fork,
                    %pair,
                    ops = measurement.total_ops(),
                    ops_per_sec = measurement.ops_per_sec(),
                    "measured"
                );
                PairOutcome::Measured { measurement }
            }
            Err(e) => {
                warn!(fork, %pair, error = %e, "pair aborted");
                PairOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    fn merge(&self, forks: Vec<ForkResult>) -> RunReport {
        let mut forks = forks.into_iter();
        let (sizes, merged) = match forks.next() {
            Some(first) => {
                let merged = forks.fold(first.outcomes, |acc, fork| {
                    acc.into_iter()
                        .zip(fork.outcomes)
                        .map(|(a, b)| a.merge(b))
                        .collect()
                });
                (first.sizes, merged)
            }
            None => (Vec::new(), Vec::new()),
        };

        RunReport {
            fixture: self.fixture.display().to_string(),
            protocol: ProtocolSummary::from(&self.config),
            sizes,
            results: self
                .plan
                .iter()
                .zip(merged)
                .map(|(&pair, outcome)| PairReport::new(pair, outcome))
                .collect(),
        }
    }
}

/// Warms up, then measures one pair.
///
/// The first error from any iteration aborts the pair.
pub fn measure_pair(state: &BenchState, pair: Pair, config: &RunConfig) -> Result<Measurement> {
    let op = || state.execute(pair.target, pair.operation);

    for _ in 0..config.warmup_iterations {
        run_iteration(config.warmup_duration, op)?;
    }

    let mut measurement = Measurement::new();
    for _ in 0..config.measurement_iterations {
        measurement.push(run_iteration(config.measurement_duration, op)?);
    }
    Ok(measurement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{Operation, Target};
    use std::time::Duration;
    use wirebench_codecs::CodecKind;
    use wirebench_core::parse;

    fn tiny_config() -> RunConfig {
        RunConfig::default()
            .with_warmup(1, Duration::ZERO)
            .with_measurement(2, Duration::ZERO)
    }

    #[test]
    fn test_measure_pair_zero_duration() {
        let state = BenchState::from_document(parse("{}").unwrap());
        let pair = Pair {
            target: Target::Codec(CodecKind::Cbor),
            operation: Operation::Decode,
        };
        let m = measure_pair(&state, pair, &tiny_config()).unwrap();
        assert_eq!(m.iterations(), 2);
        assert_eq!(m.total_ops(), 2);
    }

    #[test]
    fn test_unsupported_pair_fails() {
        let state = BenchState::from_document(parse("{}").unwrap());
        let pair = Pair {
            target: Target::Codec(CodecKind::Json),
            operation: Operation::DecodeText,
        };
        assert!(measure_pair(&state, pair, &tiny_config()).is_err());
    }

    #[test]
    fn test_runner_rejects_invalid_config() {
        assert!(BenchmarkRunner::new(RunConfig::default().with_forks(0)).is_err());
    }

    #[test]
    fn test_runner_plan_follows_filters() {
        let config = tiny_config()
            .with_codecs([CodecKind::MsgPack])
            .with_operations([Operation::Encode]);
        let runner = BenchmarkRunner::new(config).unwrap();
        assert_eq!(runner.plan().len(), 1);
        assert!(runner.fixture().ends_with("generated.json"));
    }
}
