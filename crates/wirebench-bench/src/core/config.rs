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

//! Run configuration.
//!
//! Provides the warm-up/measurement protocol parameters, the fork count and
//! the codec/operation filters for a benchmark run.

use crate::error::{BenchError, Result};
use crate::harness::Operation;
use std::path::PathBuf;
use std::time::Duration;
use wirebench_codecs::CodecKind;

/// Default number of warm-up iterations per pair.
pub const DEFAULT_WARMUP_ITERATIONS: u32 = 20;

/// Default length of one warm-up iteration.
pub const DEFAULT_WARMUP_DURATION: Duration = Duration::from_secs(3);

/// Default number of measured iterations per pair.
pub const DEFAULT_MEASUREMENT_ITERATIONS: u32 = 10;

/// Default length of one measured iteration.
pub const DEFAULT_MEASUREMENT_DURATION: Duration = Duration::from_secs(3);

/// Default number of independent forks.
pub const DEFAULT_FORKS: u32 = 1;

/// Longest accepted warm-up or measured iteration.
pub const MAX_ITERATION_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

/// Benchmark run configuration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use wirebench_bench::core::config::RunConfig;
///
/// let config = RunConfig::default()
///     .with_warmup(2, Duration::from_millis(50))
///     .with_measurement(3, Duration::from_millis(100))
///     .with_forks(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Warm-up iterations per pair; results are discarded.
    pub warmup_iterations: u32,
    /// Length of one warm-up iteration.
    pub warmup_duration: Duration,
    /// Measured iterations per pair.
    pub measurement_iterations: u32,
    /// Length of one measured iteration. Zero means one operation.
    pub measurement_duration: Duration,
    /// Independent repetitions of the whole run.
    pub forks: u32,
    /// Run forks on a rayon pool instead of sequentially.
    pub parallel: bool,
    /// Restrict the run to these codecs. Empty means all.
    pub codecs: Vec<CodecKind>,
    /// Restrict the run to these operations. Empty means all.
    pub operations: Vec<Operation>,
    /// Fixture override. `None` uses the bundled fixture.
    pub fixture: Option<PathBuf>,
}

impl RunConfig {
    /// Short protocol for smoke runs: one 100ms warm-up, three 200ms
    /// measurements.
    pub fn quick() -> Self {
        Self::default()
            .with_warmup(1, Duration::from_millis(100))
            .with_measurement(3, Duration::from_millis(200))
    }

    /// Sets the warm-up protocol.
    pub fn with_warmup(mut self, iterations: u32, duration: Duration) -> Self {
        self.warmup_iterations = iterations;
        self.warmup_duration = duration;
        self
    }

    /// Sets the measurement protocol.
    pub fn with_measurement(mut self, iterations: u32, duration: Duration) -> Self {
        self.measurement_iterations = iterations;
        self.measurement_duration = duration;
        self
    }

    /// Sets the fork count.
    pub fn with_forks(mut self, forks: u32) -> Self {
        self.forks = forks;
        self
    }

    /// Runs forks in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Restricts the run to the given codecs.
    pub fn with_codecs(mut self, codecs: impl IntoIterator<Item = CodecKind>) -> Self {
        self.codecs = codecs.into_iter().collect();
        self
    }

    /// Restricts the run to the given operations.
    pub fn with_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations = operations.into_iter().collect();
        self
    }

    /// Sets the fixture path.
    pub fn with_fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture = Some(path.into());
        self
    }

    /// Checks the configuration before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] for a zero fork count, zero
    /// measurement iterations, or an iteration longer than
    /// [`MAX_ITERATION_DURATION`].
    pub fn validate(&self) -> Result<()> {
        if self.forks == 0 {
            return Err(BenchError::invalid_config("forks", "must be at least 1"));
        }
        if self.measurement_iterations == 0 {
            return Err(BenchError::invalid_config(
                "measurement_iterations",
                "must be at least 1",
            ));
        }
        check_duration("warmup_duration", self.warmup_duration)?;
        check_duration("measurement_duration", self.measurement_duration)?;
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            warmup_duration: DEFAULT_WARMUP_DURATION,
            measurement_iterations: DEFAULT_MEASUREMENT_ITERATIONS,
            measurement_duration: DEFAULT_MEASUREMENT_DURATION,
            forks: DEFAULT_FORKS,
            parallel: false,
            codecs: Vec::new(),
            operations: Vec::new(),
            fixture: None,
        }
    }
}

fn check_duration(parameter: &str, duration: Duration) -> Result<()> {
    if duration > MAX_ITERATION_DURATION {
        return Err(BenchError::invalid_config(
            parameter,
            format!(
                "{}s exceeds the {}s limit",
                duration.as_secs(),
                MAX_ITERATION_DURATION.as_secs()
            ),
        ));
    }
    Ok(())
}

/// Parses a duration given as `<n>ms`, `<n>s` or bare seconds.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] naming `parameter` when the text is
/// not a non-negative integer with an optional unit.
pub fn parse_duration(parameter: &str, text: &str) -> Result<Duration> {
    let text = text.trim();
    let (digits, to_duration): (&str, fn(u64) -> Duration) =
        if let Some(ms) = text.strip_suffix("ms") {
            (ms, Duration::from_millis)
        } else if let Some(s) = text.strip_suffix('s') {
            (s, Duration::from_secs)
        } else {
            (text, Duration::from_secs)
        };
    digits
        .trim()
        .parse::<u64>()
        .map(to_duration)
        .map_err(|_| {
            BenchError::invalid_config(
                parameter,
                format!("'{}' is not a duration (expected e.g. 500ms, 3s or 3)", text),
            )
        })
}
