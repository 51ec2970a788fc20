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

//! Measurement primitives.
//!
//! A measured iteration runs one operation repeatedly until its deadline
//! passes, with a plain counter and an `Instant` check after every call.
//! Throughput is reduced as total operations over total elapsed time.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Operation count and wall time of one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IterationSample {
    /// Completed operations.
    pub ops: u64,
    /// Elapsed wall time.
    pub elapsed: Duration,
}

impl IterationSample {
    /// Operations per second for this iteration alone.
    pub fn ops_per_sec(&self) -> f64 {
        throughput(self.ops, self.elapsed)
    }
}

/// Runs `op` until `duration` has elapsed.
///
/// At least one call is always made, so a zero duration performs exactly one
/// operation. The first error stops the iteration and is returned.
pub fn run_iteration<F, E>(duration: Duration, mut op: F) -> Result<IterationSample, E>
where
    F: FnMut() -> Result<(), E>,
{
    let start = Instant::now();
    // A deadline past the clock's range never expires.
    let deadline = start.checked_add(duration);
    let mut ops = 0u64;
    loop {
        op()?;
        ops += 1;
        if deadline.map_or(false, |d| Instant::now() >= d) {
            break;
        }
    }
    Ok(IterationSample {
        ops,
        elapsed: start.elapsed(),
    })
}

/// Accumulated samples of one pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    /// Measured iterations, in order, across all merged forks.
    pub samples: Vec<IterationSample>,
}

impl Measurement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: IterationSample) {
        self.samples.push(sample);
    }

    /// Appends another measurement's samples (fork merge).
    pub fn merge(&mut self, other: Measurement) {
        self.samples.extend(other.samples);
    }

    /// Σops across all samples.
    pub fn total_ops(&self) -> u64 {
        self.samples.iter().map(|s| s.ops).sum()
    }

    /// Σelapsed across all samples.
    pub fn total_elapsed(&self) -> Duration {
        self.samples.iter().map(|s| s.elapsed).sum()
    }

    pub fn iterations(&self) -> usize {
        self.samples.len()
    }

    /// Σops / Σelapsed, in operations per second.
    pub fn ops_per_sec(&self) -> f64 {
        throughput(self.total_ops(), self.total_elapsed())
    }

    /// Mean wall time of a single operation.
    pub fn mean_op_time(&self) -> Duration {
        let ops = self.total_ops();
        if ops == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.total_elapsed().as_nanos() / u128::from(ops)) as u64)
    }

    /// Slowest and fastest per-iteration throughput.
    pub fn ops_per_sec_range(&self) -> Option<(f64, f64)> {
        let mut rates = self.samples.iter().map(IterationSample::ops_per_sec);
        let first = rates.next()?;
        Some(rates.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r))))
    }
}

fn throughput(ops: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        ops as f64 / secs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ops: u64, millis: u64) -> IterationSample {
        IterationSample {
            ops,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn test_zero_duration_runs_once() {
        let mut calls = 0;
        let s = run_iteration(Duration::ZERO, || {
            calls += 1;
            Ok::<(), ()>(())
        })
        .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(s.ops, 1);
    }

    #[test]
    fn test_iteration_respects_deadline() {
        let s = run_iteration(Duration::from_millis(20), || Ok::<(), ()>(())).unwrap();
        assert!(s.ops > 1);
        assert!(s.elapsed >= Duration::from_millis(20));
    }

    #[test]
    fn test_error_stops_iteration() {
        let mut calls = 0;
        let err = run_iteration(Duration::from_secs(10), || {
            calls += 1;
            if calls == 3 {
                Err("boom")
            } else {
                Ok(())
            }
        })
        .unwrap_err();
        assert_eq!(err, "boom");
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_unrepresentable_deadline_does_not_panic() {
        let mut calls = 0;
        let err = run_iteration(Duration::MAX, || {
            calls += 1;
            if calls == 2 {
                Err("stop")
            } else {
                Ok(())
            }
        })
        .unwrap_err();
        assert_eq!(err, "stop");
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_throughput_is_sum_over_sum() {
        let mut m = Measurement::new();
        m.push(sample(100, 1_000));
        m.push(sample(300, 1_000));
        assert_eq!(m.total_ops(), 400);
        assert_eq!(m.total_elapsed(), Duration::from_secs(2));
        assert!((m.ops_per_sec() - 200.0).abs() < 1e-9);
        assert_eq!(m.ops_per_sec_range(), Some((100.0, 300.0)));
    }

    #[test]
    fn test_merge() {
        let mut a = Measurement::new();
        a.push(sample(10, 100));
        let mut b = Measurement::new();
        b.push(sample(30, 100));
        a.merge(b);
        assert_eq!(a.iterations(), 2);
        assert_eq!(a.total_ops(), 40);
        assert_eq!(a.mean_op_time(), Duration::from_millis(5));
    }

    #[test]
    fn test_empty_measurement() {
        let m = Measurement::new();
        assert_eq!(m.ops_per_sec(), 0.0);
        assert_eq!(m.mean_op_time(), Duration::ZERO);
        assert!(m.ops_per_sec_range().is_none());
    }
}
