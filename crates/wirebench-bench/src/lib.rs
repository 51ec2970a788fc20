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

//! Wirebench Benchmark Harness
//!
//! Measures how fast and how compactly each wirebench codec handles one
//! representative document.
//!
//! ## Protocol
//!
//! Every (target, operation) pair gets a warm-up phase whose results are
//! discarded, then a number of fixed-length measured iterations. Each
//! iteration counts completed operations against a wall-clock deadline;
//! throughput is Σops / Σelapsed. Independent forks repeat the whole run
//! with fresh state and their samples are summed.
//!
//! ## Usage
//!
//! Run the harness:
//! ```bash
//! cargo run --release --package wirebench-bench -- run --quick
//! ```
//!
//! Run the criterion benches:
//! ```bash
//! cargo bench --package wirebench-bench
//! ```

pub mod core;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod reporters;

pub use crate::core::{parse_duration, RunConfig};
pub use error::{BenchError, Result};
pub use fixtures::{default_fixture_path, list_fixtures, load_fixture};
pub use harness::{plan_operations, BenchState, BenchmarkRunner, Operation, Pair, Target};
pub use reporters::{PairOutcome, PairReport, RunReport, SizeRow};
