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

//! Benchmark harness.
//!
//! # Modules
//!
//! - `plan`: Targets, operations and the pair planner
//! - `state`: Per-fork setup and single-operation execution
//! - `runner`: Warm-up/measurement protocol and fork merging

pub mod plan;
pub mod runner;
pub mod state;

pub use plan::{plan_operations, Operation, Pair, Target};
pub use runner::{measure_pair, BenchmarkRunner};
pub use state::BenchState;
