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

//! Console reporter for benchmark results.
//!
//! Formats and prints the size and throughput tables to stdout.

use crate::reporters::types::{RunReport, SizeRow};
use std::fmt::Write;

/// Renders the size table.
pub fn format_sizes(rows: &[SizeRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {:>10} {:>9}", "FORMAT", "BYTES", "VS JSON");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<18} {:>10} {:>8.3}x{}",
            row.format,
            row.bytes,
            row.ratio_vs_json,
            if row.flagged { "  [larger than json]" } else { "" }
        );
    }
    out
}

/// Renders the throughput table.
pub fn format_throughput(report: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<12} {:>16} {:>10} {:>8}",
        "TARGET", "OPERATION", "OPS/SEC", "OPS", "ITERS"
    );
    let _ = writeln!(out, "{}", "-".repeat(60));
    for result in &report.results {
        match (result.ops_per_sec, result.outcome.error()) {
            (Some(rate), _) => {
                let _ = writeln!(
                    out,
                    "{:<10} {:<12} {:>16.1} {:>10} {:>8}",
                    result.target,
                    result.operation.as_str(),
                    rate,
                    result.total_ops(),
                    result.iterations()
                );
            }
            (None, error) => {
                let _ = writeln!(
                    out,
                    "{:<10} {:<12} {:>16} FAILED: {}",
                    result.target,
                    result.operation.as_str(),
                    "-",
                    error.unwrap_or("unknown error")
                );
            }
        }
    }
    out
}

/// Prints the size table.
pub fn print_sizes(rows: &[SizeRow]) {
    println!("\n{}", "=".repeat(60));
    println!("ENCODED SIZES");
    println!("{}", "=".repeat(60));
    print!("{}", format_sizes(rows));
}

/// Prints the full run report.
pub fn print_report(report: &RunReport) {
    println!("\n{}", "=".repeat(60));
    println!("WIREBENCH REPORT");
    println!("{}", "=".repeat(60));
    println!("Fixture: {}", report.fixture);
    println!(
        "Protocol: {} x {}ms warm-up, {} x {}ms measured, {} fork(s){}",
        report.protocol.warmup_iterations,
        report.protocol.warmup_duration_ms,
        report.protocol.measurement_iterations,
        report.protocol.measurement_duration_ms,
        report.protocol.forks,
        if report.protocol.parallel { " in parallel" } else { "" }
    );

    print_sizes(&report.sizes);

    println!("\n{}", "-".repeat(60));
    println!("THROUGHPUT:");
    println!("{}", "-".repeat(60));
    print!("{}", format_throughput(report));

    if report.failure_count() > 0 {
        println!("\nFailures: {}", report.failure_count());
    }
    println!("{}\n", "=".repeat(60));
}
