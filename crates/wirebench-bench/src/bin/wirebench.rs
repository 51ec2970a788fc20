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

//! Wirebench command line interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wirebench_bench::core::config::{
    DEFAULT_FORKS, DEFAULT_MEASUREMENT_ITERATIONS, DEFAULT_WARMUP_ITERATIONS,
};
use wirebench_bench::reporters::{export_json, print_report, print_sizes};
use wirebench_bench::{
    default_fixture_path, list_fixtures, parse_duration, BenchState, BenchmarkRunner, Operation,
    Result, RunConfig,
};
use wirebench_codecs::{Codec, CodecKind};

/// Wirebench - throughput and size of JSON, CBOR, MessagePack, Smile and BSON
///
/// # Examples
///
/// ```bash
/// # Full run with the default protocol
/// wirebench
///
/// # Short run, two codecs, decode only, export results
/// wirebench run --quick --codec cbor --codec msgpack --operation decode --json out.json
///
/// # Encoded sizes of a custom document
/// wirebench sizes --fixture data.json
/// ```
#[derive(Parser)]
#[command(name = "wirebench")]
#[command(author, version, about = "Wire format benchmarks", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Measure encode/decode throughput (default)
    Run(RunArgs),

    /// Print encoded sizes of the fixture
    Sizes {
        /// Fixture document (defaults to the bundled generated.json)
        #[arg(long)]
        fixture: Option<PathBuf>,
    },

    /// List codecs, operations and bundled fixtures
    List,
}

#[derive(Args, Clone)]
struct RunArgs {
    /// Warm-up iterations per pair
    #[arg(long, default_value_t = DEFAULT_WARMUP_ITERATIONS)]
    warmup_iterations: u32,

    /// Length of one warm-up iteration (e.g. 500ms, 3s, 3)
    #[arg(long, default_value = "3s")]
    warmup_duration: String,

    /// Measured iterations per pair
    #[arg(long, default_value_t = DEFAULT_MEASUREMENT_ITERATIONS)]
    measurement_iterations: u32,

    /// Length of one measured iteration (e.g. 500ms, 3s, 3)
    #[arg(long, default_value = "3s")]
    measurement_duration: String,

    /// Independent repetitions with fresh state
    #[arg(long, default_value_t = DEFAULT_FORKS)]
    forks: u32,

    /// Run forks in parallel
    #[arg(long)]
    parallel: bool,

    /// Restrict to a codec (repeatable)
    #[arg(long = "codec", value_name = "NAME")]
    codecs: Vec<CodecKind>,

    /// Restrict to an operation (repeatable)
    #[arg(long = "operation", value_name = "NAME")]
    operations: Vec<Operation>,

    /// Fixture document (defaults to the bundled generated.json)
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Write the report as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Short protocol: 1 x 100ms warm-up, 3 x 200ms measured
    #[arg(
        long,
        conflicts_with_all = [
            "warmup_iterations",
            "warmup_duration",
            "measurement_iterations",
            "measurement_duration",
        ]
    )]
    quick: bool,
}

impl RunArgs {
    fn to_config(&self) -> Result<RunConfig> {
        let mut config = if self.quick {
            RunConfig::quick()
        } else {
            RunConfig::default()
                .with_warmup(
                    self.warmup_iterations,
                    parse_duration("warmup_duration", &self.warmup_duration)?,
                )
                .with_measurement(
                    self.measurement_iterations,
                    parse_duration("measurement_duration", &self.measurement_duration)?,
                )
        };
        config = config
            .with_forks(self.forks)
            .with_parallel(self.parallel)
            .with_codecs(self.codecs.iter().copied())
            .with_operations(self.operations.iter().copied());
        if let Some(path) = &self.fixture {
            config = config.with_fixture(path);
        }
        Ok(config)
    }

    fn execute(&self) -> Result<()> {
        let runner = BenchmarkRunner::new(self.to_config()?)?;
        let report = runner.run()?;
        print_report(&report);
        if let Some(path) = &self.json {
            export_json(&report, path)?;
            tracing::info!(path = %path.display(), "report written");
        }
        Ok(())
    }
}

fn sizes(fixture: Option<PathBuf>) -> Result<()> {
    let path = fixture.unwrap_or_else(default_fixture_path);
    let state = BenchState::setup(&path)?;
    print_sizes(state.size_rows());
    Ok(())
}

fn list() {
    println!("Codecs:");
    for kind in CodecKind::ALL {
        let descriptor = kind.build().descriptor();
        println!(
            "  {:<8} {:<7} {}",
            kind,
            if descriptor.binary { "binary" } else { "text" },
            descriptor.numeric_policy
        );
    }
    println!("  {:<8} {:<7} gzip over json text", "gzip", "bytes");

    println!("\nOperations:");
    for op in Operation::ALL {
        println!("  {}", op);
    }

    println!("\nFixtures:");
    for name in list_fixtures() {
        println!("  {}", name);
    }
}

fn main() -> ExitCode {
    // Initialize logging to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("wirebench=info".parse().expect("valid log directive"))
                .add_directive("wirebench_bench=info".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => cli.run.execute(),
        Some(Command::Run(args)) => args.execute(),
        Some(Command::Sizes { fixture }) => sizes(fixture),
        Some(Command::List) => {
            list();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_config() {
        let cli = Cli::parse_from(["wirebench"]);
        let config = cli.run.to_config().unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::parse_from([
            "wirebench",
            "run",
            "--codec",
            "cbor",
            "--codec",
            "bson",
            "--operation",
            "decode-text",
            "--measurement-duration",
            "250ms",
            "--forks",
            "2",
            "--parallel",
        ]);
        let Some(Command::Run(args)) = cli.command else {
            panic!("expected run subcommand");
        };
        let config = args.to_config().unwrap();
        assert_eq!(config.codecs, vec![CodecKind::Cbor, CodecKind::Bson]);
        assert_eq!(config.operations, vec![Operation::DecodeText]);
        assert_eq!(config.measurement_duration, Duration::from_millis(250));
        assert_eq!(config.forks, 2);
        assert!(config.parallel);
    }

    #[test]
    fn test_quick_flag() {
        let cli = Cli::parse_from(["wirebench", "--quick"]);
        assert_eq!(cli.run.to_config().unwrap(), RunConfig::quick());
    }

    #[test]
    fn test_quick_conflicts_with_protocol_flags() {
        for (flag, value) in [
            ("--measurement-duration", "1s"),
            ("--measurement-iterations", "5"),
            ("--warmup-duration", "1s"),
            ("--warmup-iterations", "0"),
        ] {
            assert!(Cli::try_parse_from(["wirebench", "--quick", flag, value]).is_err(), "{}", flag);
            assert!(
                Cli::try_parse_from(["wirebench", "run", "--quick", flag, value]).is_err(),
                "run {}",
                flag
            );
        }
        assert!(Cli::try_parse_from(["wirebench", "run", "--quick", "--forks", "2"]).is_ok());
    }

    #[test]
    fn test_top_level_flags_conflict_with_subcommand() {
        assert!(Cli::try_parse_from(["wirebench", "--forks", "2", "run"]).is_err());
        assert!(Cli::try_parse_from(["wirebench", "--quick", "sizes"]).is_err());
        assert!(Cli::try_parse_from(["wirebench", "run", "--forks", "2"]).is_ok());
    }

    #[test]
    fn test_smile_codec_flag() {
        let cli = Cli::parse_from(["wirebench", "--codec", "smile"]);
        assert_eq!(cli.run.to_config().unwrap().codecs, vec![CodecKind::Smile]);
    }

    #[test]
    fn test_bad_duration() {
        let cli = Cli::parse_from(["wirebench", "--warmup-duration", "soon"]);
        assert!(cli.run.to_config().is_err());
    }

    #[test]
    fn test_unknown_codec_rejected() {
        assert!(Cli::try_parse_from(["wirebench", "--codec", "avro"]).is_err());
    }
}
