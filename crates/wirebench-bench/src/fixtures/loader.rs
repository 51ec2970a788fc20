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

//! Fixture file loading utilities.
//!
//! The benchmark fixture is a single JSON document. The bundled fixtures
//! live in the crate's `fixtures/` directory; any other path can be passed
//! explicitly.

use crate::error::{BenchError, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use wirebench_core::{parse_slice, Document};

/// File name of the bundled default fixture.
pub const DEFAULT_FIXTURE: &str = "generated.json";

/// Directory holding the bundled fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Path of the bundled default fixture.
pub fn default_fixture_path() -> PathBuf {
    fixtures_dir().join(DEFAULT_FIXTURE)
}

/// Reads and parses a fixture.
///
/// # Errors
///
/// - [`BenchError::ResourceUnavailable`] if the file cannot be opened or read
/// - [`BenchError::MalformedFixture`] if it is not valid JSON text
pub fn load_fixture(path: &Path) -> Result<Document> {
    let bytes = read_fixture(path)?;
    Ok(parse_slice(&bytes)?)
}

fn read_fixture(path: &Path) -> Result<Vec<u8>> {
    let unavailable = |e: std::io::Error| BenchError::ResourceUnavailable {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut file = File::open(path).map_err(unavailable)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(unavailable)?;
    Ok(bytes)
}

/// Lists the bundled fixtures.
///
/// # Returns
///
/// Sorted file stems of every `*.json` file in [`fixtures_dir`].
pub fn list_fixtures() -> Vec<String> {
    let mut names = Vec::new();

    if let Ok(entries) = std::fs::read_dir(fixtures_dir()) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
    }

    names.sort();
    names
}
