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

//! Error types for benchmark setup and execution.
//!
//! Setup errors (missing or malformed fixture, invalid configuration) are
//! fatal for the run. Codec and compression errors raised while measuring
//! abort only the affected pair and are recorded in the report.

use std::path::PathBuf;
use thiserror::Error;
use wirebench_codecs::{CodecError, CompressionError};
use wirebench_core::MalformedInputError;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Debug, Error)]
pub enum BenchError {
    /// The fixture file could not be opened or read
    #[error("fixture '{}' unavailable: {message}", path.display())]
    ResourceUnavailable {
        /// Path that was tried
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },

    /// The fixture is not valid canonical text
    #[error("malformed fixture: {0}")]
    MalformedFixture(#[from] MalformedInputError),

    /// A codec failed during setup or measurement
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The compressor failed during setup or measurement
    #[error("gzip {0}")]
    Compression(#[from] CompressionError),

    /// A codec or the compressor did not reproduce the fixture during setup
    #[error("{target} {form} round trip produced a different document")]
    RoundTripMismatch {
        /// Codec name or `gzip`
        target: String,
        /// Which rendering was checked
        form: &'static str,
    },

    /// The target has no such operation
    #[error("{target} does not support {operation}")]
    UnsupportedOperation {
        /// Codec name or `gzip`
        target: String,
        /// Operation name
        operation: String,
    },

    /// The target failed setup and cannot be measured
    #[error("{target} was not set up")]
    TargetUnavailable {
        /// Codec name or `gzip`
        target: String,
    },

    /// Invalid configuration parameter
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Writing a report failed
    #[error("failed to export report to '{}': {message}", path.display())]
    Export {
        /// Destination path
        path: PathBuf,
        /// Underlying error message
        message: String,
    },
}

impl BenchError {
    pub(crate) fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = BenchError::invalid_config("forks", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration parameter 'forks': must be at least 1"
        );
    }

    #[test]
    fn test_unsupported_operation_display() {
        let err = BenchError::UnsupportedOperation {
            target: "json".to_string(),
            operation: "encode-text".to_string(),
        };
        assert_eq!(err.to_string(), "json does not support encode-text");
        assert!(!matches!(err, BenchError::InvalidConfig { .. }));
    }

    #[test]
    fn test_resource_unavailable_display() {
        let err = BenchError::ResourceUnavailable {
            path: PathBuf::from("fixtures/missing.json"),
            message: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fixtures/missing.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_codec_error_is_transparent() {
        let codec_err = CodecError::decode(
            "cbor",
            wirebench_codecs::CodecErrorKind::Truncated,
            "unexpected end of input",
        );
        let expected = codec_err.to_string();
        assert_eq!(BenchError::from(codec_err).to_string(), expected);
    }
}
