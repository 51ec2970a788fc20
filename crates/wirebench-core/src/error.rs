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

//! Error types for canonical text parsing.

use std::fmt;
use thiserror::Error;

/// The category of a malformed-input failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// Unexpected token, invalid literal or escape.
    Syntax,
    /// Input ended inside a string or structure.
    Eof,
    /// Well-formed text whose value the model cannot hold
    /// (e.g. an integer wider than 64 bits).
    Data,
    /// Input is not valid UTF-8.
    Encoding,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Eof => write!(f, "EofError"),
            Self::Data => write!(f, "DataError"),
            Self::Encoding => write!(f, "EncodingError"),
        }
    }
}

/// Canonical text could not be parsed into a document.
///
/// No partial document is ever returned alongside this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}: {message}")]
pub struct MalformedInputError {
    /// The kind of error.
    pub kind: MalformedKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when unknown).
    pub line: usize,
    /// Column number (1-based, 0 when unknown).
    pub column: usize,
}

impl MalformedInputError {
    /// Create a new error.
    pub fn new(kind: MalformedKind, message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
        }
    }
}

impl From<serde_json::Error> for MalformedInputError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match err.classify() {
            Category::Syntax => MalformedKind::Syntax,
            Category::Eof => MalformedKind::Eof,
            Category::Data => MalformedKind::Data,
            Category::Io => MalformedKind::Encoding,
        };
        // serde_json appends " at line X column Y"; the position is kept in
        // dedicated fields instead.
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        Self::new(kind, message, err.line(), err.column())
    }
}

/// Result type for canonical text parsing.
pub type ParseResult<T> = Result<T, MalformedInputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(MalformedKind::Syntax.to_string(), "SyntaxError");
        assert_eq!(MalformedKind::Eof.to_string(), "EofError");
    }

    #[test]
    fn test_error_display() {
        let err = MalformedInputError::new(MalformedKind::Syntax, "expected value", 2, 7);
        assert_eq!(err.to_string(), "SyntaxError at line 2, column 7: expected value");
    }

    #[test]
    fn test_from_serde_json_strips_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1, }").unwrap_err();
        let err = MalformedInputError::from(json_err);
        assert_eq!(err.kind, MalformedKind::Syntax);
        assert_eq!(err.line, 1);
        assert!(err.column > 0);
        assert!(!err.message.contains(" at line "));
    }
}
