// Dweve PropTree - Ordered Property Trees and Text Encodings
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

//! Structured error types for the PropTree CLI.

use proptree::TreeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use proptree_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Reading standard input failed.
    #[error("failed to read stdin: {0}")]
    Stdin(String),

    /// Writing standard output failed.
    #[error("failed to write to stdout: {0}")]
    Output(String),

    /// Decoding or encoding the tree failed.
    #[error(transparent)]
    Conversion(#[from] TreeError),

    /// An argument could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message() {
        let err = CliError::io_error(
            "missing.json",
            io::Error::new(io::ErrorKind::NotFound, "No such file"),
        );
        assert_eq!(err.to_string(), "I/O error for 'missing.json': No such file");
    }

    #[test]
    fn test_conversion_error_is_transparent() {
        let err = CliError::from(TreeError::format_undetermined());
        assert_eq!(err.to_string(), "FormatUndetermined: failed to guess format");
    }
}
