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

//! Error types for tree conversions.

use std::fmt;
use std::io;
use thiserror::Error;

/// The kind of error that occurred during a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeErrorKind {
    /// Text that does not follow the expected grammar.
    MalformedInput,
    /// A required path is absent from the tree.
    PathNotFound,
    /// A repeated path rejected by the active conflict policy.
    ConflictViolation,
    /// None of the candidate formats could read the input.
    FormatUndetermined,
    /// Stream read, write or seek failure.
    Io,
    /// A scalar text that cannot be parsed into the requested type.
    InvalidValue,
    /// A tree that cannot be expressed in the requested output format.
    Unrepresentable,
}

impl fmt::Display for TreeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => write!(f, "MalformedInput"),
            Self::PathNotFound => write!(f, "PathNotFound"),
            Self::ConflictViolation => write!(f, "ConflictViolation"),
            Self::FormatUndetermined => write!(f, "FormatUndetermined"),
            Self::Io => write!(f, "IOError"),
            Self::InvalidValue => write!(f, "InvalidValue"),
            Self::Unrepresentable => write!(f, "Unrepresentable"),
        }
    }
}

/// An error raised by a single conversion call.
///
/// Errors are local to the call that produced them and are never retried.
/// `context` holds the offending input fragment or tree path when there is
/// one, so callers can report it without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TreeError {
    /// The kind of error.
    pub kind: TreeErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Offending fragment or path, if any.
    pub context: Option<String>,
}

impl TreeError {
    /// Create a new error.
    pub fn new(kind: TreeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn malformed(message: impl Into<String>, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        Self::new(
            TreeErrorKind::MalformedInput,
            format!("{}; got \"{}\"", message.into(), fragment),
        )
        .with_context(fragment)
    }

    pub fn path_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(TreeErrorKind::PathNotFound, format!("key not found: {}", path))
            .with_context(path)
    }

    pub fn conflict(path: impl Into<String>, reason: &str) -> Self {
        let path = path.into();
        Self::new(
            TreeErrorKind::ConflictViolation,
            format!("input path '{}' {}", path, reason),
        )
        .with_context(path)
    }

    pub fn format_undetermined() -> Self {
        Self::new(TreeErrorKind::FormatUndetermined, "failed to guess format")
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(TreeErrorKind::Io, message)
    }

    pub fn invalid_value(path: impl Into<String>, text: &str, reason: impl fmt::Display) -> Self {
        let path = path.into();
        Self::new(
            TreeErrorKind::InvalidValue,
            format!("cannot convert \"{}\" at '{}': {}", text, path, reason),
        )
        .with_context(path)
    }

    pub fn unrepresentable(message: impl Into<String>) -> Self {
        Self::new(TreeErrorKind::Unrepresentable, message)
    }

    /// True for every failure caused by the content itself rather than by
    /// the underlying stream.
    pub fn is_structural(&self) -> bool {
        self.kind != TreeErrorKind::Io
    }
}

impl From<io::Error> for TreeError {
    fn from(e: io::Error) -> Self {
        Self::io(e.to_string())
    }
}

/// Result type for tree conversions.
pub type TreeResult<T> = Result<T, TreeError>;
