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

//! Policies for repeated paths in path-value input.

use proptree_core::{Path, Tree, TreeError, TreeResult};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// How a path-value decode treats a path that was already assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConflictPolicy {
    /// Later assignments overwrite earlier leaves; structure is otherwise
    /// additive.
    #[default]
    NoCheck,
    /// Like `NoCheck`, but an internal node at the target path is replaced
    /// by the new leaf.
    TakeLast,
    /// The same path text appearing twice in one input is an error.
    UniqueInput,
    /// Assigning to a path that already exists in the tree is an error.
    NoOverwrite,
}

impl ConflictPolicy {
    fn as_str(self) -> &'static str {
        match self {
            ConflictPolicy::NoCheck => "no-check",
            ConflictPolicy::TakeLast => "take-last",
            ConflictPolicy::UniqueInput => "unique-input",
            ConflictPolicy::NoOverwrite => "no-overwrite",
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictPolicy {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no-check" => Ok(ConflictPolicy::NoCheck),
            "take-last" => Ok(ConflictPolicy::TakeLast),
            "unique-input" => Ok(ConflictPolicy::UniqueInput),
            "no-overwrite" => Ok(ConflictPolicy::NoOverwrite),
            _ => Err(TreeError::malformed(
                "expected one of no-check, take-last, unique-input, no-overwrite",
                s,
            )),
        }
    }
}

/// Applies one `path=value` assignment to a tree.
///
/// A filter lives for exactly one decode call; any state it keeps is
/// scoped to that call.
pub(crate) trait PathFilter {
    fn put(&mut self, tree: &mut Tree, raw: &str, path: &Path, value: String) -> TreeResult<()>;
}

pub(crate) struct NoCheck;

impl PathFilter for NoCheck {
    fn put(&mut self, tree: &mut Tree, _raw: &str, path: &Path, value: String) -> TreeResult<()> {
        tree.put(path, value);
        Ok(())
    }
}

pub(crate) struct TakeLast;

impl PathFilter for TakeLast {
    fn put(&mut self, tree: &mut Tree, _raw: &str, path: &Path, value: String) -> TreeResult<()> {
        match tree.get_path_mut(path) {
            Some(node) => *node = Tree::Leaf(value),
            None => {
                tree.put(path, value);
            }
        }
        Ok(())
    }
}

pub(crate) struct NoOverwrite;

impl PathFilter for NoOverwrite {
    fn put(&mut self, tree: &mut Tree, raw: &str, path: &Path, value: String) -> TreeResult<()> {
        if tree.get_path(path).is_some() {
            return Err(TreeError::conflict(raw, "already in the tree"));
        }
        tree.put(path, value);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct UniqueInput {
    seen: HashSet<String>,
}

impl PathFilter for UniqueInput {
    fn put(&mut self, tree: &mut Tree, raw: &str, path: &Path, value: String) -> TreeResult<()> {
        if !self.seen.insert(raw.to_string()) {
            return Err(TreeError::conflict(raw, "is not unique"));
        }
        tree.put(path, value);
        Ok(())
    }
}
