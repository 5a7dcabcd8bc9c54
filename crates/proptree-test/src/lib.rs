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

//! Shared test fixtures for PropTree codecs.
//!
//! - [`fixtures`]: canonical trees used across the codec test suites
//! - [`strategies`]: `proptest` strategies producing trees that every codec
//!   can round-trip
//!
//! ```rust
//! use proptree_test::fixtures;
//!
//! let tree = fixtures::config();
//! assert_eq!(tree.get("debug").and_then(|d| d.value()), Some("true"));
//! ```

pub mod fixtures;
pub mod strategies;

use proptree_core::Tree;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Tree)>;

/// Count every node below the root.
pub fn count_nodes(tree: &Tree) -> usize {
    tree.iter().map(|(_, child)| 1 + count_nodes(child)).sum()
}

/// Count the leaves below the root.
pub fn count_leaves(tree: &Tree) -> usize {
    tree.iter()
        .map(|(_, child)| if child.is_leaf() { 1 } else { count_leaves(child) })
        .sum()
}
