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

//! `proptest` strategies for trees.
//!
//! Keys are lowercase identifiers and values avoid every character with a
//! meaning in the text encodings (quotes, backslashes, braces, `=`, `,`,
//! `/`), so the generated trees survive encode/decode unchanged.

use proptest::prelude::*;
use proptree_core::Tree;

/// A key safe for every encoding.
pub fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

/// A scalar value safe for every encoding.
pub fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ._:-]{0,10}"
}

/// Trees with repeatable keys and possibly empty internal nodes.
pub fn tree() -> impl Strategy<Value = Tree> {
    let node = value().prop_map(Tree::Leaf).prop_recursive(3, 32, 4, |inner| {
        prop::collection::vec((key(), inner), 0..4)
            .prop_map(|pairs| pairs.into_iter().collect::<Tree>())
    });
    prop::collection::vec((key(), node), 0..5).prop_map(|pairs| pairs.into_iter().collect::<Tree>())
}

/// Trees whose sibling keys are unique and whose internal nodes are never
/// empty, the shape a flat path listing can reproduce.
pub fn unique_tree() -> impl Strategy<Value = Tree> {
    let node = value().prop_map(Tree::Leaf).prop_recursive(3, 32, 4, |inner| {
        prop::collection::btree_map(key(), inner, 1..4)
            .prop_map(|pairs| pairs.into_iter().collect::<Tree>())
    });
    prop::collection::btree_map(key(), node, 0..5).prop_map(|pairs| pairs.into_iter().collect::<Tree>())
}
