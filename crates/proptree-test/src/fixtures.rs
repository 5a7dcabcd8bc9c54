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

//! Canonical test trees.

use crate::FixtureList;
use proptree_core::Tree;

/// Returns all fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("flat", flat),
        ("config", config),
        ("array", array),
        ("deep", deep),
    ]
}

/// `a="1",b="2"`
pub fn flat() -> Tree {
    vec![("a", Tree::leaf("1")), ("b", Tree::leaf("2"))]
        .into_iter()
        .collect()
}

/// A small configuration with one nested section.
pub fn config() -> Tree {
    let mut tree = Tree::new();
    let server = tree.push("server", Tree::new());
    server.push("host", Tree::leaf("localhost"));
    server.push("port", Tree::leaf("8080"));
    tree.push("debug", Tree::leaf("true"));
    tree
}

/// `x` holding two unnamed (array) children.
pub fn array() -> Tree {
    let mut tree = Tree::new();
    let x = tree.push("x", Tree::new());
    x.push("", Tree::leaf("first"));
    x.push("", Tree::leaf("second"));
    tree
}

/// Four levels of nesting: `a/b/c/d="leaf"`.
pub fn deep() -> Tree {
    let mut tree = Tree::new();
    tree.push("a", Tree::new())
        .push("b", Tree::new())
        .push("c", Tree::new())
        .push("d", Tree::leaf("leaf"));
    tree
}
