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

//! Tree to path-value text conversion

use crate::PathValueConfig;
use proptree_core::{Element, Path, Tree, TreeResult};
use std::io::Write;

/// Convert a tree into path-value text, one assignment per leaf.
///
/// Leaves are visited in document order and written as `path="value"`,
/// with `config.root` prepended to every path. Unnamed children are
/// numbered from zero within their parent and rendered per
/// `config.indices`. Empty internal nodes produce no output.
///
/// # Examples
///
/// ```rust
/// use proptree_core::{IndexMode, Tree};
/// use proptree_path_value::{to_path_value, PathValueConfig};
///
/// let list: Tree = vec![("", Tree::leaf("a")), ("", Tree::leaf("b"))].into_iter().collect();
/// let tree: Tree = vec![("x", list)].into_iter().collect();
/// let config = PathValueConfig {
///     indices: IndexMode::WithBrackets,
///     ..PathValueConfig::default()
/// };
/// assert_eq!(to_path_value(&tree, &config), r#"x[0]="a",x[1]="b""#);
/// ```
pub fn to_path_value(tree: &Tree, config: &PathValueConfig) -> String {
    let mut encoder = Encoder {
        config,
        out: String::new(),
        structural: Path::new(),
        display: config.root.clone(),
        first: true,
    };
    match tree {
        Tree::Internal(_) => encoder.node(tree),
        Tree::Leaf(value) if !encoder.display.is_empty() => encoder.emit(value),
        Tree::Leaf(_) => {}
    }
    encoder.out
}

/// Write a tree as path-value text to `writer`.
pub fn to_path_value_writer<W: Write>(
    tree: &Tree,
    mut writer: W,
    config: &PathValueConfig,
) -> TreeResult<()> {
    writer.write_all(to_path_value(tree, config).as_bytes())?;
    Ok(())
}

struct Encoder<'a> {
    config: &'a PathValueConfig,
    out: String,
    /// Keys from the root to the current node.
    structural: Path,
    /// What gets written: root prefix plus keys, with array positions.
    display: Path,
    first: bool,
}

impl Encoder<'_> {
    fn node(&mut self, node: &Tree) {
        match node {
            Tree::Leaf(value) => self.emit(value),
            Tree::Internal(children) => {
                let mut index = 0;
                for (key, child) in children {
                    let element = if key.is_empty() {
                        index += 1;
                        Element::indexed("", index - 1)
                    } else {
                        Element::new(key.clone())
                    };
                    self.structural.push(key.clone());
                    self.display.push_element(element);
                    self.node(child);
                    self.display.pop();
                    self.structural.pop();
                }
            }
        }
    }

    fn emit(&mut self, value: &str) {
        if !self.first {
            self.out.push(self.config.delimiter);
        }
        self.first = false;
        let rendered = self.display.render(self.config.indices, '/');
        tracing::trace!(path = %self.structural, rendered = %rendered, "path-value entry");
        self.out.push_str(&rendered);
        self.out.push(self.config.equal_sign);
        self.out.push('"');
        self.out.push_str(value);
        self.out.push('"');
    }
}
