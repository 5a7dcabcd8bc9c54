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

//! Writing records into a tree.

use crate::{Bind, Scalar};
use proptree_core::{Element, Path, Tree, TreeResult};

/// Writes [`Bind`] values into a tree, tracking the current path.
///
/// With a branch set, only fields on the branch are visited: the branch's
/// ancestors (so the walk can reach it) and everything below it. Other
/// fields are skipped without being written.
pub struct ToTree<'a> {
    tree: &'a mut Tree,
    path: Path,
    branch: Path,
}

impl<'a> ToTree<'a> {
    /// Write at the root of `tree`.
    pub fn new(tree: &'a mut Tree) -> Self {
        Self::with_root(tree, Path::new())
    }

    /// Write below `root`.
    pub fn with_root(tree: &'a mut Tree, root: Path) -> Self {
        Self {
            tree,
            branch: root.clone(),
            path: root,
        }
    }

    /// Limit writing to `branch`, given relative to the root.
    pub fn with_branch(mut self, branch: &Path) -> Self {
        self.branch = self.path.concat(branch);
        self
    }

    /// The path of the node being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if the current path is an ancestor or descendant of the branch,
    /// or equal to it.
    pub fn on_branch(&self) -> bool {
        self.path <= self.branch || self.branch <= self.path
    }

    /// Write `value` at the current node.
    pub fn bind<T: Bind>(&mut self, value: &T) -> TreeResult<()> {
        value.bind_to("", self)
    }

    /// Store `value` as the leaf at `name`.
    pub fn scalar<T: Scalar>(&mut self, name: &str, value: &T) -> TreeResult<()> {
        self.descend(name, |to| {
            to.tree.put(&to.path, value.to_text());
            Ok(())
        })
    }

    /// Make sure the current node exists, so an empty record or sequence
    /// still leaves its key behind.
    pub fn ensure(&mut self) {
        self.tree.ensure_path(&self.path);
    }

    /// Run `f` on the child `name`, or on the current node if `name` is
    /// empty. Nothing happens off the branch.
    pub fn descend(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Self) -> TreeResult<()>,
    ) -> TreeResult<()> {
        if name.is_empty() {
            return self.visit(f);
        }
        self.path.push(name);
        let result = self.visit(f);
        self.path.pop();
        result
    }

    /// Like [`descend`](Self::descend), for an explicit element such as an
    /// array position.
    pub fn descend_element(
        &mut self,
        element: Element,
        f: impl FnOnce(&mut Self) -> TreeResult<()>,
    ) -> TreeResult<()> {
        self.path.push_element(element);
        let result = self.visit(f);
        self.path.pop();
        result
    }

    fn visit(&mut self, f: impl FnOnce(&mut Self) -> TreeResult<()>) -> TreeResult<()> {
        if self.on_branch() {
            f(self)
        } else {
            Ok(())
        }
    }
}
