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

//! Reading records out of a tree.

use crate::{Bind, Scalar};
use proptree_core::{Element, Path, Tree, TreeError, TreeResult, XML_ATTRIBUTES, XML_TEXT};
use std::collections::HashMap;

/// Reads [`Bind`] values from a tree, tracking the current path.
///
/// Every step down is undone before [`descend`](Self::descend) returns,
/// whether or not the nested read failed, so sibling fields always start
/// from their parent's path.
pub struct FromTree<'a> {
    tree: &'a Tree,
    path: Path,
    permissive: bool,
}

impl<'a> FromTree<'a> {
    /// Read from the root of `tree`.
    pub fn new(tree: &'a Tree) -> Self {
        Self::with_root(tree, Path::new())
    }

    /// Read from the subtree at `root`.
    pub fn with_root(tree: &'a Tree, root: Path) -> Self {
        Self {
            tree,
            path: root,
            permissive: false,
        }
    }

    /// In permissive mode an absent field is left untouched instead of
    /// failing with `PathNotFound`.
    pub fn permissive(mut self, permissive: bool) -> Self {
        self.permissive = permissive;
        self
    }

    pub fn is_permissive(&self) -> bool {
        self.permissive
    }

    /// The path of the node being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read `value` from the current node.
    pub fn bind<T: Bind>(&mut self, value: &mut T) -> TreeResult<()> {
        value.bind_from("", self)
    }

    /// True if `name` exists under the current node, as a child or an
    /// attribute.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Parse the leaf at `name` into `value`.
    ///
    /// An element holding attributes next to its text is read through its
    /// `<xmltext>` child.
    pub fn scalar<T: Scalar>(&mut self, name: &str, value: &mut T) -> TreeResult<()> {
        let Some(node) = self.lookup(name) else {
            return self.missing(name);
        };
        let Some(text) = node.value().or_else(|| node.get(XML_TEXT).and_then(Tree::value)) else {
            return Err(TreeError::invalid_value(
                self.display(name),
                "",
                "expected a value, found a subtree",
            ));
        };
        *value = T::from_text(text)
            .map_err(|reason| TreeError::invalid_value(self.display(name), text, reason))?;
        Ok(())
    }

    /// Run `f` on the child `name`, or on the current node if `name` is
    /// empty.
    ///
    /// An absent node returns `Ok(None)` in permissive mode and
    /// `PathNotFound` otherwise.
    pub fn descend<R>(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Self) -> TreeResult<R>,
    ) -> TreeResult<Option<R>> {
        if name.is_empty() {
            return self.visit(f);
        }
        self.path.push(name);
        let result = self.visit(f);
        self.path.pop();
        result
    }

    /// Like [`descend`](Self::descend), for one of the elements returned by
    /// [`child_elements`](Self::child_elements).
    pub fn descend_element<R>(
        &mut self,
        element: Element,
        f: impl FnOnce(&mut Self) -> TreeResult<R>,
    ) -> TreeResult<Option<R>> {
        self.path.push_element(element);
        let result = self.visit(f);
        self.path.pop();
        result
    }

    /// Addresses of the current node's children in tree order, each indexed
    /// among the siblings sharing its key. `<xmlattr>` and `<xmltext>` are
    /// left out.
    pub fn child_elements(&self) -> Vec<Element> {
        let Some(node) = self.current() else {
            return Vec::new();
        };
        let mut seen: HashMap<&str, usize> = HashMap::new();
        node.iter()
            .filter_map(|(key, _)| {
                let count = seen.entry(key.as_str()).or_insert(0);
                let index = *count;
                *count += 1;
                if key == XML_ATTRIBUTES || key == XML_TEXT {
                    None
                } else {
                    Some(Element::indexed(key.clone(), index))
                }
            })
            .collect()
    }

    fn current(&self) -> Option<&'a Tree> {
        self.tree.get_path(&self.path)
    }

    fn lookup(&self, name: &str) -> Option<&'a Tree> {
        let node = self.current()?;
        if name.is_empty() {
            return Some(node);
        }
        node.get(name)
            .or_else(|| node.get(XML_ATTRIBUTES).and_then(|attrs| attrs.get(name)))
    }

    fn visit<R>(&mut self, f: impl FnOnce(&mut Self) -> TreeResult<R>) -> TreeResult<Option<R>> {
        if self.current().is_none() {
            return self.missing("").map(|()| None);
        }
        f(self).map(Some)
    }

    fn missing(&self, name: &str) -> TreeResult<()> {
        if self.permissive {
            Ok(())
        } else {
            Err(TreeError::path_not_found(self.display(name)))
        }
    }

    fn display(&self, name: &str) -> String {
        let path = if name.is_empty() {
            self.path.to_string()
        } else {
            self.path.join(name).to_string()
        };
        if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptree_core::TreeErrorKind;

    fn sample() -> Tree {
        let mut tree = Tree::new();
        let a = tree.push("a", Tree::new());
        a.push("x", Tree::leaf("1"));
        a.push("x", Tree::leaf("2"));
        a.push(XML_ATTRIBUTES, vec![("id", Tree::leaf("7"))].into_iter().collect());
        a.push("y", Tree::leaf("3"));
        tree
    }

    #[test]
    fn test_descend_restores_path_on_error() {
        let tree = sample();
        let mut from = FromTree::new(&tree);
        let result = from.descend("a", |from| {
            let mut value = 0u8;
            from.scalar("missing", &mut value)
        });
        assert_eq!(result.unwrap_err().kind, TreeErrorKind::PathNotFound);
        assert!(from.path().is_empty());
    }

    #[test]
    fn test_attribute_fallback() {
        let tree = sample();
        let mut from = FromTree::new(&tree);
        let mut id = 0u32;
        from.descend("a", |from| from.scalar("id", &mut id)).unwrap();
        assert_eq!(id, 7);
    }

    #[test]
    fn test_child_elements_index_repeated_keys() {
        let tree = sample();
        let mut from = FromTree::new(&tree);
        let elements = from.descend("a", |from| Ok(from.child_elements())).unwrap().unwrap();
        assert_eq!(
            elements,
            vec![
                Element::indexed("x", 0),
                Element::indexed("x", 1),
                Element::indexed("y", 0),
            ]
        );
    }

    #[test]
    fn test_missing_node_permissive() {
        let tree = sample();
        let mut from = FromTree::new(&tree).permissive(true);
        let visited = from.descend("nope", |_| Ok(())).unwrap();
        assert_eq!(visited, None);

        let mut strict = FromTree::new(&tree);
        let err = strict.descend("nope", |_| Ok(())).unwrap_err();
        assert_eq!(err.context.as_deref(), Some("nope"));
    }

    #[test]
    fn test_subtree_is_not_a_scalar() {
        let tree = sample();
        let mut from = FromTree::new(&tree);
        let mut value = String::new();
        let err = from.scalar("a", &mut value).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::InvalidValue);
    }
}
