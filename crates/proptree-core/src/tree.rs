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

//! The ordered property tree.

use crate::path::{Element, Path};

/// A node of an ordered property tree.
///
/// A node is either a leaf holding a scalar string or an internal node
/// holding an ordered list of `(key, child)` pairs. Keys may repeat and
/// children keep insertion order; unnamed (empty-key) children represent
/// array elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    Leaf(String),
    Internal(Vec<(String, Tree)>),
}

impl Default for Tree {
    fn default() -> Self {
        Tree::Internal(Vec::new())
    }
}

impl Tree {
    /// Create an empty internal node.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(value: impl Into<String>) -> Self {
        Tree::Leaf(value.into())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// The scalar value, for leaves.
    pub fn value(&self) -> Option<&str> {
        match self {
            Tree::Leaf(value) => Some(value),
            Tree::Internal(_) => None,
        }
    }

    /// Children in order; empty for leaves.
    pub fn children(&self) -> &[(String, Tree)] {
        match self {
            Tree::Leaf(_) => &[],
            Tree::Internal(children) => children,
        }
    }

    /// Mutable children, turning a leaf into an empty internal node first.
    pub fn children_mut(&mut self) -> &mut Vec<(String, Tree)> {
        if self.is_leaf() {
            *self = Tree::new();
        }
        match self {
            Tree::Internal(children) => children,
            Tree::Leaf(_) => unreachable!("leaf replaced above"),
        }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, Tree)> {
        self.children().iter()
    }

    /// First child with the given key.
    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.iter().find(|(k, _)| k == key).map(|(_, child)| child)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tree> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Internal(children) => children
                .iter_mut()
                .find(|(k, _)| k == key)
                .map(|(_, child)| child),
        }
    }

    pub fn get_element(&self, element: &Element) -> Option<&Tree> {
        let children = self.children();
        position(children, element).map(|i| &children[i].1)
    }

    pub fn get_element_mut(&mut self, element: &Element) -> Option<&mut Tree> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Internal(children) => match position(children, element) {
                Some(i) => Some(&mut children[i].1),
                None => None,
            },
        }
    }

    /// Node at `path`; the empty path is the node itself.
    pub fn get_path(&self, path: &Path) -> Option<&Tree> {
        path.elements()
            .iter()
            .try_fold(self, |node, element| node.get_element(element))
    }

    pub fn get_path_mut(&mut self, path: &Path) -> Option<&mut Tree> {
        let mut node = self;
        for element in path.elements() {
            node = node.get_element_mut(element)?;
        }
        Some(node)
    }

    /// Scalar value at `path`, if that node is a leaf.
    pub fn get_value(&self, path: &Path) -> Option<&str> {
        self.get_path(path).and_then(Tree::value)
    }

    /// Append a child, keeping any existing children with the same key.
    pub fn push(&mut self, key: impl Into<String>, child: Tree) -> &mut Tree {
        let children = self.children_mut();
        children.push((key.into(), child));
        let last = children.len() - 1;
        &mut children[last].1
    }

    /// Node at `path`, creating empty internal nodes where missing.
    ///
    /// Leaves met on the way become internal nodes and lose their value.
    pub fn ensure_path(&mut self, path: &Path) -> &mut Tree {
        let mut node = self;
        for element in path.elements() {
            node = node.ensure_element(element);
        }
        node
    }

    fn ensure_element(&mut self, element: &Element) -> &mut Tree {
        let children = self.children_mut();
        let pos = match position(children, element) {
            Some(i) => i,
            None => {
                let existing = children.iter().filter(|(k, _)| *k == element.name).count();
                let wanted = element.index.unwrap_or(0) + 1;
                for _ in existing..wanted {
                    children.push((element.name.clone(), Tree::new()));
                }
                children.len() - 1
            }
        };
        &mut children[pos].1
    }

    /// Store `value` at `path`.
    ///
    /// Missing nodes are created. An existing leaf at `path` is overwritten;
    /// an existing internal node is kept and the value is appended next to it
    /// under the same key. The empty path turns this node into a leaf.
    ///
    /// An indexed last segment always addresses its position: missing
    /// siblings before it are created empty and an existing node there is
    /// replaced, so `get_value(path)` finds the value afterwards.
    pub fn put(&mut self, path: &Path, value: impl Into<String>) -> &mut Tree {
        let value = value.into();
        let Some(last) = path.last() else {
            *self = Tree::Leaf(value);
            return self;
        };
        let children = self.ensure_path(&path.head()).children_mut();
        match position(children, last) {
            Some(i) if children[i].1.is_leaf() || last.index.is_some() => {
                children[i].1 = Tree::Leaf(value);
                &mut children[i].1
            }
            None if last.index.is_some() => {
                let existing = children.iter().filter(|(k, _)| *k == last.name).count();
                for _ in existing..last.index.unwrap_or(0) {
                    children.push((last.name.clone(), Tree::new()));
                }
                children.push((last.name.clone(), Tree::Leaf(value)));
                let i = children.len() - 1;
                &mut children[i].1
            }
            _ => {
                children.push((last.name.clone(), Tree::Leaf(value)));
                let i = children.len() - 1;
                &mut children[i].1
            }
        }
    }
}

fn position(children: &[(String, Tree)], element: &Element) -> Option<usize> {
    children
        .iter()
        .enumerate()
        .filter(|(_, (k, _))| *k == element.name)
        .nth(element.index.unwrap_or(0))
        .map(|(i, _)| i)
}

impl<K: Into<String>> FromIterator<(K, Tree)> for Tree {
    fn from_iter<I: IntoIterator<Item = (K, Tree)>>(iter: I) -> Self {
        Tree::Internal(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a (String, Tree);
    type IntoIter = std::slice::Iter<'a, (String, Tree)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> Path {
        s.parse().unwrap()
    }

    #[test]
    fn test_put_indexed_pads_siblings() {
        let mut tree = Tree::new();
        let mut p = path("tag");
        p.push_index(1);
        tree.put(&p, "x");
        assert_eq!(tree.get_value(&p), Some("x"));
        let tag = tree.get("tag").unwrap();
        assert_eq!(tag.len(), 2);
        assert_eq!(tag.children()[0], (String::new(), Tree::new()));

        tree.put(&p, "y");
        assert_eq!(tree.get_value(&p), Some("y"));
        assert_eq!(tree.get("tag").unwrap().len(), 2);
    }

    #[test]
    fn test_put_indexed_replaces_internal_node() {
        let mut tree = Tree::new();
        let p = path("a[0]");
        tree.ensure_path(&path("a[0]/b"));
        tree.put(&p, "v");
        assert_eq!(tree.get_value(&p), Some("v"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_leaf_and_internal_are_distinct() {
        assert_ne!(Tree::leaf(""), Tree::new());
        assert!(Tree::leaf("").is_empty());
        assert_eq!(Tree::new().value(), None);
    }

    #[test]
    fn test_put_creates_path() {
        let mut tree = Tree::new();
        tree.put(&path("a/b"), "1");
        assert_eq!(tree.get_value(&path("a/b")), Some("1"));
        assert!(!tree.get_path(&path("a")).unwrap().is_leaf());
    }

    #[test]
    fn test_put_overwrites_leaf() {
        let mut tree = Tree::new();
        tree.put(&path("a/b"), "1");
        tree.put(&path("a/b"), "2");
        assert_eq!(tree.get_path(&path("a")).unwrap().len(), 1);
        assert_eq!(tree.get_value(&path("a/b")), Some("2"));
    }

    #[test]
    fn test_put_next_to_internal_node() {
        let mut tree = Tree::new();
        tree.put(&path("a/b"), "1");
        tree.put(&path("a"), "x");
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get_value(&path("a/b")), Some("1"));
        assert_eq!(tree.get_value(&path("a[1]")), Some("x"));
    }

    #[test]
    fn test_put_through_leaf_makes_it_internal() {
        let mut tree = Tree::new();
        tree.put(&path("a"), "x");
        tree.put(&path("a/b"), "1");
        assert_eq!(tree.get_value(&path("a/b")), Some("1"));
        assert_eq!(tree.get_value(&path("a")), None);
    }

    #[test]
    fn test_indexed_lookup_selects_nth_named_child() {
        let tree: Tree = vec![
            ("x", Tree::leaf("0")),
            ("y", Tree::leaf("other")),
            ("x", Tree::leaf("1")),
        ]
        .into_iter()
        .collect();
        assert_eq!(tree.get_value(&path("x")), Some("0"));
        assert_eq!(tree.get_value(&path("x[1]")), Some("1"));
        assert_eq!(tree.get_value(&path("x[2]")), None);
    }

    #[test]
    fn test_ensure_indexed_pads_siblings() {
        let mut tree = Tree::new();
        tree.ensure_path(&path("x[2]"));
        assert_eq!(tree.len(), 3);
        assert!(tree.iter().all(|(k, _)| k == "x"));
    }

    #[test]
    fn test_order_is_preserved() {
        let mut tree = Tree::new();
        tree.push("", Tree::leaf("a"));
        tree.push("", Tree::leaf("b"));
        tree.push("", Tree::leaf("c"));
        let values: Vec<_> = tree.iter().filter_map(|(_, c)| c.value()).collect();
        assert_eq!(values, ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_path_put_makes_leaf() {
        let mut tree = Tree::new();
        tree.put(&Path::new(), "v");
        assert_eq!(tree, Tree::leaf("v"));
    }
}
