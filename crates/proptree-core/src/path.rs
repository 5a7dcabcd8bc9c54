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

//! Hierarchical key paths.
//!
//! A [`Path`] is an ordered list of [`Element`]s, each a name with an
//! optional numeric index. Paths are cheap to push and pop, so a single
//! mutable path can follow a depth-first walk of a [`Tree`](crate::Tree).
//!
//! Indices can be rendered in three styles, selected by [`IndexMode`]:
//!
//! ```text
//! WithBrackets      x[0]/y
//! WithoutBrackets   x/0/y
//! Disabled          x/y
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;

/// How array indices appear when a path is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexMode {
    /// Indices are omitted; repeated array elements render identically.
    #[default]
    Disabled,
    /// `x[0]/y`
    WithBrackets,
    /// `x/0/y`
    WithoutBrackets,
}

impl IndexMode {
    fn as_str(self) -> &'static str {
        match self {
            IndexMode::Disabled => "disabled",
            IndexMode::WithBrackets => "with-brackets",
            IndexMode::WithoutBrackets => "without-brackets",
        }
    }
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexMode {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(IndexMode::Disabled),
            "with-brackets" => Ok(IndexMode::WithBrackets),
            "without-brackets" => Ok(IndexMode::WithoutBrackets),
            _ => Err(TreeError::malformed(
                "expected one of disabled, with-brackets, without-brackets",
                s,
            )),
        }
    }
}

/// A single path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Element {
    /// Child key. Empty for unnamed (array) children.
    pub name: String,
    /// Selects the n-th child carrying `name`.
    pub index: Option<usize>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(index),
        }
    }

    fn parse(segment: &str) -> Self {
        if let Some(open) = segment.rfind('[') {
            if let Some(digits) = segment[open + 1..].strip_suffix(']') {
                if let Ok(index) = digits.parse::<usize>() {
                    return Self::indexed(&segment[..open], index);
                }
            }
        }
        Self::new(segment)
    }
}

/// An address into a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    elements: Vec<Element>,
}

impl Path {
    /// Create an empty path (the root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from literal segment names; brackets are not interpreted.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: segments.into_iter().map(Element::new).collect(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// Append a named segment.
    pub fn push(&mut self, name: impl Into<String>) {
        self.elements.push(Element::new(name));
    }

    /// Append an unnamed indexed segment (an array element).
    pub fn push_index(&mut self, index: usize) {
        self.elements.push(Element::indexed("", index));
    }

    pub fn push_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove and return the last segment.
    pub fn pop(&mut self) -> Option<Element> {
        self.elements.pop()
    }

    /// The path without its last segment.
    pub fn head(&self) -> Path {
        let mut elements = self.elements.clone();
        elements.pop();
        Path { elements }
    }

    /// A new path with `name` appended.
    pub fn join(&self, name: impl Into<String>) -> Path {
        let mut path = self.clone();
        path.push(name);
        path
    }

    /// A new path with every element of `other` appended.
    pub fn concat(&self, other: &Path) -> Path {
        let mut path = self.clone();
        path.elements.extend(other.elements.iter().cloned());
        path
    }

    /// True if `self` is an ancestor of, or equal to, `other`.
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        self.elements.len() <= other.elements.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a == b)
    }

    /// Render with the given index style and segment delimiter.
    pub fn render(&self, mode: IndexMode, delimiter: char) -> String {
        let mut out = String::new();
        let mut first = true;
        for element in &self.elements {
            let named = !element.name.is_empty();
            match (mode, element.index) {
                (_, None) => {
                    separate(&mut out, &mut first, delimiter);
                    out.push_str(&element.name);
                }
                (IndexMode::Disabled, Some(_)) => {
                    if named {
                        separate(&mut out, &mut first, delimiter);
                        out.push_str(&element.name);
                    }
                }
                (IndexMode::WithBrackets, Some(index)) => {
                    if named || first {
                        separate(&mut out, &mut first, delimiter);
                        out.push_str(&element.name);
                    }
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
                (IndexMode::WithoutBrackets, Some(index)) => {
                    if named {
                        separate(&mut out, &mut first, delimiter);
                        out.push_str(&element.name);
                    }
                    separate(&mut out, &mut first, delimiter);
                    out.push_str(&index.to_string());
                }
            }
        }
        out
    }
}

fn separate(out: &mut String, first: &mut bool, delimiter: char) {
    if !*first {
        out.push(delimiter);
    }
    *first = false;
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(IndexMode::WithBrackets, '/'))
    }
}

impl FromStr for Path {
    type Err = TreeError;

    /// Parse a `/`-delimited path; a trailing `[n]` on a segment becomes its index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Path::new());
        }
        Ok(Path {
            elements: s.split('/').map(Element::parse).collect(),
        })
    }
}

impl From<Vec<Element>> for Path {
    fn from(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}

/// Prefix order: `a <= b` iff `a` is an ancestor-or-equal of `b`.
/// Paths on different branches are incomparable.
impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_prefix_of(other) {
            Some(Ordering::Less)
        } else if other.is_prefix_of(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
