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

//! Core data model for PropTree.
//!
//! This crate provides the pieces every codec shares:
//!
//! - [`Tree`]: an ordered tree whose nodes are either scalar leaves or lists
//!   of `(key, child)` pairs, with repeatable keys
//! - [`Path`]: hierarchical addresses with optional array indices and three
//!   index rendering styles ([`IndexMode`])
//! - [`TreeError`]: the error model shared by all conversions
//!
//! # Example
//!
//! ```rust
//! use proptree_core::{Path, Tree};
//!
//! let mut tree = Tree::new();
//! let path: Path = "server/port".parse().unwrap();
//! tree.put(&path, "8080");
//! assert_eq!(tree.get_value(&path), Some("8080"));
//! ```

mod error;
mod path;
mod tree;

pub use error::{TreeError, TreeErrorKind, TreeResult};
pub use path::{Element, IndexMode, Path};
pub use tree::Tree;

/// Child key under which XML attributes are stored.
pub const XML_ATTRIBUTES: &str = "<xmlattr>";

/// Child key under which XML text is stored when an element also has children.
pub const XML_TEXT: &str = "<xmltext>";
