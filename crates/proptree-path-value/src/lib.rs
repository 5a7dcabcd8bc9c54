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

//! Path-value text encoding for property trees.
//!
//! The path-value form flattens a tree into one assignment per leaf:
//!
//! ```text
//! server/host="localhost",server/port="8080",debug="true"
//! ```
//!
//! Decoding is additive: each assignment is stored through the configured
//! [`ConflictPolicy`], so the same text can be decoded strictly or
//! leniently. Encoding can render unnamed array children by position, in
//! the style picked by [`IndexMode`].
//!
//! # Examples
//!
//! ```rust
//! use proptree_path_value::{from_path_value, to_path_value, PathValueConfig};
//!
//! let config = PathValueConfig::default();
//! let tree = from_path_value(r#"a/b="1",a/c="2""#, &config).unwrap();
//! assert_eq!(to_path_value(&tree, &config), r#"a/b="1",a/c="2""#);
//! ```

mod from_path_value;
mod policy;
mod to_path_value;

pub use from_path_value::{from_path_value, from_path_value_into, from_path_value_reader};
pub use policy::ConflictPolicy;
pub use to_path_value::{to_path_value, to_path_value_writer};

use proptree_core::{IndexMode, Path};

/// Characters, conflict handling and index rendering of the path-value form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathValueConfig {
    /// Assignment character between a path and its value.
    pub equal_sign: char,
    /// Separator between assignments.
    pub delimiter: char,
    /// Treatment of repeated paths while decoding.
    pub policy: ConflictPolicy,
    /// Rendering of unnamed children while encoding.
    pub indices: IndexMode,
    /// Prefix prepended to every encoded path.
    pub root: Path,
}

impl Default for PathValueConfig {
    fn default() -> Self {
        Self {
            equal_sign: '=',
            delimiter: ',',
            policy: ConflictPolicy::default(),
            indices: IndexMode::default(),
            root: Path::new(),
        }
    }
}
