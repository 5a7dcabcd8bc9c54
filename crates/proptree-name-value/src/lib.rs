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

//! Name-value text encoding for property trees.
//!
//! The name-value form nests `key=value` entries in braces:
//!
//! ```text
//! server={host="localhost",port="8080"},debug="true"
//! ```
//!
//! Decoding runs in two passes: [`tokenize`] rewrites the text into a
//! whitespace-delimited block grammar while honouring quotes and
//! backslash escapes, then the block reader builds the [`Tree`].
//!
//! # Examples
//!
//! ```rust
//! use proptree_name_value::{from_name_value, to_name_value, NameValueConfig};
//!
//! let config = NameValueConfig::default();
//! let tree = from_name_value(r#"a="1",b={c="2"}"#, &config).unwrap();
//! assert_eq!(to_name_value(&tree, &config), r#"a="1",b={c="2"}"#);
//! ```
//!
//! [`Tree`]: proptree_core::Tree

mod from_name_value;
mod info;
mod to_name_value;
mod tokenize;

pub use from_name_value::{from_name_value, from_name_value_reader};
pub use to_name_value::{to_name_value, to_name_value_writer};
pub use tokenize::tokenize;

/// Characters and layout of the name-value form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValueConfig {
    /// Assignment character between a key and its value.
    pub equal_sign: char,
    /// Separator between sibling entries.
    pub delimiter: char,
    /// Write one entry per line, indented by depth.
    pub indented: bool,
}

impl Default for NameValueConfig {
    fn default() -> Self {
        Self {
            equal_sign: '=',
            delimiter: ',',
            indented: false,
        }
    }
}
