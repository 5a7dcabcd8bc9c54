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

//! # PropTree - Ordered Property Trees
//!
//! An ordered tree of named, possibly repeated, children whose leaves hold
//! text, with converters between that tree and four textual forms:
//!
//! - **name-value**: nested `key=value` entries with `{...}` blocks
//! - **path-value**: one `a/b/c=value` assignment per leaf
//! - **JSON** and **XML**, through `serde_json` and `quick-xml`
//!
//! plus structural binding of typed records onto the tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use proptree::{ConvertConfig, Format};
//!
//! let config = ConvertConfig::default();
//! let tree = Format::NameValue
//!     .decode(r#"server={host="localhost",port="8080"}"#, &config)
//!     .unwrap();
//! let flat = Format::PathValue.encode(&tree, &config).unwrap();
//! assert_eq!(flat, r#"server/host="localhost",server/port="8080""#);
//! ```
//!
//! ## Unknown input
//!
//! [`from_unknown`] tries JSON, then XML, then path-value on a seekable
//! stream and keeps the first that parses:
//!
//! ```rust
//! use proptree::{from_unknown, path_value::PathValueConfig};
//! use std::io::Cursor;
//!
//! let tree = from_unknown(Cursor::new("<a>1</a>"), &PathValueConfig::default()).unwrap();
//! assert_eq!(tree.get("a").and_then(|a| a.value()), Some("1"));
//! ```
//!
//! ## Modules
//!
//! - [`name_value`]: name-value encoding
//! - [`path_value`]: path-value encoding and conflict policies
//! - [`json`]: JSON conversion
//! - [`xml`]: XML conversion
//! - [`bind`]: typed record binding

mod detect;
mod format;

pub use detect::from_unknown;
pub use format::{ConvertConfig, Format};

pub use proptree_core::{
    Element, IndexMode, Path, Tree, TreeError, TreeErrorKind, TreeResult, XML_ATTRIBUTES,
    XML_TEXT,
};

pub mod name_value {
    //! Name-value text encoding
    pub use proptree_name_value::{
        from_name_value, from_name_value_reader, to_name_value, to_name_value_writer, tokenize,
        NameValueConfig,
    };
}

pub mod path_value {
    //! Path-value text encoding
    pub use proptree_path_value::{
        from_path_value, from_path_value_into, from_path_value_reader, to_path_value,
        to_path_value_writer, ConflictPolicy, PathValueConfig,
    };
}

pub mod json {
    //! JSON conversion
    pub use proptree_json::{
        from_json, from_json_reader, from_json_value, to_json, to_json_value, to_json_writer,
        ToJsonConfig,
    };
}

pub mod xml {
    //! XML conversion
    pub use proptree_xml::{from_xml, from_xml_reader, to_xml, to_xml_writer, ToXmlConfig};
}

pub mod bind {
    //! Typed record binding
    pub use proptree_bind::{
        bind_record, bind_scalar, from_tree, to_tree, Bind, FromTree, Scalar, ToTree,
        TIMESTAMP_FORMAT,
    };
}

/// Decode `text` from one format and encode the tree in another.
///
/// # Examples
///
/// ```rust
/// use proptree::{convert, ConvertConfig, Format};
///
/// let json = convert("a/b=1", Format::PathValue, Format::Json, &ConvertConfig::default()).unwrap();
/// assert_eq!(json, r#"{"a":{"b":"1"}}"#);
/// ```
pub fn convert(text: &str, from: Format, to: Format, config: &ConvertConfig) -> TreeResult<String> {
    let tree = from.decode(text, config)?;
    to.encode(&tree, config)
}
