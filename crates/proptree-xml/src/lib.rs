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

//! XML conversion for property trees.
//!
//! Each element becomes a child keyed by its name. An element holding only
//! text becomes a leaf with the trimmed text. Attributes are gathered under
//! a `<xmlattr>` child, and the text of an element that also has children
//! or attributes is kept under `<xmltext>`:
//!
//! ```text
//! <server port="8080">main<host>localhost</host></server>
//!
//! server
//!   <xmlattr>
//!     port = "8080"
//!   <xmltext> = "main"
//!   host = "localhost"
//! ```
//!
//! Comments, processing instructions and the declaration are skipped.
//!
//! # Examples
//!
//! ```rust
//! use proptree_xml::{from_xml, to_xml, ToXmlConfig};
//!
//! let tree = from_xml(r#"<a x="1"><b>2</b></a>"#).unwrap();
//! let a = tree.get("a").unwrap();
//! assert_eq!(a.get("<xmlattr>").and_then(|t| t.get("x")).and_then(|x| x.value()), Some("1"));
//! assert_eq!(a.get("b").and_then(|b| b.value()), Some("2"));
//!
//! let config = ToXmlConfig { declaration: false, ..ToXmlConfig::default() };
//! assert_eq!(to_xml(&tree, &config).unwrap(), r#"<a x="1"><b>2</b></a>"#);
//! ```

mod from_xml;
mod to_xml;

pub use from_xml::{from_xml, from_xml_reader};
pub use to_xml::{to_xml, to_xml_writer, ToXmlConfig};

use proptree_core::{TreeError, TreeErrorKind};

fn xml_error(err: quick_xml::Error, position: usize) -> TreeError {
    match err {
        quick_xml::Error::Io(e) => TreeError::io(e.to_string()),
        other => TreeError::new(
            TreeErrorKind::MalformedInput,
            format!("XML parse error at position {position}: {other}"),
        ),
    }
}
