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

//! Tree to name-value text conversion

use crate::NameValueConfig;
use proptree_core::{Tree, TreeResult};
use std::io::Write;

const INDENT_STEP: usize = 4;

/// Convert a tree into name-value text.
///
/// Leaves are written as `key="value"` with the value copied verbatim;
/// values containing quotes, backslashes, braces or the configured
/// assignment or separator characters must be escaped by the caller to
/// survive a round trip. Internal nodes are written as `key={...}`, empty
/// ones as `key={}`, and unnamed keys as `""`.
///
/// With `indented`, every entry starts on its own line, indented by four
/// spaces per level. A blank or tab separator is then left out, since the
/// line breaks already separate entries.
///
/// # Examples
///
/// ```rust
/// use proptree_core::Tree;
/// use proptree_name_value::{to_name_value, NameValueConfig};
///
/// let tree: Tree = vec![("a", Tree::leaf("1"))].into_iter().collect();
/// assert_eq!(to_name_value(&tree, &NameValueConfig::default()), r#"a="1""#);
/// ```
pub fn to_name_value(tree: &Tree, config: &NameValueConfig) -> String {
    let mut out = String::new();
    for (i, (key, child)) in tree.iter().enumerate() {
        write_entry(&mut out, key, child, i == 0, 0, config);
    }
    if config.indented {
        out.push('\n');
    }
    out
}

/// Write a tree as name-value text to `writer`.
pub fn to_name_value_writer<W: Write>(
    tree: &Tree,
    mut writer: W,
    config: &NameValueConfig,
) -> TreeResult<()> {
    writer.write_all(to_name_value(tree, config).as_bytes())?;
    Ok(())
}

fn write_entry(
    out: &mut String,
    key: &str,
    node: &Tree,
    is_begin: bool,
    indent: usize,
    config: &NameValueConfig,
) {
    let blank_delimiter = config.delimiter == ' ' || config.delimiter == '\t';
    if !is_begin && !(config.indented && blank_delimiter) {
        out.push(config.delimiter);
    }
    if config.indented {
        new_line(out, indent);
    }
    if key.is_empty() {
        out.push_str("\"\"");
    } else {
        out.push_str(key);
    }
    out.push(config.equal_sign);

    match node {
        Tree::Leaf(value) => {
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
        Tree::Internal(children) => {
            if config.indented {
                new_line(out, indent);
            }
            out.push('{');
            for (i, (k, child)) in children.iter().enumerate() {
                write_entry(out, k, child, i == 0, indent + INDENT_STEP, config);
            }
            if config.indented {
                new_line(out, indent);
            }
            out.push('}');
        }
    }
}

fn new_line(out: &mut String, indent: usize) {
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(indent));
}
