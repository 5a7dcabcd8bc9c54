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

//! Tree to XML conversion

use proptree_core::{Tree, TreeError, TreeResult, XML_ATTRIBUTES, XML_TEXT};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};

const INDENT_SIZE: usize = 2;

/// Configuration for XML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToXmlConfig {
    /// Pretty-print with indentation
    pub pretty: bool,
    /// Start with an `<?xml ...?>` declaration
    pub declaration: bool,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            declaration: true,
        }
    }
}

/// Convert a tree to an XML string.
///
/// The tree must be an internal node with exactly one child, which becomes
/// the document element. `<xmlattr>` children are written as attributes
/// and `<xmltext>` children as element text; a leaf becomes an element
/// holding its value.
pub fn to_xml(tree: &Tree, config: &ToXmlConfig) -> TreeResult<String> {
    let document = match tree {
        Tree::Internal(children) if children.len() == 1 => &children[0],
        _ => {
            return Err(TreeError::unrepresentable(
                "an XML document needs exactly one root element",
            ))
        }
    };

    let mut writer = if config.pretty {
        Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT_SIZE)
    } else {
        Writer::new(Cursor::new(Vec::new()))
    };

    if config.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(write_error)?;
    }
    write_element(&mut writer, &document.0, &document.1)?;

    let result = writer.into_inner().into_inner();
    String::from_utf8(result)
        .map_err(|e| TreeError::unrepresentable(format!("invalid UTF-8 in XML output: {e}")))
}

/// Write a tree as XML to `writer`.
pub fn to_xml_writer<W: Write>(tree: &Tree, mut writer: W, config: &ToXmlConfig) -> TreeResult<()> {
    writer.write_all(to_xml(tree, config)?.as_bytes())?;
    Ok(())
}

fn write_element<W: Write>(writer: &mut Writer<W>, name: &str, node: &Tree) -> TreeResult<()> {
    check_name(name)?;
    let mut start = BytesStart::new(name);

    let children = match node {
        Tree::Leaf(value) => {
            return write_text_element(writer, start, name, value);
        }
        Tree::Internal(children) => children,
    };

    let mut text: Option<&str> = None;
    let mut elements = Vec::with_capacity(children.len());
    for (key, child) in children {
        match key.as_str() {
            XML_ATTRIBUTES => {
                for (attr, value) in child.iter() {
                    check_name(attr)?;
                    let Some(value) = value.value() else {
                        return Err(TreeError::unrepresentable(format!(
                            "attribute '{attr}' of <{name}> is not a leaf"
                        )));
                    };
                    start.push_attribute((attr.as_str(), value));
                }
            }
            XML_TEXT => match child.value() {
                Some(value) => text = Some(value),
                None => {
                    return Err(TreeError::unrepresentable(format!(
                        "text of <{name}> is not a leaf"
                    )))
                }
            },
            _ => elements.push((key, child)),
        }
    }

    if elements.is_empty() {
        return write_text_element(writer, start, name, text.unwrap_or(""));
    }

    writer.write_event(Event::Start(start)).map_err(write_error)?;
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(write_error)?;
    }
    for (key, child) in elements {
        write_element(writer, key, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(write_error)
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    start: BytesStart,
    name: &str,
    text: &str,
) -> TreeResult<()> {
    if text.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_error);
    }
    writer.write_event(Event::Start(start)).map_err(write_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(write_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(write_error)
}

fn check_name(name: &str) -> TreeResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_' || first == ':')
                && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(TreeError::unrepresentable(format!("'{name}' is not a valid XML name")))
    }
}

fn write_error(err: quick_xml::Error) -> TreeError {
    TreeError::io(format!("failed to write XML: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptree_core::TreeErrorKind;

    fn bare() -> ToXmlConfig {
        ToXmlConfig {
            declaration: false,
            ..ToXmlConfig::default()
        }
    }

    fn doc(name: &str, node: Tree) -> Tree {
        vec![(name, node)].into_iter().collect()
    }

    #[test]
    fn test_declaration() {
        let xml = to_xml(&doc("a", Tree::leaf("1")), &ToXmlConfig::default()).unwrap();
        assert_eq!(xml, r#"<?xml version="1.0" encoding="UTF-8"?><a>1</a>"#);
    }

    #[test]
    fn test_leaves_and_empty_nodes() {
        let node: Tree = vec![("b", Tree::leaf("")), ("c", Tree::new()), ("d", Tree::leaf("x"))]
            .into_iter()
            .collect();
        assert_eq!(to_xml(&doc("a", node), &bare()).unwrap(), "<a><b/><c/><d>x</d></a>");
    }

    #[test]
    fn test_attributes_and_text() {
        let attrs: Tree = vec![("k", Tree::leaf("a\"b"))].into_iter().collect();
        let node: Tree = vec![
            (XML_ATTRIBUTES, attrs),
            (XML_TEXT, Tree::leaf("t & u")),
            ("c", Tree::leaf("1")),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            to_xml(&doc("a", node), &bare()).unwrap(),
            r#"<a k="a&quot;b">t &amp; u<c>1</c></a>"#
        );
    }

    #[test]
    fn test_root_must_be_single_element() {
        let two: Tree = vec![("a", Tree::leaf("1")), ("b", Tree::leaf("2"))].into_iter().collect();
        for tree in [Tree::new(), Tree::leaf("x"), two] {
            let err = to_xml(&tree, &bare()).unwrap_err();
            assert_eq!(err.kind, TreeErrorKind::Unrepresentable);
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "1abc", "a b", "<x>"] {
            let err = to_xml(&doc(name, Tree::leaf("1")), &bare()).unwrap_err();
            assert_eq!(err.kind, TreeErrorKind::Unrepresentable, "name {name:?}");
        }
        let unnamed: Tree = vec![("", Tree::leaf("1"))].into_iter().collect();
        let err = to_xml(&doc("list", unnamed), &bare()).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::Unrepresentable);
    }
}
