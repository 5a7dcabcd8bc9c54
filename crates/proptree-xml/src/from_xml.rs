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

//! XML to tree conversion

use crate::xml_error;
use proptree_core::{Tree, TreeError, TreeResult, XML_ATTRIBUTES, XML_TEXT};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Read;

/// An element whose end tag has not been seen yet.
struct Open {
    name: String,
    attributes: Vec<(String, Tree)>,
    children: Vec<(String, Tree)>,
    text: String,
}

impl Open {
    fn start(elem: &BytesStart) -> TreeResult<Self> {
        let name = utf8(elem.name().as_ref())?;
        let mut attributes = Vec::new();
        for attr in elem.attributes() {
            let attr = attr.map_err(|e| malformed(format!("invalid attribute in <{name}>: {e}")))?;
            let key = utf8(attr.key.as_ref())?;
            let value = attr
                .unescape_value()
                .map_err(|e| malformed(format!("invalid attribute value in <{name}>: {e}")))?;
            attributes.push((key, Tree::Leaf(value.into_owned())));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn finish(self) -> (String, Tree) {
        let text = self.text.trim();
        if self.children.is_empty() && self.attributes.is_empty() {
            return (self.name, Tree::leaf(text));
        }
        let mut node = Tree::new();
        if !self.attributes.is_empty() {
            node.push(XML_ATTRIBUTES, Tree::Internal(self.attributes));
        }
        if !text.is_empty() {
            node.push(XML_TEXT, Tree::leaf(text));
        }
        node.children_mut().extend(self.children);
        (self.name, node)
    }
}

/// Parse an XML document into a tree.
///
/// The root of the result has one child, the document element. A document
/// without an element, with more than one top-level element, or with text
/// outside the document element is malformed.
pub fn from_xml(xml: &str) -> TreeResult<Tree> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Open> = Vec::new();
    let mut root: Option<(String, Tree)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| xml_error(e, reader.buffer_position()))?;
        match event {
            Event::Start(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(extra_root(&e)?);
                }
                stack.push(Open::start(&e)?);
            }
            Event::Empty(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(extra_root(&e)?);
                }
                let done = Open::start(&e)?.finish();
                close(&mut stack, &mut root, done);
            }
            Event::End(_) => {
                let Some(open) = stack.pop() else {
                    return Err(malformed("unexpected end tag"));
                };
                let done = open.finish();
                close(&mut stack, &mut root, done);
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|e| malformed(format!("text unescape error: {e}")))?;
                match stack.last_mut() {
                    Some(open) => open.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(TreeError::malformed(
                            "text outside the document element",
                            text.into_owned(),
                        ))
                    }
                }
            }
            Event::CData(e) => {
                let text = utf8(&e.into_inner())?;
                match stack.last_mut() {
                    Some(open) => open.text.push_str(&text),
                    None => {
                        return Err(TreeError::malformed("CDATA outside the document element", text))
                    }
                }
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(TreeError::malformed("unexpected end of document", format!("<{}>", open.name)));
    }
    match root {
        Some((name, node)) => Ok(vec![(name, node)].into_iter().collect()),
        None => Err(malformed("document has no element")),
    }
}

/// Parse an XML document from a reader.
pub fn from_xml_reader<R: Read>(mut reader: R) -> TreeResult<Tree> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let xml = String::from_utf8(bytes).map_err(|e| malformed(format!("invalid UTF-8: {e}")))?;
    from_xml(&xml)
}

fn close(stack: &mut [Open], root: &mut Option<(String, Tree)>, done: (String, Tree)) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(done),
        None => *root = Some(done),
    }
}

fn extra_root(elem: &BytesStart) -> TreeResult<TreeError> {
    let name = utf8(elem.name().as_ref())?;
    Ok(TreeError::malformed(
        "document has more than one top-level element",
        format!("<{name}>"),
    ))
}

fn utf8(bytes: &[u8]) -> TreeResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| malformed(format!("invalid UTF-8: {e}")))
}

fn malformed(message: impl Into<String>) -> TreeError {
    TreeError::new(proptree_core::TreeErrorKind::MalformedInput, message)
}
