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

//! Tree to JSON conversion

use proptree_core::{Tree, TreeError, TreeResult};
use serde_json::{Map, Value as JsonValue};
use std::collections::HashSet;
use std::io::Write;

/// Configuration for JSON output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToJsonConfig {
    /// Indent nested values instead of writing a single line
    pub pretty: bool,
}

/// Convert a tree to a JSON string.
pub fn to_json(tree: &Tree, config: &ToJsonConfig) -> TreeResult<String> {
    let value = to_json_value(tree)?;
    let json = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    json.map_err(|e| TreeError::unrepresentable(format!("JSON serialization error: {e}")))
}

/// Write a tree as JSON to `writer`.
pub fn to_json_writer<W: Write>(tree: &Tree, mut writer: W, config: &ToJsonConfig) -> TreeResult<()> {
    writer.write_all(to_json(tree, config)?.as_bytes())?;
    Ok(())
}

/// Convert a tree to a `serde_json::Value`.
///
/// Leaves become strings. An internal node whose children are all unnamed
/// becomes an array, any other internal node an object. A node mixing named
/// and unnamed children, or repeating a key, has no JSON form.
pub fn to_json_value(tree: &Tree) -> TreeResult<JsonValue> {
    node_to_json(tree, "")
}

fn node_to_json(node: &Tree, path: &str) -> TreeResult<JsonValue> {
    let children = match node {
        Tree::Leaf(value) => return Ok(JsonValue::String(value.clone())),
        Tree::Internal(children) => children,
    };

    let unnamed = children.iter().filter(|(k, _)| k.is_empty()).count();
    if unnamed > 0 && unnamed < children.len() {
        return Err(TreeError::unrepresentable(
            "node mixes named and unnamed children",
        )
        .with_context(display_path(path)));
    }

    if unnamed > 0 {
        let items = children
            .iter()
            .enumerate()
            .map(|(i, (_, child))| node_to_json(child, &format!("{path}[{i}]")))
            .collect::<TreeResult<Vec<_>>>()?;
        return Ok(JsonValue::Array(items));
    }

    let mut seen = HashSet::with_capacity(children.len());
    let mut map = Map::with_capacity(children.len());
    for (key, child) in children {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}/{key}")
        };
        if !seen.insert(key.as_str()) {
            return Err(TreeError::unrepresentable(format!("repeated key '{key}'"))
                .with_context(child_path));
        }
        let value = node_to_json(child, &child_path)?;
        map.insert(key.clone(), value);
    }
    Ok(JsonValue::Object(map))
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptree_core::TreeErrorKind;

    fn tree(pairs: Vec<(&str, Tree)>) -> Tree {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_objects_and_arrays() {
        let list = tree(vec![("", Tree::leaf("a")), ("", Tree::leaf("b"))]);
        let root = tree(vec![("x", list), ("y", Tree::leaf("1")), ("z", Tree::new())]);
        assert_eq!(
            to_json(&root, &ToJsonConfig::default()).unwrap(),
            r#"{"x":["a","b"],"y":"1","z":{}}"#
        );
    }

    #[test]
    fn test_leaf_root() {
        assert_eq!(to_json(&Tree::leaf("v"), &ToJsonConfig::default()).unwrap(), r#""v""#);
    }

    #[test]
    fn test_pretty() {
        let root = tree(vec![("a", Tree::leaf("1"))]);
        let config = ToJsonConfig { pretty: true };
        assert_eq!(to_json(&root, &config).unwrap(), "{\n  \"a\": \"1\"\n}");
    }

    #[test]
    fn test_mixed_children_unrepresentable() {
        let mixed = tree(vec![("", Tree::leaf("a")), ("k", Tree::leaf("b"))]);
        let root = tree(vec![("outer", mixed)]);
        let err = to_json_value(&root).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::Unrepresentable);
        assert_eq!(err.context.as_deref(), Some("outer"));
    }

    #[test]
    fn test_repeated_key_unrepresentable() {
        let root = tree(vec![("a", Tree::leaf("1")), ("a", Tree::leaf("2"))]);
        let err = to_json_value(&root).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::Unrepresentable);
        assert!(err.message.contains("'a'"));
    }

    #[test]
    fn test_special_characters_escaped() {
        let root = tree(vec![("q\"k", Tree::leaf("line\nbreak"))]);
        assert_eq!(
            to_json(&root, &ToJsonConfig::default()).unwrap(),
            r#"{"q\"k":"line\nbreak"}"#
        );
    }
}
