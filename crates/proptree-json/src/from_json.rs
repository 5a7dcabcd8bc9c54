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

//! JSON to tree conversion

use proptree_core::{Tree, TreeError, TreeErrorKind, TreeResult};
use serde_json::Value as JsonValue;
use std::io::Read;

/// Parse JSON text into a tree.
pub fn from_json(json: &str) -> TreeResult<Tree> {
    let value: JsonValue = serde_json::from_str(json).map_err(parse_error)?;
    Ok(from_json_value(&value))
}

/// Parse JSON from a reader into a tree.
pub fn from_json_reader<R: Read>(reader: R) -> TreeResult<Tree> {
    let value: JsonValue = serde_json::from_reader(reader).map_err(parse_error)?;
    Ok(from_json_value(&value))
}

/// Convert a parsed JSON value into a tree.
///
/// A top-level scalar gives a leaf root.
pub fn from_json_value(value: &JsonValue) -> Tree {
    match value {
        JsonValue::Object(map) => map
            .iter()
            .map(|(key, child)| (key.as_str(), from_json_value(child)))
            .collect(),
        JsonValue::Array(items) => items.iter().map(|item| ("", from_json_value(item))).collect(),
        JsonValue::String(s) => Tree::Leaf(s.clone()),
        JsonValue::Number(n) => Tree::Leaf(n.to_string()),
        JsonValue::Bool(b) => Tree::Leaf(b.to_string()),
        JsonValue::Null => Tree::leaf("null"),
    }
}

fn parse_error(err: serde_json::Error) -> TreeError {
    if err.is_io() {
        return TreeError::io(err.to_string());
    }
    TreeError::new(TreeErrorKind::MalformedInput, format!("invalid JSON: {err}"))
        .with_context(format!("line {}, column {}", err.line(), err.column()))
}
