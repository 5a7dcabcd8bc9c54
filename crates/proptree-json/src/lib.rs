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

//! PropTree JSON Conversion
//!
//! Maps JSON documents onto property trees and back:
//!
//! - objects become internal nodes, members kept in document order
//! - arrays become internal nodes whose children have the empty key
//! - strings, numbers, booleans and `null` become leaves holding their text
//!
//! Every leaf is text, so writing produces strings only: `{"a":1}` reads as
//! `a="1"` and writes back as `{"a":"1"}`.
//!
//! # Examples
//!
//! ```rust
//! use proptree_json::{from_json, to_json, ToJsonConfig};
//!
//! let tree = from_json(r#"{"name": "Alice", "tags": ["x", "y"]}"#).unwrap();
//! assert_eq!(tree.get("name").and_then(|n| n.value()), Some("Alice"));
//! assert_eq!(tree.get("tags").map(|t| t.len()), Some(2));
//!
//! let json = to_json(&tree, &ToJsonConfig::default()).unwrap();
//! assert_eq!(json, r#"{"name":"Alice","tags":["x","y"]}"#);
//! ```

mod from_json;
mod to_json;

pub use from_json::{from_json, from_json_reader, from_json_value};
pub use to_json::{to_json, to_json_value, to_json_writer, ToJsonConfig};
