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

//! Name-value text to tree conversion

use crate::{info, tokenize, NameValueConfig};
use proptree_core::{Tree, TreeResult};
use std::io::BufRead;

/// Convert name-value text into a tree.
///
/// # Examples
///
/// ```rust
/// use proptree_name_value::{from_name_value, NameValueConfig};
///
/// let tree = from_name_value(r#"a="1",b={c="2"}"#, &NameValueConfig::default()).unwrap();
/// assert_eq!(tree.get("b").and_then(|b| b.get("c")).and_then(|c| c.value()), Some("2"));
/// ```
pub fn from_name_value(text: &str, config: &NameValueConfig) -> TreeResult<Tree> {
    let tokenized = tokenize(text, config.equal_sign, config.delimiter)?;
    info::parse(&tokenized)
}

/// Read name-value text from a line-oriented stream.
///
/// Lines whose first non-space character is `#` are comments and skipped.
pub fn from_name_value_reader<R: BufRead>(reader: R, config: &NameValueConfig) -> TreeResult<Tree> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }
        text.push_str(&line);
        text.push('\n');
    }
    from_name_value(&text, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptree_core::TreeErrorKind;

    #[test]
    fn test_flat() {
        let tree = from_name_value("a=1,b=\"two words\"", &NameValueConfig::default()).unwrap();
        assert_eq!(tree.get("a").unwrap().value(), Some("1"));
        assert_eq!(tree.get("b").unwrap().value(), Some("two words"));
    }

    #[test]
    fn test_reader_skips_comments() {
        let input = "# header\na=1,\n   # indented comment\nb={c=2}\n";
        let tree = from_name_value_reader(input.as_bytes(), &NameValueConfig::default()).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get("b").unwrap().get("c").unwrap().value(), Some("2"));
    }

    #[test]
    fn test_reader_lines_without_separator() {
        let tree = from_name_value_reader("a=1\nb=2\n".as_bytes(), &NameValueConfig::default())
            .unwrap();
        assert_eq!(tree.get("a").unwrap().value(), Some("1"));
        assert_eq!(tree.get("b").unwrap().value(), Some("2"));
    }

    #[test]
    fn test_unbalanced_braces() {
        let err = from_name_value("a={b=1", &NameValueConfig::default()).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::MalformedInput);
    }
}
