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

//! Path-value text to tree conversion

use crate::policy::{NoCheck, NoOverwrite, PathFilter, TakeLast, UniqueInput};
use crate::{ConflictPolicy, PathValueConfig};
use proptree_core::{Path, Tree, TreeError, TreeResult};
use std::io::BufRead;

/// Convert path-value text into a new tree.
///
/// # Examples
///
/// ```rust
/// use proptree_path_value::{from_path_value, PathValueConfig};
///
/// let tree = from_path_value("a/b=1,c=2", &PathValueConfig::default()).unwrap();
/// assert_eq!(tree.get("a").and_then(|a| a.get("b")).and_then(|b| b.value()), Some("1"));
/// ```
pub fn from_path_value(text: &str, config: &PathValueConfig) -> TreeResult<Tree> {
    let mut tree = Tree::new();
    from_path_value_into(&mut tree, text, config)?;
    Ok(tree)
}

/// Merge path-value text into an existing tree.
///
/// Assignments are applied in input order through `config.policy`. On
/// error the tree keeps every assignment made before the failing one.
///
/// Fragments between separators that are empty or whitespace are skipped.
/// A fragment without the assignment character is malformed. Quote
/// characters around the path and around the value are stripped; nothing
/// else is unescaped. Every `/` in a path starts a new segment.
pub fn from_path_value_into(tree: &mut Tree, text: &str, config: &PathValueConfig) -> TreeResult<()> {
    match config.policy {
        ConflictPolicy::NoCheck => apply(tree, text, config, NoCheck),
        ConflictPolicy::TakeLast => apply(tree, text, config, TakeLast),
        ConflictPolicy::UniqueInput => apply(tree, text, config, UniqueInput::default()),
        ConflictPolicy::NoOverwrite => apply(tree, text, config, NoOverwrite),
    }
}

/// Read path-value text from a line-oriented stream.
///
/// Blank lines and lines whose first non-space character is `#` are
/// skipped. The remaining lines are joined with the configured separator,
/// so one assignment per line works with any separator.
pub fn from_path_value_reader<R: BufRead>(reader: R, config: &PathValueConfig) -> TreeResult<Tree> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        text.push_str(&line);
        text.push(config.delimiter);
    }
    from_path_value(&text, config)
}

fn apply<F: PathFilter>(
    tree: &mut Tree,
    text: &str,
    config: &PathValueConfig,
    mut filter: F,
) -> TreeResult<()> {
    for fragment in text.split(config.delimiter) {
        if fragment.trim().is_empty() {
            continue;
        }
        let Some((raw_path, raw_value)) = fragment.split_once(config.equal_sign) else {
            return Err(TreeError::malformed(
                format!(
                    "expected '{}'-separated path{}value pairs",
                    config.delimiter, config.equal_sign
                ),
                fragment,
            ));
        };
        let raw_path = strip_quotes(raw_path);
        // an empty path names an unnamed child, never the root itself
        let path = Path::from_segments(raw_path.split('/'));
        filter.put(tree, raw_path, &path, strip_quotes(raw_value).to_string())?;
    }
    Ok(())
}

fn strip_quotes(text: &str) -> &str {
    text.trim_matches('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptree_core::TreeErrorKind;

    fn decode(text: &str, policy: ConflictPolicy) -> TreeResult<Tree> {
        let config = PathValueConfig {
            policy,
            ..PathValueConfig::default()
        };
        from_path_value(text, &config)
    }

    #[test]
    fn test_nested_paths_share_parents() {
        let tree = decode("a/b=1,a/c=2,d=3", ConflictPolicy::NoCheck).unwrap();
        assert_eq!(tree.len(), 2);
        let a = tree.get("a").unwrap();
        assert_eq!(a.get("b").unwrap().value(), Some("1"));
        assert_eq!(a.get("c").unwrap().value(), Some("2"));
    }

    #[test]
    fn test_quotes_stripped_only() {
        let tree = decode(r#""a b"="x\ty""#, ConflictPolicy::NoCheck).unwrap();
        assert_eq!(tree.get("a b").unwrap().value(), Some(r"x\ty"));
    }

    #[test]
    fn test_value_keeps_later_equal_signs() {
        let tree = decode("expr=a=b", ConflictPolicy::NoCheck).unwrap();
        assert_eq!(tree.get("expr").unwrap().value(), Some("a=b"));
    }

    #[test]
    fn test_blank_fragments_skipped() {
        let tree = decode(",a=1,, ,b=2,", ConflictPolicy::UniqueInput).unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_missing_assignment_is_malformed() {
        let err = decode("a=1,broken", ConflictPolicy::NoCheck).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::MalformedInput);
        assert!(err.message.contains("expected ','-separated path=value pairs"));
        assert_eq!(err.context.as_deref(), Some("broken"));
    }

    #[test]
    fn test_repeated_path_per_policy() {
        let input = r#"a/b="1",a/b="2""#;

        let tree = decode(input, ConflictPolicy::NoCheck).unwrap();
        assert_eq!(tree.get("a").unwrap().get("b").unwrap().value(), Some("2"));

        let tree = decode(input, ConflictPolicy::TakeLast).unwrap();
        assert_eq!(tree.get("a").unwrap().get("b").unwrap().value(), Some("2"));

        let err = decode(input, ConflictPolicy::UniqueInput).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::ConflictViolation);
        assert_eq!(err.context.as_deref(), Some("a/b"));

        let err = decode(input, ConflictPolicy::NoOverwrite).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::ConflictViolation);
    }

    #[test]
    fn test_unique_input_state_is_per_call() {
        let config = PathValueConfig {
            policy: ConflictPolicy::UniqueInput,
            ..PathValueConfig::default()
        };
        let mut tree = Tree::new();
        from_path_value_into(&mut tree, "a=1", &config).unwrap();
        from_path_value_into(&mut tree, "a=2", &config).unwrap();
        assert_eq!(tree.get("a").unwrap().value(), Some("2"));
    }

    #[test]
    fn test_no_overwrite_sees_existing_tree() {
        let config = PathValueConfig {
            policy: ConflictPolicy::NoOverwrite,
            ..PathValueConfig::default()
        };
        let mut tree = Tree::new();
        from_path_value_into(&mut tree, "a=1", &config).unwrap();
        let err = from_path_value_into(&mut tree, "b=2,a=3", &config).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::ConflictViolation);
        // partial result is kept
        assert_eq!(tree.get("b").unwrap().value(), Some("2"));
        assert_eq!(tree.get("a").unwrap().value(), Some("1"));
    }

    #[test]
    fn test_custom_characters() {
        let config = PathValueConfig {
            equal_sign: ':',
            delimiter: ';',
            ..PathValueConfig::default()
        };
        let tree = from_path_value("a/b:1;c:x=y", &config).unwrap();
        assert_eq!(tree.get("a").unwrap().get("b").unwrap().value(), Some("1"));
        assert_eq!(tree.get("c").unwrap().value(), Some("x=y"));
    }

    #[test]
    fn test_empty_path_is_an_unnamed_child() {
        let expected: Tree = vec![("", Tree::leaf("1"))].into_iter().collect();
        assert_eq!(decode("=1", ConflictPolicy::NoCheck).unwrap(), expected);
        assert_eq!(decode(r#"""="1""#, ConflictPolicy::NoCheck).unwrap(), expected);

        let text = crate::to_path_value(&expected, &PathValueConfig::default());
        assert_eq!(text, r#"="1""#);
        assert_eq!(decode(&text, ConflictPolicy::NoCheck).unwrap(), expected);
    }

    #[test]
    fn test_reader_joins_lines() {
        let input = "# settings\na/b=\"1\"\n\n  # more\nc=\"2\"\n";
        let tree = from_path_value_reader(input.as_bytes(), &PathValueConfig::default()).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get("c").unwrap().value(), Some("2"));
    }
}
