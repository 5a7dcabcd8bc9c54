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

//! Reader for the whitespace-delimited nested-block grammar.
//!
//! ```text
//! entries := entry*
//! entry   := key [value] [ '{' entries '}' ]
//! ```
//!
//! Keys and values are bare words or double-quoted strings. A value must
//! sit on the same line as its key; a block may open on a following line.
//! Both forms resolve backslash escapes. The reader keeps an explicit stack
//! of open blocks, so nesting depth is bounded by memory only.

use proptree_core::{Tree, TreeError, TreeResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Newline,
    Text(String),
}

struct Frame {
    key: String,
    children: Vec<(String, Tree)>,
}

/// Parse block-grammar text into a tree.
pub fn parse(input: &str) -> TreeResult<Tree> {
    let tokens = lex(input)?;
    let mut stack: Vec<Frame> = vec![Frame {
        key: String::new(),
        children: Vec::new(),
    }];
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Newline => i += 1,
            Token::Open => return Err(TreeError::malformed("block without a key", "{")),
            Token::Close => {
                if stack.len() == 1 {
                    return Err(TreeError::malformed("unmatched closing brace", "}"));
                }
                let frame = pop(&mut stack)?;
                top(&mut stack)?
                    .children
                    .push((frame.key, Tree::Internal(frame.children)));
                i += 1;
            }
            Token::Text(key) => {
                let key = key.clone();
                i += 1;

                let mut value = None;
                if let Some(Token::Text(v)) = tokens.get(i) {
                    value = Some(v.clone());
                    i += 1;
                }

                let mut j = i;
                while tokens.get(j) == Some(&Token::Newline) {
                    j += 1;
                }
                if tokens.get(j) == Some(&Token::Open) {
                    if value.is_some() {
                        return Err(TreeError::malformed(
                            "key carries both a value and a block",
                            key,
                        ));
                    }
                    stack.push(Frame {
                        key,
                        children: Vec::new(),
                    });
                    i = j + 1;
                } else {
                    top(&mut stack)?
                        .children
                        .push((key, Tree::Leaf(value.unwrap_or_default())));
                }
            }
        }
    }

    if stack.len() > 1 {
        let open = pop(&mut stack)?;
        return Err(TreeError::malformed("missing closing brace", open.key));
    }
    let root = pop(&mut stack)?;
    Ok(Tree::Internal(root.children))
}

fn top(stack: &mut [Frame]) -> TreeResult<&mut Frame> {
    stack
        .last_mut()
        .ok_or_else(|| TreeError::malformed("unbalanced block nesting", ""))
}

fn pop(stack: &mut Vec<Frame>) -> TreeResult<Frame> {
    stack
        .pop()
        .ok_or_else(|| TreeError::malformed("unbalanced block nesting", ""))
}

fn lex(input: &str) -> TreeResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '\n' => tokens.push(Token::Newline),
            c if c.is_whitespace() => {}
            '{' => tokens.push(Token::Open),
            '}' => tokens.push(Token::Close),
            '"' => {
                let mut text = String::new();
                let mut closed = false;
                while let Some((_, c)) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => {
                            if let Some((_, next)) = chars.next() {
                                text.push(unescape(next));
                            }
                        }
                        c => text.push(c),
                    }
                }
                if !closed {
                    return Err(TreeError::malformed(
                        "unterminated quoted string",
                        &input[start..],
                    ));
                }
                tokens.push(Token::Text(text));
            }
            c => {
                let mut text = String::new();
                let mut c = c;
                loop {
                    if c == '\\' {
                        if let Some((_, next)) = chars.next() {
                            text.push(unescape(next));
                        }
                    } else {
                        text.push(c);
                    }
                    match chars.peek() {
                        Some(&(_, n)) if !n.is_whitespace() && n != '{' && n != '}' => {
                            c = n;
                            chars.next();
                        }
                        _ => break,
                    }
                }
                tokens.push(Token::Text(text));
            }
        }
    }
    Ok(tokens)
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_pairs() {
        let tree = parse("a 1 b 2").unwrap();
        let expected: Tree = vec![("a", Tree::leaf("1")), ("b", Tree::leaf("2"))]
            .into_iter()
            .collect();
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_nested_block() {
        let tree = parse("a { b \"x y\" c { } }").unwrap();
        let a = tree.get("a").unwrap();
        assert_eq!(a.get("b").unwrap().value(), Some("x y"));
        assert_eq!(a.get("c").unwrap(), &Tree::new());
    }

    #[test]
    fn test_key_alone_on_line_is_empty_leaf() {
        let tree = parse("a\nb 1").unwrap();
        assert_eq!(tree.get("a").unwrap().value(), Some(""));
        assert_eq!(tree.get("b").unwrap().value(), Some("1"));
    }

    #[test]
    fn test_block_on_next_line() {
        let tree = parse("a\n{\n    b \"1\"\n}\n").unwrap();
        assert_eq!(tree.get("a").unwrap().get("b").unwrap().value(), Some("1"));
    }

    #[test]
    fn test_quoted_empty_key() {
        let tree = parse("x { \"\" 1 \"\" 2 }").unwrap();
        let x = tree.get("x").unwrap();
        assert_eq!(x.len(), 2);
        assert!(x.iter().all(|(k, _)| k.is_empty()));
    }

    #[test]
    fn test_escapes_resolved() {
        let tree = parse(r#"a "x\"y\\z\n" b p\,q"#).unwrap();
        assert_eq!(tree.get("a").unwrap().value(), Some("x\"y\\z\n"));
        assert_eq!(tree.get("b").unwrap().value(), Some("p,q"));
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 2_000;
        let text = format!("{}{}", "a { ".repeat(depth), "} ".repeat(depth));
        let tree = parse(&text).unwrap();
        let mut node = &tree;
        let mut seen = 0;
        while let Some(child) = node.get("a") {
            node = child;
            seen += 1;
        }
        assert_eq!(seen, depth);
    }

    #[test]
    fn test_errors() {
        assert!(parse("}").is_err());
        assert!(parse("a {").is_err());
        assert!(parse("{ a 1 }").is_err());
        assert!(parse("a 1 { b 2 }").is_err());
        assert!(parse("a \"open").is_err());
    }
}
