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

//! Escape/quote tokenizer for name-value text.
//!
//! Rewrites `key=value,key={...}` text into the whitespace-delimited block
//! grammar read by [`crate::info`]. A single left-to-right scan carries two
//! flags:
//!
//! - `escaped`: set by an unescaped backslash, holds for exactly one
//!   character, which is copied literally and never treated as a quote,
//!   separator, assignment or brace
//! - `quoted`: toggled by an unescaped double quote; while set, assignment,
//!   separator and brace characters are copied literally
//!
//! Backslashes and quotes keep their meaning inside quoted regions.
//! Backslashes and quotes themselves are always copied; the block parser
//! resolves them.

use proptree_core::{TreeError, TreeResult};

/// Tokenize name-value text.
///
/// Unquoted assignment and separator characters become spaces and unquoted
/// braces are surrounded by spaces. Everything else is copied unchanged.
///
/// # Errors
///
/// Returns `MalformedInput` if a quoted region is never closed.
///
/// # Examples
///
/// ```rust
/// use proptree_name_value::tokenize;
///
/// assert_eq!(tokenize("a=1,b={c=2}", '=', ',').unwrap(), "a 1 b  { c 2 } ");
/// assert_eq!(tokenize(r#"a="x=y""#, '=', ',').unwrap(), r#"a "x=y""#);
/// ```
pub fn tokenize(text: &str, equal_sign: char, delimiter: char) -> TreeResult<String> {
    let mut out = String::with_capacity(text.len() + 16);
    let mut escaped = false;
    let mut quoted = false;

    for c in text.chars() {
        if escaped {
            escaped = false;
            out.push(c);
            continue;
        }
        match c {
            '\\' => {
                escaped = true;
                out.push(c);
            }
            '"' => {
                quoted = !quoted;
                out.push(c);
            }
            '{' | '}' if !quoted => {
                out.push(' ');
                out.push(c);
                out.push(' ');
            }
            c if !quoted && (c == equal_sign || c == delimiter) => out.push(' '),
            c => out.push(c),
        }
    }

    if quoted {
        return Err(TreeError::malformed("unterminated quote", text));
    }
    Ok(out)
}
