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

//! Command implementations and shared I/O helpers.

mod convert;

pub use convert::convert;

use crate::error::CliError;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Read the whole input into memory, from `path` or from stdin.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(p) => fs::read(p).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| CliError::Stdin(e.to_string()))?;
            Ok(buf)
        }
    }
}

/// Write content to a file or stdout.
///
/// Stdout output is terminated with a newline so shells print it cleanly.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| {
                    if content.ends_with('\n') {
                        Ok(())
                    } else {
                        stdout.write_all(b"\n")
                    }
                })
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::Output(e.to_string()))
        }
    }
}
