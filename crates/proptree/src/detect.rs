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

//! Format detection for input of unknown type.

use crate::{ConvertConfig, Format};
use proptree_core::{Tree, TreeError, TreeResult};
use proptree_path_value::{from_path_value_reader, PathValueConfig};
use std::io::{Read, Seek, SeekFrom};
use tracing::debug;

const GUESS_ORDER: [Format; 3] = [Format::Json, Format::Xml, Format::PathValue];

/// Decode a stream whose format is not known.
///
/// JSON is tried first, then XML, then path-value with `config`. Each
/// attempt rewinds the stream and reads it whole. An attempt that fails on
/// the content, including invalid UTF-8, moves on to the next format; a
/// failed seek or read is returned at once as `Io`. If every format fails,
/// the result is `FormatUndetermined`.
pub fn from_unknown<R: Read + Seek>(mut stream: R, config: &PathValueConfig) -> TreeResult<Tree> {
    let config = ConvertConfig {
        path_value: config.clone(),
        ..ConvertConfig::default()
    };
    for format in GUESS_ORDER {
        let result = read_all(&mut stream)?.and_then(|text| decode(format, &text, &config));
        match result {
            Ok(tree) => {
                debug!(%format, "format detected");
                return Ok(tree);
            }
            Err(e) if e.is_structural() => {
                debug!(%format, error = %e, "format rejected");
            }
            Err(e) => return Err(e),
        }
    }
    Err(TreeError::format_undetermined())
}

/// Path-value input goes through the line reader, so one assignment per
/// line and `#` comment lines work as they do in files.
fn decode(format: Format, text: &str, config: &ConvertConfig) -> TreeResult<Tree> {
    match format {
        Format::PathValue => from_path_value_reader(text.as_bytes(), &config.path_value),
        _ => format.decode(text, config),
    }
}

/// The outer result carries stream failures, the inner one bad UTF-8.
fn read_all<R: Read + Seek>(stream: &mut R) -> TreeResult<TreeResult<String>> {
    stream.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes)?;
    Ok(String::from_utf8(bytes).map_err(|e| {
        TreeError::new(
            proptree_core::TreeErrorKind::MalformedInput,
            format!("input is not UTF-8: {e}"),
        )
    }))
}
