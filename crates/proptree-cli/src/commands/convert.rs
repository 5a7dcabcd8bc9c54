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

//! The `convert` command.

use crate::cli::ConvertArgs;
use crate::error::CliError;
use proptree::json::from_json_reader;
use proptree::name_value::from_name_value_reader;
use proptree::path_value::from_path_value_reader;
use proptree::xml::from_xml_reader;
use proptree::{from_unknown, ConvertConfig, Format, Path, Tree};
use std::io::Cursor;
use tracing::{debug, info};

/// Convert the input named by `args` and write the result.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or decoded, the tree cannot be
/// encoded in the target format, or the output cannot be written.
pub fn convert(args: &ConvertArgs) -> Result<(), CliError> {
    let config = build_config(args)?;
    let input = super::read_input(args.file.as_deref())?;
    debug!(bytes = input.len(), "read input");

    let tree = decode(&input, args, &config)?;
    let to = Format::from(args.to);
    let output = to.encode(&tree, &config)?;
    info!(from = ?args.from, %to, "converted");

    super::write_output(&output, args.output.as_deref())
}

fn decode(input: &[u8], args: &ConvertArgs, config: &ConvertConfig) -> Result<Tree, CliError> {
    let tree = match args.from.format() {
        None => from_unknown(Cursor::new(input), &config.path_value)?,
        Some(Format::NameValue) => from_name_value_reader(input, &config.name_value)?,
        Some(Format::PathValue) => from_path_value_reader(input, &config.path_value)?,
        Some(Format::Json) => from_json_reader(input)?,
        Some(Format::Xml) => from_xml_reader(input)?,
    };
    Ok(tree)
}

fn build_config(args: &ConvertArgs) -> Result<ConvertConfig, CliError> {
    let mut config = ConvertConfig::default();

    if let Some(eq) = args.equal_sign {
        config.name_value.equal_sign = eq;
        config.path_value.equal_sign = eq;
    }
    if let Some(delim) = args.delimiter {
        config.name_value.delimiter = delim;
        config.path_value.delimiter = delim;
    }
    if config.path_value.equal_sign == config.path_value.delimiter {
        return Err(CliError::InvalidInput(format!(
            "equal sign and delimiter must differ; both are {:?}",
            config.path_value.delimiter
        )));
    }

    config.name_value.indented = args.indented;
    config.path_value.indices = args.indices.into();
    config.path_value.policy = args.policy.into();
    if let Some(root) = &args.root {
        config.path_value.root = root.parse::<Path>()?;
    }
    config.json.pretty = args.pretty;
    config.xml.pretty = args.pretty;
    config.xml.declaration = !args.no_declaration;

    Ok(config)
}
