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

//! Command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand, ValueEnum};
use proptree::path_value::ConflictPolicy;
use proptree::{Format, IndexMode};
use std::path::PathBuf;

/// Top-level commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use proptree_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a tree from one text format to another
    ///
    /// Reads FILE, or stdin when FILE is omitted, and writes the converted
    /// text to stdout or to the --output file.
    Convert(ConvertArgs),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading, conversion or writing fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Convert(args) => commands::convert(&args),
        }
    }
}

/// Arguments of the `convert` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Input file (defaults to stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Input format
    #[arg(short, long, value_enum, default_value_t = InputFormat::Guess)]
    pub from: InputFormat,

    /// Output format
    #[arg(short, long, value_enum)]
    pub to: OutputFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Assignment character for name-value and path-value text
    #[arg(long, value_name = "CHAR", value_parser = parse_separator)]
    pub equal_sign: Option<char>,

    /// Entry separator for name-value and path-value text (`\n`, `\t`, `\s` accepted)
    #[arg(long, value_name = "CHAR", value_parser = parse_separator)]
    pub delimiter: Option<char>,

    /// Write name-value output one entry per line, indented by depth
    #[arg(long)]
    pub indented: bool,

    /// Rendering of array indices in path-value output
    #[arg(long, value_enum, default_value_t = IndicesArg::Disabled)]
    pub indices: IndicesArg,

    /// Handling of repeated paths in path-value input
    #[arg(long, value_enum, default_value_t = PolicyArg::NoCheck)]
    pub policy: PolicyArg,

    /// Path prefix for every path-value output line (e.g. `cfg/server`)
    #[arg(long, value_name = "PATH")]
    pub root: Option<String>,

    /// Pretty print JSON and XML output
    #[arg(short, long)]
    pub pretty: bool,

    /// Omit the XML declaration
    #[arg(long)]
    pub no_declaration: bool,
}

/// Input format, or `guess` to run format detection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Guess,
    NameValue,
    PathValue,
    Json,
    Xml,
}

impl InputFormat {
    /// The concrete format, or `None` for `guess`.
    pub fn format(self) -> Option<Format> {
        match self {
            InputFormat::Guess => None,
            InputFormat::NameValue => Some(Format::NameValue),
            InputFormat::PathValue => Some(Format::PathValue),
            InputFormat::Json => Some(Format::Json),
            InputFormat::Xml => Some(Format::Xml),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    NameValue,
    PathValue,
    Json,
    Xml,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::NameValue => Format::NameValue,
            OutputFormat::PathValue => Format::PathValue,
            OutputFormat::Json => Format::Json,
            OutputFormat::Xml => Format::Xml,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicesArg {
    #[default]
    Disabled,
    WithBrackets,
    WithoutBrackets,
}

impl From<IndicesArg> for IndexMode {
    fn from(arg: IndicesArg) -> Self {
        match arg {
            IndicesArg::Disabled => IndexMode::Disabled,
            IndicesArg::WithBrackets => IndexMode::WithBrackets,
            IndicesArg::WithoutBrackets => IndexMode::WithoutBrackets,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyArg {
    #[default]
    NoCheck,
    TakeLast,
    UniqueInput,
    NoOverwrite,
}

impl From<PolicyArg> for ConflictPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::NoCheck => ConflictPolicy::NoCheck,
            PolicyArg::TakeLast => ConflictPolicy::TakeLast,
            PolicyArg::UniqueInput => ConflictPolicy::UniqueInput,
            PolicyArg::NoOverwrite => ConflictPolicy::NoOverwrite,
        }
    }
}

/// Parse a separator argument: one character, or `\n`, `\t`, `\s`.
pub fn parse_separator(arg: &str) -> Result<char, String> {
    match arg {
        "\\n" => return Ok('\n'),
        "\\t" => return Ok('\t'),
        "\\s" => return Ok(' '),
        _ => {}
    }
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!(
            "expected a single character or one of \\n, \\t, \\s; got \"{}\"",
            arg
        )),
    }
}
