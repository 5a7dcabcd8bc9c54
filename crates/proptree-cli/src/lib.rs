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

//! PropTree CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **convert**: read a tree in one format and write it in another. The
//!   input format can be guessed (JSON, then XML, then path-value).
//!
//! # Examples
//!
//! ```no_run
//! use proptree_cli::cli::{ConvertArgs, InputFormat, OutputFormat};
//! use proptree_cli::commands::convert;
//!
//! # fn main() -> Result<(), proptree_cli::error::CliError> {
//! let args = ConvertArgs {
//!     file: Some("config.json".into()),
//!     from: InputFormat::Guess,
//!     to: OutputFormat::PathValue,
//!     ..ConvertArgs::default()
//! };
//! convert(&args)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Commands return `Result<(), CliError>`; conversion failures keep the
//! underlying [`proptree::TreeError`] so its kind and context survive.

pub mod cli;
pub mod commands;
pub mod error;
