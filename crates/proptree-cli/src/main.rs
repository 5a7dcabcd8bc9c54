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

//! PropTree Command Line Interface

use clap::Parser;
use proptree_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// PropTree - convert property trees between text formats
///
/// # Examples
///
/// ```bash
/// # Flatten a JSON document into path=value lines
/// proptree convert config.json --to path-value --delimiter '\n'
///
/// # Guess the input format from stdin and write XML
/// echo 'doc/a=1' | proptree convert --to xml --pretty
/// ```
#[derive(Parser)]
#[command(name = "proptree")]
#[command(author, version, about = "PropTree - convert property trees between text formats", long_about = None)]
struct Cli {
    /// Log conversion steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so converted output on stdout stays clean.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("proptree=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("proptree=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
