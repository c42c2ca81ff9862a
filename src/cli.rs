// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the listeq command-line interface.
//!
//! Two positional JSON documents, compared as lists. Exit status is 0 when
//! equal, 1 when they differ or can't be compared as lists, 2 when a document
//! can't be read or parsed.

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "listeq",
    about = "Compare two JSON lists and describe how they differ",
    version
)]
pub struct Cli {
    /// JSON document holding the obtained list (`-` reads standard input)
    pub obtained: String,

    /// JSON document holding the expected list (`-` reads standard input)
    pub expected: String,

    /// Report format written to standard output
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace)
    ///
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The difference report as plain text, nothing when equal
    Text,
    /// A JSON object with `equal`, `error` and `entries`
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}
