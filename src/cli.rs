// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::stats::StatField;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const LONG_ABOUT: &str = "Syntax checker for the IPPcode20 instruction language.

Reads source text from FILE or standard input, validates every instruction
against the fixed instruction set, and writes the instruction tree to the
output as XML (default) or JSON. The first violation aborts the run; the
exit code identifies the failure class (21 invalid header, 22 unknown
opcode, 23 lexical/syntax error).";

#[derive(Parser, Debug)]
#[command(
    name = "ipparse",
    version = VERSION,
    about = "IPPcode20 syntax checker producing an XML or JSON instruction tree",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(
        value_name = "FILE",
        long_help = "Input source file. Reads standard input when omitted."
    )]
    pub input: Option<PathBuf>,
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        long_help = "Write the instruction tree to FILE instead of standard output."
    )]
    pub output: Option<PathBuf>,
    #[arg(
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Xml,
        long_help = "Select the serialization format of the instruction tree."
    )]
    pub format: OutputFormat,
    #[arg(
        long = "stats",
        value_name = "FILE",
        long_help = "Write source statistics to FILE. Select counters with --loc, --comments, --labels, and --jumps."
    )]
    pub stats_file: Option<PathBuf>,
    #[arg(
        long = "loc",
        action = ArgAction::SetTrue,
        long_help = "Count successfully validated instructions in the stats file."
    )]
    pub loc: bool,
    #[arg(
        long = "comments",
        action = ArgAction::SetTrue,
        long_help = "Count comment lines and trailing comments in the stats file."
    )]
    pub comments: bool,
    #[arg(
        long = "labels",
        action = ArgAction::SetTrue,
        long_help = "Count distinct defined labels in the stats file."
    )]
    pub labels: bool,
    #[arg(
        long = "jumps",
        action = ArgAction::SetTrue,
        long_help = "Count jump instructions in the stats file."
    )]
    pub jumps: bool,
}

/// Serialization format for the instruction tree.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Xml,
    Json,
}

/// Stats output request: target file plus selected counters.
#[derive(Debug, Clone)]
pub struct StatsRequest {
    pub path: PathBuf,
    pub fields: Vec<StatField>,
}

/// Validated CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub stats: Option<StatsRequest>,
}

/// Semantic argument error, surfaced with exit code 10.
#[derive(Debug, Clone)]
pub struct CliError {
    pub message: String,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Check flag combinations clap cannot express and build the run config.
pub fn validate_cli(cli: &Cli) -> Result<CliConfig, CliError> {
    let mut fields = Vec::new();
    if cli.loc {
        fields.push(StatField::Loc);
    }
    if cli.comments {
        fields.push(StatField::Comments);
    }
    if cli.labels {
        fields.push(StatField::Labels);
    }
    if cli.jumps {
        fields.push(StatField::Jumps);
    }

    let stats = match (&cli.stats_file, fields.is_empty()) {
        (Some(path), _) => Some(StatsRequest {
            path: path.clone(),
            fields,
        }),
        (None, false) => {
            return Err(CliError {
                message: "statistics flags require --stats FILE".to_string(),
            });
        }
        (None, true) => None,
    };

    Ok(CliConfig {
        input: cli.input.clone(),
        output: cli.output.clone(),
        format: cli.format,
        stats,
    })
}
