// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for ipparse.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;

use ipparse::cli::{validate_cli, Cli, CliConfig, OutputFormat};
use ipparse::error::{
    EXIT_ARGUMENT_ERROR, EXIT_INPUT_FILE_ERROR, EXIT_OUTPUT_FILE_ERROR, EXIT_SUCCESS,
};
use ipparse::output::{to_json, to_xml};
use ipparse::parser::parse_source;
use ipparse::report::format_parse_error;

fn read_source(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn write_output(output: Option<&Path>, rendered: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, rendered),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()
        }
    }
}

fn run(config: &CliConfig) -> i32 {
    let source = match read_source(config.input.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            return EXIT_INPUT_FILE_ERROR;
        }
    };

    let outcome = match parse_source(&source) {
        Ok(outcome) => outcome,
        Err(err) => {
            let file = config
                .input
                .as_deref()
                .map(|path| path.to_string_lossy().to_string());
            let lines: Vec<String> = source.lines().map(|line| line.to_string()).collect();
            let use_color = std::env::var("NO_COLOR").is_err();
            eprintln!(
                "{}",
                format_parse_error(&err, file.as_deref(), Some(&lines), use_color)
            );
            return err.kind.exit_code();
        }
    };

    let rendered = match config.format {
        OutputFormat::Xml => to_xml(&outcome.program),
        OutputFormat::Json => {
            let mut text = to_json(&outcome.program).to_string();
            text.push('\n');
            text
        }
    };
    if let Err(err) = write_output(config.output.as_deref(), &rendered) {
        eprintln!("Failed to write output: {err}");
        return EXIT_OUTPUT_FILE_ERROR;
    }

    if let Some(stats) = &config.stats {
        if let Err(err) = fs::write(&stats.path, outcome.stats.render(&stats.fields)) {
            eprintln!("Failed to write stats file: {err}");
            return EXIT_OUTPUT_FILE_ERROR;
        }
    }

    EXIT_SUCCESS
}

fn main() {
    let cli = Cli::parse();
    let config = match validate_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(EXIT_ARGUMENT_ERROR);
        }
    };
    std::process::exit(run(&config));
}
