// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Human-readable formatting of parse errors with source context.

use crate::error::ParseError;

/// Format an error as `file:line: ERROR`, the offending source line, and
/// the message. The source line is colored red when `use_color` is set.
pub fn format_parse_error(
    err: &ParseError,
    file: Option<&str>,
    lines: Option<&[String]>,
    use_color: bool,
) -> String {
    let header = match file {
        Some(file) => format!("{file}:{}: ERROR", err.line),
        None => format!("{}: ERROR", err.line),
    };

    let line_idx = err.line.saturating_sub(1) as usize;
    let line_text = lines
        .and_then(|lines| lines.get(line_idx))
        .map(|s| s.as_str())
        .unwrap_or("<source unavailable>");
    let shown = if use_color {
        format!("\x1b[31m{line_text}\x1b[0m")
    } else {
        line_text.to_string()
    };

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&format!("{:>5} | {}", err.line, shown));
    out.push('\n');
    out.push_str(&format!("ERROR: {}", err.message));
    out
}
