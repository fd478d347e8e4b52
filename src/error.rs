// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Error types and process exit codes for the parser.

use std::fmt;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for invalid command-line argument combinations.
pub const EXIT_ARGUMENT_ERROR: i32 = 10;
/// Exit code when the input file cannot be opened or read.
pub const EXIT_INPUT_FILE_ERROR: i32 = 11;
/// Exit code when the output or stats file cannot be written.
pub const EXIT_OUTPUT_FILE_ERROR: i32 = 12;

/// Categories of parse failures.
///
/// Every kind is terminal: the pass stops at the first violation and no
/// partial program is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input lacks the mandatory `.IPPcode20` header before the first
    /// real line.
    InvalidHeader,
    /// First token of a non-comment line is not a recognized opcode.
    InvalidOpCode,
    /// Wrong operand count, an operand failing its grammar rule, or
    /// trailing non-comment tokens.
    LexicalOrSyntax,
    /// A validated operand does not fit its signature slot. Unreachable
    /// with a well-formed table, but checked rather than assumed.
    Internal,
}

impl ParseErrorKind {
    /// Process exit code surfaced by the CLI layer for this kind.
    pub fn exit_code(self) -> i32 {
        match self {
            ParseErrorKind::InvalidHeader => 21,
            ParseErrorKind::InvalidOpCode => 22,
            ParseErrorKind::LexicalOrSyntax => 23,
            ParseErrorKind::Internal => 99,
        }
    }
}

/// A parse error with its kind, message, and 1-based source line number.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: u32,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}
