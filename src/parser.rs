// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Line parser and validator for IPPcode20 source text.
//!
//! Consumes the input line by line in one forward pass: skips blank and
//! comment lines, requires the mandatory header before the first real line,
//! then resolves each line to an opcode, validates its operands against the
//! instruction table, and appends one numbered instruction per valid line.
//! The pass is fail-fast: the first violation aborts the run and no partial
//! program is emitted.

use crate::error::{ParseError, ParseErrorKind};
use crate::instructions::signature_of;
use crate::lexer::classify;
use crate::program::{Instruction, Program};
use crate::stats::Stats;

/// The mandatory header directive, matched case-insensitively.
pub const HEADER: &str = ".IPPcode20";

/// A token starting with this marker discards the rest of the line.
pub const COMMENT_MARKER: char = '#';

/// Result of a successful parsing pass.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub program: Program,
    pub stats: Stats,
}

/// Parse and validate a complete source text.
///
/// Input with no non-trivial line at all is a valid empty program; input
/// whose first non-trivial line is not the header fails with
/// [`ParseErrorKind::InvalidHeader`].
pub fn parse_source(source: &str) -> Result<ParseOutcome, ParseError> {
    let mut program = Program::new();
    let mut stats = Stats::new();
    let mut order: u32 = 0;
    let mut header_seen = false;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = idx as u32 + 1;
        // Trim, fold whitespace runs, split. Tabs count as separators.
        let tokens: Vec<&str> = raw_line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens[0].starts_with(COMMENT_MARKER) {
            stats.comments += 1;
            continue;
        }
        if !header_seen {
            if is_header_line(&tokens) {
                header_seen = true;
                continue;
            }
            return Err(ParseError::new(
                ParseErrorKind::InvalidHeader,
                format!("missing '{HEADER}' header"),
                line_no,
            ));
        }
        parse_instruction_line(&tokens, line_no, &mut order, &mut program, &mut stats)?;
    }

    Ok(ParseOutcome { program, stats })
}

/// Header directive, optionally followed by a trailing comment.
fn is_header_line(tokens: &[&str]) -> bool {
    tokens[0].eq_ignore_ascii_case(HEADER)
        && tokens
            .get(1)
            .is_none_or(|token| token.starts_with(COMMENT_MARKER))
}

fn parse_instruction_line(
    tokens: &[&str],
    line: u32,
    order: &mut u32,
    program: &mut Program,
    stats: &mut Stats,
) -> Result<(), ParseError> {
    let opcode = tokens[0].to_ascii_lowercase();
    let signature = signature_of(&opcode).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidOpCode,
            format!("unknown opcode '{}'", tokens[0]),
            line,
        )
    })?;

    if tokens.len() <= signature.len() {
        return Err(ParseError::new(
            ParseErrorKind::LexicalOrSyntax,
            format!(
                "not enough operands for '{opcode}': expected {}, found {}",
                signature.len(),
                tokens.len() - 1
            ),
            line,
        ));
    }

    let mut operands = Vec::with_capacity(signature.len());
    for (slot, kind) in signature.iter().enumerate() {
        let token = tokens[slot + 1];
        let operand = classify(token, *kind, line)?;
        if !operand.fits(*kind) {
            // Unreachable with a well-formed table; checked, not assumed.
            return Err(ParseError::new(
                ParseErrorKind::Internal,
                format!("operand '{token}' does not fit its signature slot"),
                line,
            ));
        }
        operands.push(operand);
    }

    if let Some(extra) = tokens.get(signature.len() + 1) {
        if !extra.starts_with(COMMENT_MARKER) {
            return Err(ParseError::new(
                ParseErrorKind::LexicalOrSyntax,
                format!("unexpected token '{extra}' after instruction"),
                line,
            ));
        }
        stats.comments += 1;
    }

    if opcode == "label" {
        stats.record_label(tokens[1]);
    }
    if matches!(opcode.as_str(), "jump" | "jumpifeq" | "jumpifneq") {
        stats.jumps += 1;
    }
    stats.loc += 1;

    *order += 1;
    program.push(Instruction {
        order: *order,
        opcode: opcode.to_ascii_uppercase(),
        operands,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_source;
    use crate::error::ParseErrorKind;
    use crate::program::{Frame, Operand};

    #[test]
    fn header_only_is_an_empty_program() {
        let outcome = parse_source(".IPPcode20\n").unwrap();
        assert!(outcome.program.is_empty());
        assert_eq!(outcome.stats.loc, 0);
    }

    #[test]
    fn empty_input_is_an_empty_program() {
        let outcome = parse_source("").unwrap();
        assert!(outcome.program.is_empty());
    }

    #[test]
    fn header_is_case_insensitive_and_allows_trailing_comment() {
        assert!(parse_source(".ippCODE20\n").is_ok());
        assert!(parse_source(".IPPcode20 # entry\n").is_ok());
    }

    #[test]
    fn comments_and_blanks_before_header_are_skipped() {
        let outcome = parse_source("\n# prologue\n\n.IPPcode20\nBREAK\n").unwrap();
        assert_eq!(outcome.program.len(), 1);
        assert_eq!(outcome.stats.comments, 1);
    }

    #[test]
    fn missing_header_fails_without_instructions() {
        let err = parse_source("DEFVAR GF@x\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidHeader);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn header_line_with_trailing_garbage_is_invalid() {
        let err = parse_source(".IPPcode20 extra\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidHeader);
    }

    #[test]
    fn spec_scenario_two_instructions() {
        let outcome = parse_source(".IPPcode20\nDEFVAR GF@x\nMOVE GF@x int@5\n").unwrap();
        let instructions = outcome.program.instructions();
        assert_eq!(instructions.len(), 2);

        assert_eq!(instructions[0].order, 1);
        assert_eq!(instructions[0].opcode, "DEFVAR");
        assert_eq!(
            instructions[0].operands,
            vec![Operand::Var {
                frame: Frame::Global,
                name: "x".to_string()
            }]
        );

        assert_eq!(instructions[1].order, 2);
        assert_eq!(instructions[1].opcode, "MOVE");
        assert_eq!(
            instructions[1].operands,
            vec![
                Operand::Var {
                    frame: Frame::Global,
                    name: "x".to_string()
                },
                Operand::IntLiteral {
                    raw: "5".to_string()
                },
            ]
        );
    }

    #[test]
    fn order_numbers_skip_comment_lines() {
        let src = ".IPPcode20\nCREATEFRAME\n# between\nPUSHFRAME\n";
        let outcome = parse_source(src).unwrap();
        let orders: Vec<u32> = outcome
            .program
            .instructions()
            .iter()
            .map(|i| i.order)
            .collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn too_few_operands_is_a_syntax_error() {
        let err = parse_source(".IPPcode20\nADD GF@x GF@y\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::LexicalOrSyntax);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn unknown_opcode_is_reported_as_such() {
        let err = parse_source(".IPPcode20\nFOOBAR GF@x\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidOpCode);
    }

    #[test]
    fn trailing_non_comment_token_is_a_syntax_error() {
        let err = parse_source(".IPPcode20\nMOVE GF@x int@5 extra\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::LexicalOrSyntax);
    }

    #[test]
    fn trailing_comment_token_is_accepted() {
        let outcome = parse_source(".IPPcode20\nMOVE GF@x int@5 #note\n").unwrap();
        assert_eq!(outcome.program.len(), 1);
        assert_eq!(outcome.stats.comments, 1);
    }

    #[test]
    fn opcode_lookup_is_case_insensitive() {
        let outcome = parse_source(".IPPcode20\ndEfVaR GF@x\n").unwrap();
        assert_eq!(outcome.program.instructions()[0].opcode, "DEFVAR");
    }

    #[test]
    fn bad_operand_shape_is_a_syntax_error() {
        let err = parse_source(".IPPcode20\nDEFVAR GF@1bad\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::LexicalOrSyntax);
    }

    #[test]
    fn whitespace_runs_and_tabs_separate_tokens() {
        let outcome = parse_source(".IPPcode20\n\tMOVE\t GF@x   int@5\n").unwrap();
        assert_eq!(outcome.program.len(), 1);
    }

    #[test]
    fn stats_count_loc_comments_labels_jumps() {
        let src = "\
# head
.IPPcode20
LABEL main
LABEL main
LABEL other
JUMP main # back
JUMPIFEQ main nil@nil nil@nil
WRITE string@done
";
        let outcome = parse_source(src).unwrap();
        assert_eq!(outcome.stats.loc, 6);
        assert_eq!(outcome.stats.comments, 2);
        assert_eq!(outcome.stats.labels(), 2);
        assert_eq!(outcome.stats.jumps, 2);
    }

    #[test]
    fn read_takes_a_type_operand() {
        let outcome = parse_source(".IPPcode20\nREAD GF@x int\n").unwrap();
        let operands = &outcome.program.instructions()[0].operands;
        assert_eq!(operands[1].type_attr(), "type");
        let err = parse_source(".IPPcode20\nREAD GF@x float\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::LexicalOrSyntax);
    }

    #[test]
    fn failure_stops_before_later_lines() {
        // The bad line reports; the valid line after it is never reached.
        let err = parse_source(".IPPcode20\nFOO\nDEFVAR GF@x\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidOpCode);
        assert_eq!(err.line, 2);
    }
}
