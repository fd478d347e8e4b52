// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Per-kind operand token classifiers.
//!
//! Each classifier is a pure function of the token text: it either produces
//! the tagged operand variant or rejects the token. The line parser maps a
//! rejection to a lexical/syntax error for the slot being filled.

use crate::error::{ParseError, ParseErrorKind};
use crate::instructions::OperandKind;
use crate::program::{Frame, Operand, TypeName};

/// Validate a raw token against the lexical rule of a signature slot.
pub fn classify(token: &str, kind: OperandKind, line: u32) -> Result<Operand, ParseError> {
    let operand = match kind {
        OperandKind::Variable => classify_variable(token),
        OperandKind::Symbol => classify_symbol(token),
        OperandKind::Label => classify_label(token),
        OperandKind::Type => classify_type(token),
    };
    operand.ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::LexicalOrSyntax,
            format!("invalid {} operand '{token}'", kind_name(kind)),
            line,
        )
    })
}

fn kind_name(kind: OperandKind) -> &'static str {
    match kind {
        OperandKind::Variable => "variable",
        OperandKind::Symbol => "symbol",
        OperandKind::Label => "label",
        OperandKind::Type => "type",
    }
}

/// `(LF|TF|GF)@` followed by an identifier.
fn classify_variable(token: &str) -> Option<Operand> {
    let (prefix, name) = token.split_once('@')?;
    let frame = Frame::from_prefix(prefix)?;
    if !is_identifier(name) {
        return None;
    }
    Some(Operand::Var {
        frame,
        name: name.to_string(),
    })
}

/// Variable reference or one of the literal forms.
fn classify_symbol(token: &str) -> Option<Operand> {
    if let Some(var) = classify_variable(token) {
        return Some(var);
    }
    let (prefix, value) = token.split_once('@')?;
    match prefix {
        "int" => {
            if !value.is_empty() && value.chars().all(is_int_char) {
                Some(Operand::IntLiteral {
                    raw: value.to_string(),
                })
            } else {
                None
            }
        }
        // Escape sequences stay raw; only whitespace is excluded, and the
        // tokenizer already split on whitespace.
        "string" => {
            if value.chars().all(|c| !c.is_whitespace()) {
                Some(Operand::StringLiteral {
                    raw: value.to_string(),
                })
            } else {
                None
            }
        }
        "bool" => match value.to_ascii_lowercase().as_str() {
            "true" => Some(Operand::BoolLiteral { value: true }),
            "false" => Some(Operand::BoolLiteral { value: false }),
            _ => None,
        },
        "nil" => {
            if value == "nil" {
                Some(Operand::NilLiteral)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Bare identifier with no frame prefix.
fn classify_label(token: &str) -> Option<Operand> {
    if !is_identifier(token) {
        return None;
    }
    Some(Operand::LabelRef {
        name: token.to_string(),
    })
}

/// Exactly `int`, `string`, or `bool`.
fn classify_type(token: &str) -> Option<Operand> {
    TypeName::from_token(token).map(|kind| Operand::TypeLiteral { kind })
}

/// First char in `[A-Za-z_$&%!?*-]`, rest in `[A-Za-z0-9_$&%!?*-]`.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => {}
        _ => return false,
    }
    chars.all(is_ident_char)
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '$' | '&' | '%' | '!' | '?' | '*' | '-')
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_digit() || is_ident_start(c)
}

fn is_int_char(c: char) -> bool {
    c.is_ascii_digit() || c == '+' || c == '-'
}
