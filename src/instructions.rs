// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Fixed instruction table for the IPPcode20 instruction set.

/// Kind of operand a signature slot expects.
///
/// Determines which lexical rule validates the raw token in that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// Frame-qualified variable reference only.
    Variable,
    /// Variable reference or any literal.
    Symbol,
    /// Bare label identifier.
    Label,
    /// One of the type names `int`, `string`, `bool`.
    Type,
}

/// One instruction table entry: mnemonic plus its ordered operand kinds.
pub struct InstructionEntry {
    pub mnemonic: &'static str,
    pub operands: &'static [OperandKind],
}

use OperandKind::{Label, Symbol, Type, Variable};

/// The complete IPPcode20 instruction set.
pub static INSTRUCTION_TABLE: &[InstructionEntry] = &[
    InstructionEntry {
        mnemonic: "move",
        operands: &[Variable, Symbol],
    },
    InstructionEntry {
        mnemonic: "createframe",
        operands: &[],
    },
    InstructionEntry {
        mnemonic: "pushframe",
        operands: &[],
    },
    InstructionEntry {
        mnemonic: "popframe",
        operands: &[],
    },
    InstructionEntry {
        mnemonic: "defvar",
        operands: &[Variable],
    },
    InstructionEntry {
        mnemonic: "call",
        operands: &[Label],
    },
    InstructionEntry {
        mnemonic: "return",
        operands: &[],
    },
    InstructionEntry {
        mnemonic: "pushs",
        operands: &[Symbol],
    },
    InstructionEntry {
        mnemonic: "pops",
        operands: &[Variable],
    },
    InstructionEntry {
        mnemonic: "add",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "sub",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "mul",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "idiv",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "lt",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "gt",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "eq",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "and",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "or",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "not",
        operands: &[Variable, Symbol],
    },
    InstructionEntry {
        mnemonic: "int2char",
        operands: &[Variable, Symbol],
    },
    InstructionEntry {
        mnemonic: "stri2int",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "read",
        operands: &[Variable, Type],
    },
    InstructionEntry {
        mnemonic: "write",
        operands: &[Symbol],
    },
    InstructionEntry {
        mnemonic: "concat",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "strlen",
        operands: &[Variable, Symbol],
    },
    InstructionEntry {
        mnemonic: "getchar",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "setchar",
        operands: &[Variable, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "type",
        operands: &[Variable, Symbol],
    },
    InstructionEntry {
        mnemonic: "label",
        operands: &[Label],
    },
    InstructionEntry {
        mnemonic: "jump",
        operands: &[Label],
    },
    InstructionEntry {
        mnemonic: "jumpifeq",
        operands: &[Label, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "jumpifneq",
        operands: &[Label, Symbol, Symbol],
    },
    InstructionEntry {
        mnemonic: "exit",
        operands: &[Symbol],
    },
    InstructionEntry {
        mnemonic: "dprint",
        operands: &[Symbol],
    },
    InstructionEntry {
        mnemonic: "break",
        operands: &[],
    },
];

/// Look up the operand signature of an opcode, case-insensitively.
pub fn signature_of(opcode: &str) -> Option<&'static [OperandKind]> {
    INSTRUCTION_TABLE
        .iter()
        .find(|entry| entry.mnemonic.eq_ignore_ascii_case(opcode))
        .map(|entry| entry.operands)
}
