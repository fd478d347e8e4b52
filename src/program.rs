// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Data model for validated IPPcode20 programs.

use crate::instructions::OperandKind;

/// Language tag carried by every serialized program.
pub const LANGUAGE: &str = "IPPcode20";

/// Variable storage scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Local,
    Temporary,
    Global,
}

impl Frame {
    /// The two-letter prefix used in source text.
    pub fn prefix(self) -> &'static str {
        match self {
            Frame::Local => "LF",
            Frame::Temporary => "TF",
            Frame::Global => "GF",
        }
    }

    /// Resolve a frame from its source prefix. Prefixes are uppercase only.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "LF" => Some(Frame::Local),
            "TF" => Some(Frame::Temporary),
            "GF" => Some(Frame::Global),
            _ => None,
        }
    }
}

/// Type name accepted in a `Type` operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Int,
    String,
    Bool,
}

impl TypeName {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::String => "string",
            TypeName::Bool => "bool",
        }
    }

    /// Type names are lowercase only; no folding is applied.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "int" => Some(TypeName::Int),
            "string" => Some(TypeName::String),
            "bool" => Some(TypeName::Bool),
            _ => None,
        }
    }
}

/// A validated operand.
///
/// The variant is always one compatible with the signature slot it fills;
/// [`Operand::fits`] confirms that at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Var { frame: Frame, name: String },
    /// Raw digit/sign run after `int@`, preserved verbatim for output.
    IntLiteral { raw: String },
    /// Escape sequences are preserved, not decoded.
    StringLiteral { raw: String },
    BoolLiteral { value: bool },
    NilLiteral,
    TypeLiteral { kind: TypeName },
    LabelRef { name: String },
}

impl Operand {
    /// The `type` attribute value used in the output tree.
    pub fn type_attr(&self) -> &'static str {
        match self {
            Operand::Var { .. } => "var",
            Operand::IntLiteral { .. } => "int",
            Operand::StringLiteral { .. } => "string",
            Operand::BoolLiteral { .. } => "bool",
            Operand::NilLiteral => "nil",
            Operand::TypeLiteral { .. } => "type",
            Operand::LabelRef { .. } => "label",
        }
    }

    /// Text value for the output tree: the token with its kind prefix
    /// stripped. Variables keep the full `FRAME@name` token.
    pub fn render(&self) -> String {
        match self {
            Operand::Var { frame, name } => format!("{}@{}", frame.prefix(), name),
            Operand::IntLiteral { raw } => raw.clone(),
            Operand::StringLiteral { raw } => raw.clone(),
            Operand::BoolLiteral { value } => value.to_string(),
            Operand::NilLiteral => "nil".to_string(),
            Operand::TypeLiteral { kind } => kind.as_str().to_string(),
            Operand::LabelRef { name } => name.clone(),
        }
    }

    /// Best-effort numeric value of an integer literal. The grammar admits
    /// sign runs that are not valid integers; those yield `None`.
    pub fn int_value(&self) -> Option<i64> {
        match self {
            Operand::IntLiteral { raw } => raw.parse().ok(),
            _ => None,
        }
    }

    /// Whether this operand may fill a slot of the given kind.
    pub fn fits(&self, kind: OperandKind) -> bool {
        match kind {
            OperandKind::Variable => matches!(self, Operand::Var { .. }),
            OperandKind::Symbol => matches!(
                self,
                Operand::Var { .. }
                    | Operand::IntLiteral { .. }
                    | Operand::StringLiteral { .. }
                    | Operand::BoolLiteral { .. }
                    | Operand::NilLiteral
            ),
            OperandKind::Label => matches!(self, Operand::LabelRef { .. }),
            OperandKind::Type => matches!(self, Operand::TypeLiteral { .. }),
        }
    }
}

/// One validated instruction. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based sequential index, assigned only to validated lines.
    pub order: u32,
    /// Canonical uppercase mnemonic.
    pub opcode: String,
    pub operands: Vec<Operand>,
}

/// Ordered sequence of validated instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, Operand, TypeName};
    use crate::instructions::OperandKind;

    #[test]
    fn variable_render_round_trips() {
        let op = Operand::Var {
            frame: Frame::Global,
            name: "x-y?".to_string(),
        };
        assert_eq!(op.render(), "GF@x-y?");
        assert_eq!(op.type_attr(), "var");
    }

    #[test]
    fn frame_prefix_round_trips() {
        for frame in [Frame::Local, Frame::Temporary, Frame::Global] {
            assert_eq!(Frame::from_prefix(frame.prefix()), Some(frame));
        }
        assert_eq!(Frame::from_prefix("gf"), None);
    }

    #[test]
    fn symbol_slot_accepts_variables_and_literals_only() {
        let var = Operand::Var {
            frame: Frame::Local,
            name: "a".to_string(),
        };
        let type_lit = Operand::TypeLiteral {
            kind: TypeName::Int,
        };
        let label = Operand::LabelRef {
            name: "loop".to_string(),
        };
        assert!(var.fits(OperandKind::Symbol));
        assert!(Operand::NilLiteral.fits(OperandKind::Symbol));
        assert!(!type_lit.fits(OperandKind::Symbol));
        assert!(!label.fits(OperandKind::Symbol));
        assert!(!Operand::NilLiteral.fits(OperandKind::Variable));
    }

    #[test]
    fn int_value_is_best_effort() {
        let ok = Operand::IntLiteral {
            raw: "-42".to_string(),
        };
        let odd = Operand::IntLiteral {
            raw: "+-".to_string(),
        };
        assert_eq!(ok.int_value(), Some(-42));
        assert_eq!(odd.int_value(), None);
        assert_eq!(odd.render(), "+-");
    }
}
