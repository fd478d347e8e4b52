// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! XML and JSON rendering of the parsed instruction tree.
//!
//! XML mirrors the reference layout: declaration line, two-space indent,
//! `argN` children in operand order, and a self-closing root for an empty
//! program. JSON renders the same tree for machine consumption.

use serde_json::{json, Value};

use crate::program::{Program, LANGUAGE};

/// Render the program as a formatted XML document.
pub fn to_xml(program: &Program) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    if program.is_empty() {
        out.push_str(&format!("<program language=\"{LANGUAGE}\"/>\n"));
        return out;
    }
    out.push_str(&format!("<program language=\"{LANGUAGE}\">\n"));
    for instruction in program.instructions() {
        out.push_str(&format!(
            "  <instruction order=\"{}\" opcode=\"{}\">\n",
            instruction.order,
            escape_xml(&instruction.opcode)
        ));
        for (idx, operand) in instruction.operands.iter().enumerate() {
            out.push_str(&format!(
                "    <arg{n} type=\"{ty}\">{text}</arg{n}>\n",
                n = idx + 1,
                ty = operand.type_attr(),
                text = escape_xml(&operand.render())
            ));
        }
        out.push_str("  </instruction>\n");
    }
    out.push_str("</program>\n");
    out
}

/// Render the program as a JSON document.
pub fn to_json(program: &Program) -> Value {
    let instructions: Vec<Value> = program
        .instructions()
        .iter()
        .map(|instruction| {
            json!({
                "order": instruction.order,
                "opcode": instruction.opcode,
                "args": instruction
                    .operands
                    .iter()
                    .map(|operand| {
                        json!({
                            "type": operand.type_attr(),
                            "value": operand.render(),
                        })
                    })
                    .collect::<Vec<Value>>(),
            })
        })
        .collect();
    json!({
        "language": LANGUAGE,
        "instructions": instructions,
    })
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
