// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// Library entry exposing parser modules.
pub mod cli;
pub mod error;
pub mod instructions;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod program;
pub mod report;
pub mod stats;
