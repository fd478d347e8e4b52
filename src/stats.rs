// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Source statistics accumulated during the parsing pass.

use std::collections::HashSet;

/// Selectable statistics fields for the stats file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Loc,
    Comments,
    Labels,
    Jumps,
}

/// Counters threaded through the parsing pass.
///
/// Label names are deduplicated so `labels` counts distinct definitions.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub loc: u32,
    pub comments: u32,
    pub jumps: u32,
    label_names: HashSet<String>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `label` definition; repeated names count once.
    pub fn record_label(&mut self, name: &str) {
        if !self.label_names.contains(name) {
            self.label_names.insert(name.to_string());
        }
    }

    pub fn labels(&self) -> u32 {
        self.label_names.len() as u32
    }

    pub fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::Loc => self.loc,
            StatField::Comments => self.comments,
            StatField::Labels => self.labels(),
            StatField::Jumps => self.jumps,
        }
    }

    /// Render the requested counters, one per line.
    pub fn render(&self, fields: &[StatField]) -> String {
        let mut out = String::new();
        for field in fields {
            out.push_str(&self.get(*field).to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{StatField, Stats};

    #[test]
    fn labels_count_distinct_names() {
        let mut stats = Stats::new();
        stats.record_label("main");
        stats.record_label("loop");
        stats.record_label("main");
        assert_eq!(stats.labels(), 2);
    }

    #[test]
    fn render_emits_one_counter_per_line() {
        let mut stats = Stats::new();
        stats.loc = 7;
        stats.comments = 2;
        stats.jumps = 1;
        stats.record_label("end");
        let out = stats.render(&[StatField::Loc, StatField::Jumps, StatField::Labels]);
        assert_eq!(out, "7\n1\n1\n");
        assert_eq!(stats.render(&[]), "");
    }
}
