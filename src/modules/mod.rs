//! Report commands
//!
//! Each command renders a complete text report into a [`Report`]:
//! - explore: package exports and where a contract lives
//! - events: every event of every selected contract, with raw structures
//! - signatures: full ABIs, canonical signatures, topic hashes and Rust constants
//! - describe: one event in detail
//! - topic: reverse lookup from a topic hash to an event

pub mod describe;
pub mod events;
pub mod explore;
pub mod signatures;
pub mod topic;

use serde_json::Value;

/// Line-oriented text output
#[derive(Debug, Default)]
pub struct Report {
    out: String,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text followed by a newline
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    /// Append a value as 2-space indented JSON
    pub fn json(&mut self, value: &Value) {
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        self.line(text);
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
