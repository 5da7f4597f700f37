//! Outcome reporting for patch application.
//!
//! The report is the engine's only output channel: the launcher frontend
//! renders success, partial-failure, and fallback-suggestion UI from it
//! alone, so every type here crosses the serialization boundary.

use serde::{Deserialize, Serialize};

use crate::parser::PatchCommand;

/// How the buffer was addressed during application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyMode {
    /// The whole document was replaced in one operation.
    FullFile,
    /// Individual line ranges were replaced.
    LineRanges,
}

/// Result of attempting a single command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOutcome {
    pub command: PatchCommand,
    pub applied: bool,
    pub error: Option<String>,
}

/// Complete record of one apply cycle, one outcome per command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyReport {
    pub outcomes: Vec<EditOutcome>,
    pub mode: ApplyMode,
}

impl ApplyReport {
    pub fn applied_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.applied).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.applied_count()
    }

    pub fn all_applied(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.applied)
    }
}
