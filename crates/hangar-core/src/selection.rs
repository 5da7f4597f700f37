//! Cache of the user's last editor selection.
//!
//! The editor widget collapses its selection as soon as focus moves to the
//! AI panel, so the shell records it here and later uses it to decide
//! between selected-region and whole-file edit mode.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A highlighted region of the open script. Lines are 1-based, inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub text: String,
    pub start_line: u32,
    pub end_line: u32,
}

/// Thread-safe holder for the most recent selection.
#[derive(Debug, Default)]
pub struct SelectionCache {
    inner: Mutex<Option<Selection>>,
}

impl SelectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Selection> {
        self.inner.lock().clone()
    }

    pub fn set(&self, selection: Selection) {
        *self.inner.lock() = Some(selection);
    }

    pub fn clear(&self) {
        *self.inner.lock() = None;
    }
}
