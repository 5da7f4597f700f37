//! Backend for the widget with native line/column addressing.

use crate::{check_range, BufferError, TextBuffer};

/// Buffer backed by a widget that stores the document as discrete lines and
/// addresses text with zero-based (line, column) coordinates.
#[derive(Debug, Clone)]
pub struct LineWidgetBuffer {
    lines: Vec<String>,
    /// Zero-based (line, column) cursor, as the widget exposes it.
    cursor: (u32, u32),
}

impl LineWidgetBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            cursor: (0, 0),
        }
    }

    /// Current zero-based (line, column) cursor position.
    pub fn cursor(&self) -> (u32, u32) {
        self.cursor
    }
}

impl TextBuffer for LineWidgetBuffer {
    fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    fn line_text(&self, line: u32) -> Option<String> {
        if line < 1 {
            return None;
        }
        self.lines.get((line - 1) as usize).cloned()
    }

    fn replace_line_range(
        &mut self,
        start: u32,
        end: u32,
        new_text: &str,
    ) -> Result<(), BufferError> {
        check_range(start, end, self.line_count())?;
        let replacement: Vec<String> = new_text.split('\n').map(str::to_string).collect();
        self.lines
            .splice((start - 1) as usize..=(end - 1) as usize, replacement);
        Ok(())
    }

    fn set_cursor_at_line_start(&mut self, line: u32) {
        let clamped = line.clamp(1, self.line_count().max(1));
        self.cursor = (clamped - 1, 0);
    }

    fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn replace_all(&mut self, new_text: &str) {
        self.lines = new_text.split('\n').map(str::to_string).collect();
        self.cursor = (0, 0);
    }
}
