//! Backend for the widget that only exposes a linear cursor/offset model.

use crate::{check_range, BufferError, TextBuffer};

/// Buffer backed by a widget that stores the document as one flat string and
/// addresses text with a single byte-offset cursor. Line operations are
/// implemented by walking line boundaries from the document start, summing
/// segment lengths plus one byte per newline.
#[derive(Debug, Clone)]
pub struct PositionWidgetBuffer {
    text: String,
    /// Byte offset of the widget cursor into `text`.
    cursor: usize,
}

impl PositionWidgetBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: 0,
        }
    }

    /// Current cursor byte offset.
    pub fn cursor_offset(&self) -> usize {
        self.cursor
    }

    /// Byte span of a 1-based line, excluding its trailing newline.
    fn line_span(&self, line: u32) -> Option<(usize, usize)> {
        if line < 1 {
            return None;
        }
        let mut offset = 0usize;
        for (idx, segment) in self.text.split('\n').enumerate() {
            if idx as u32 + 1 == line {
                return Some((offset, offset + segment.len()));
            }
            offset += segment.len() + 1;
        }
        None
    }
}

impl TextBuffer for PositionWidgetBuffer {
    fn line_count(&self) -> u32 {
        self.text.split('\n').count() as u32
    }

    fn line_text(&self, line: u32) -> Option<String> {
        self.line_span(line)
            .map(|(start, end)| self.text[start..end].to_string())
    }

    fn replace_line_range(
        &mut self,
        start: u32,
        end: u32,
        new_text: &str,
    ) -> Result<(), BufferError> {
        let line_count = self.line_count();
        check_range(start, end, line_count)?;
        let (span_start, _) = self.line_span(start).ok_or(BufferError::LineOutOfRange {
            line: start,
            line_count,
        })?;
        let (_, span_end) = self.line_span(end).ok_or(BufferError::LineOutOfRange {
            line: end,
            line_count,
        })?;
        self.text.replace_range(span_start..span_end, new_text);
        if self.cursor > self.text.len() {
            self.cursor = self.text.len();
        }
        Ok(())
    }

    fn set_cursor_at_line_start(&mut self, line: u32) {
        let clamped = line.clamp(1, self.line_count());
        if let Some((start, _)) = self.line_span(clamped) {
            self.cursor = start;
        }
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn replace_all(&mut self, new_text: &str) {
        self.text = new_text.to_string();
        self.cursor = 0;
    }
}
