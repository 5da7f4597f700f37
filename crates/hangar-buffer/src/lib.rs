//! Text-buffer capability abstraction for Hangar's script editor.
//!
//! The launcher embeds two structurally different text widgets: one exposes
//! native line/column addressing, the other only a linear cursor/offset
//! model. This crate presents both behind a single [`TextBuffer`] trait so
//! the patch applier stays backend-agnostic.
//!
//! Both backends guarantee that replacement text is inserted byte-for-byte
//! as given - no whitespace trimming, no re-indentation. Backends model
//! widgets owned by the UI thread and must only be mutated by their owning
//! thread.

mod error;
mod line;
mod position;

pub use error::BufferError;
pub use line::LineWidgetBuffer;
pub use position::PositionWidgetBuffer;

/// Uniform line-addressable surface over an editor widget.
///
/// Lines are 1-based and inclusive throughout. Line counting is
/// newline-segment based and identical across backends: `"a\nb"` has two
/// lines, `"a\nb\n"` has three (the widget shows a trailing empty line).
pub trait TextBuffer {
    /// Number of lines currently in the document.
    fn line_count(&self) -> u32;

    /// Text of the given line without its trailing newline, or `None` if the
    /// line does not exist.
    fn line_text(&self, line: u32) -> Option<String>;

    /// Replace lines `start..=end` with `new_text`, inserted byte-for-byte.
    ///
    /// `new_text` may span any number of lines; the document grows or
    /// shrinks accordingly. Replacing a range with an empty string leaves a
    /// single empty line in its place.
    fn replace_line_range(&mut self, start: u32, end: u32, new_text: &str)
        -> Result<(), BufferError>;

    /// Move the widget cursor to the first column of `line` (clamped to the
    /// document).
    fn set_cursor_at_line_start(&mut self, line: u32);

    /// Full document snapshot. Callers use this for persistence after a
    /// successful apply cycle.
    fn text(&self) -> String;

    /// Replace the entire document contents in one operation.
    fn replace_all(&mut self, new_text: &str);
}

pub(crate) fn check_range(start: u32, end: u32, line_count: u32) -> Result<(), BufferError> {
    if start < 1 || start > end {
        return Err(BufferError::InvalidRange { start, end });
    }
    if end > line_count {
        return Err(BufferError::LineOutOfRange {
            line: end,
            line_count,
        });
    }
    Ok(())
}
