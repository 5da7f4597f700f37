use thiserror::Error;

/// Errors surfaced by buffer range operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("line {line} out of range (buffer has {line_count} lines)")]
    LineOutOfRange { line: u32, line_count: u32 },

    #[error("invalid line range {start}-{end}")]
    InvalidRange { start: u32, end: u32 },
}
