//! Applies parsed patch commands to a text buffer.

use hangar_buffer::TextBuffer;

use crate::error::ApplyFailure;
use crate::parser::PatchCommand;
use crate::report::{ApplyMode, ApplyReport, EditOutcome};

/// Applier for line-range patch commands.
///
/// Commands execute bottom-up, sorted by `start_line` descending: replacing
/// a range with a different number of lines shifts only the line numbers
/// below the edit point, so every not-yet-applied command (all at lower line
/// numbers) stays valid.
pub struct PatchApplier;

impl PatchApplier {
    /// Apply every command and return a complete per-command report.
    ///
    /// A command whose range no longer fits the document is recorded as a
    /// failed outcome and the batch continues; the applier never aborts
    /// early, so callers can always present partial-success feedback.
    pub fn apply(commands: Vec<PatchCommand>, buffer: &mut dyn TextBuffer) -> ApplyReport {
        let mut ordered = commands;
        ordered.sort_by(|a, b| b.start_line.cmp(&a.start_line));

        let mut outcomes = Vec::with_capacity(ordered.len());
        for command in ordered {
            let line_count = buffer.line_count();
            if command.start_line < 1 || command.end_line > line_count {
                tracing::warn!(
                    start_line = command.start_line,
                    end_line = command.end_line,
                    line_count,
                    "patch command addresses lines outside the buffer"
                );
                outcomes.push(EditOutcome {
                    command,
                    applied: false,
                    error: Some(ApplyFailure::OutOfRange.to_string()),
                });
                continue;
            }

            match buffer.replace_line_range(command.start_line, command.end_line, &command.content)
            {
                Ok(()) => outcomes.push(EditOutcome {
                    command,
                    applied: true,
                    error: None,
                }),
                Err(err) => {
                    tracing::warn!(error = %err, "buffer rejected patch command");
                    outcomes.push(EditOutcome {
                        command,
                        applied: false,
                        error: Some(ApplyFailure::from(err).to_string()),
                    });
                }
            }
        }

        ApplyReport {
            outcomes,
            mode: ApplyMode::LineRanges,
        }
    }

    /// Replace the whole document with `content` in one operation.
    ///
    /// Chosen by caller policy for single-block replies; the applier never
    /// infers this mode on its own.
    pub fn apply_full_file(content: String, buffer: &mut dyn TextBuffer) -> ApplyReport {
        let line_count = buffer.line_count();
        buffer.replace_all(&content);
        let command = PatchCommand {
            start_line: 1,
            end_line: line_count,
            content,
        };
        ApplyReport {
            outcomes: vec![EditOutcome {
                command,
                applied: true,
                error: None,
            }],
            mode: ApplyMode::FullFile,
        }
    }
}
