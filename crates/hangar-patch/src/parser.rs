//! Parser for the line-range patch protocol in model replies.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::indent;

/// How far back from a following header the content boundary rewinds looking
/// for a line break, so trailing whitespace sitting before that header on
/// the same conceptual line does not leak into the previous command.
const BOUNDARY_REWIND_WINDOW: usize = 100;

/// Command header: `"line" | "lines" <ws> <int> ["-" <int>] <ws>* ":"`,
/// case-insensitive. The singular/plural distinction carries no meaning.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\blines?\s+(\d+)(?:\s*-\s*(\d+))?\s*:").unwrap());

/// A single line-range replacement instruction parsed from a model reply.
///
/// Immutable once parsed; fully consumed (applied or discarded) within one
/// apply cycle. `content` may begin with a literal format-marker token (see
/// [`indent::FORMAT_MARKERS`]) carried as opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchCommand {
    /// First line to replace, 1-based, inclusive.
    pub start_line: u32,
    /// Last line to replace, inclusive. Always >= `start_line`.
    pub end_line: u32,
    /// Replacement text, already indentation-normalized.
    pub content: String,
}

/// Parser for line-range edit commands embedded in free-form model output.
pub struct PatchParser;

struct HeaderMatch {
    start: usize,
    end: usize,
    range: Option<(u32, u32)>,
}

impl PatchParser {
    /// Parse a raw model reply into an ordered list of patch commands.
    ///
    /// Commands are emitted in response order; the applier reorders for
    /// execution. A header with a malformed integer or an inverted range is
    /// skipped without failing the parse, as is a command whose content
    /// normalizes to nothing. Parsing never returns an error - the worst
    /// outcome is an empty list, which routes the caller to the classifier.
    pub fn parse(response: &str) -> Vec<PatchCommand> {
        let headers: Vec<HeaderMatch> = HEADER_RE
            .captures_iter(response)
            .map(|caps| {
                let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
                HeaderMatch {
                    start: whole.0,
                    end: whole.1,
                    range: Self::parse_range(&caps),
                }
            })
            .collect();

        let mut commands = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            let Some((start_line, end_line)) = header.range else {
                tracing::warn!(
                    header = &response[header.start..header.end],
                    "skipping malformed patch header"
                );
                continue;
            };

            let content_start = header.end;
            // A malformed next header still bounds this command's content:
            // it is a header occurrence in the text even if it yields no
            // command.
            let content_end = match headers.get(idx + 1) {
                Some(next) => Self::rewind_boundary(response, content_start, next.start),
                None => response.len(),
            };

            let raw = Self::strip_leading_break(&response[content_start..content_end]);
            let content = indent::normalize(raw);
            if content.trim().is_empty() {
                tracing::debug!(
                    start_line,
                    end_line,
                    "dropping command with no content after normalization"
                );
                continue;
            }

            commands.push(PatchCommand {
                start_line,
                end_line,
                content,
            });
        }

        commands
    }

    fn parse_range(caps: &Captures<'_>) -> Option<(u32, u32)> {
        let start: u32 = caps.get(1)?.as_str().parse().ok()?;
        let end: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => start,
        };
        (start <= end).then_some((start, end))
    }

    /// Pull the content boundary back to the nearest newline preceding the
    /// next header, searching at most the last `BOUNDARY_REWIND_WINDOW`
    /// bytes before it and never crossing `content_start`.
    fn rewind_boundary(response: &str, content_start: usize, next_header_start: usize) -> usize {
        let mut window_start = next_header_start
            .saturating_sub(BOUNDARY_REWIND_WINDOW)
            .max(content_start);
        while !response.is_char_boundary(window_start) {
            window_start += 1;
        }
        match response[window_start..next_header_start].rfind('\n') {
            Some(pos) => window_start + pos,
            None => next_header_start,
        }
    }

    /// Discard the single newline (or space+newline pair) that separates a
    /// header from its content.
    fn strip_leading_break(raw: &str) -> &str {
        if let Some(rest) = raw.strip_prefix('\n') {
            rest
        } else if let Some(rest) = raw.strip_prefix(" \n") {
            rest
        } else {
            raw
        }
    }
}
