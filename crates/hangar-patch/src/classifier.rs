//! Fallback classification for replies that yielded no patch commands.
//!
//! Invoked by callers only after the parser returned an empty list. The
//! outcome is a signal, not an action: a `SingleBlock` reply lets the caller
//! offer a full-document replacement, never perform one silently.

use serde::{Deserialize, Serialize};

/// Explanatory phrasings that mark a reply as conversation rather than code.
const CONVERSATIONAL_MARKERS: &[&str] = &[
    "here's",
    "here is",
    "you can",
    "i suggest",
    "i recommend",
    "let me",
    "try this",
    "to improve",
    "consider",
    "instead",
];

/// Characters a code-bearing reply is expected to contain at least one of.
const CODE_CHARS: &[char] = &['{', '}', '(', ')', ';', '=', '<', '>', ':', '"', '\''];

/// Replies shorter than this are never treated as a replacement block.
const MIN_BLOCK_LEN: usize = 50;

/// What a command-less reply should be treated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Explanatory prose with no actionable edit. Callers typically prompt
    /// the user to retry with explicit instructions.
    Conversational,
    /// One unstructured replacement block; the caller may offer a full-file
    /// replacement using the entire reply as content.
    SingleBlock,
}

/// Classify a reply the parser found no commands in.
pub fn classify(response: &str) -> ResponseKind {
    let lowered = response.to_lowercase();

    if CONVERSATIONAL_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        return ResponseKind::Conversational;
    }
    if response.chars().count() < MIN_BLOCK_LEN {
        return ResponseKind::Conversational;
    }
    if !response.contains(CODE_CHARS) {
        return ResponseKind::Conversational;
    }
    // "line" without "lines" or a colon is a loose natural-language
    // reference, not a missed command.
    if lowered.contains("line") && !lowered.contains("lines") && !response.contains(':') {
        return ResponseKind::Conversational;
    }

    ResponseKind::SingleBlock
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanatory_phrasing_is_conversational() {
        assert_eq!(
            classify("I suggest changing the color to blue."),
            ResponseKind::Conversational
        );
        assert_eq!(
            classify("Here's what I would do: set the flag and retry the launch sequence."),
            ResponseKind::Conversational
        );
    }

    #[test]
    fn test_short_reply_is_conversational() {
        assert_eq!(classify("Try another."), ResponseKind::Conversational);
        assert_eq!(classify(""), ResponseKind::Conversational);
    }

    #[test]
    fn test_reply_without_code_characters_is_conversational() {
        assert_eq!(
            classify("The background color should probably match the launcher theme overall"),
            ResponseKind::Conversational
        );
    }

    #[test]
    fn test_loose_line_reference_is_conversational() {
        // Code-ish characters are present, but "line" appears without
        // "lines" and without any colon - a prose reference, not a command.
        assert_eq!(
            classify("change line 5 to use background = \"blue\" and width = 10 for the panel"),
            ResponseKind::Conversational
        );
    }

    #[test]
    fn test_code_block_is_single_block() {
        let block = ".box {\n  color: blue;\n  padding: 4px;\n  margin: 2px;\n}";
        assert!(block.chars().count() >= MIN_BLOCK_LEN);
        assert_eq!(classify(block), ResponseKind::SingleBlock);
    }

    #[test]
    fn test_code_block_mentioning_lines_with_colon_is_single_block() {
        let block = "def apply(lines):\n    return [normalize(entry) for entry in lines]";
        assert_eq!(classify(block), ResponseKind::SingleBlock);
    }
}
