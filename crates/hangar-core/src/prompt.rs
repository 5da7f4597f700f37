//! Edit-prompt composition.
//!
//! Builds the request sent to the model, teaching it the `lines N-M:` reply
//! protocol the patch parser understands. Keeping composition next to the
//! engine keeps both halves of the protocol in lockstep.

use crate::selection::Selection;

/// One AI edit request against an open script.
#[derive(Debug, Clone)]
pub struct EditRequest<'a> {
    pub file_name: &'a str,
    pub file_content: &'a str,
    /// The user's instruction, verbatim.
    pub instruction: &'a str,
    /// Present when the user highlighted a region; narrows the model's
    /// attention to it.
    pub selection: Option<&'a Selection>,
}

/// Render the full prompt for an edit request.
///
/// The file is numbered so the model's `lines N-M:` headers refer to real
/// positions; line numbers are 1-based and inclusive, matching the parser.
pub fn build_edit_prompt(request: &EditRequest<'_>) -> String {
    let mut prompt = format!("You are editing `{}`.\n\n", request.file_name);

    if let Some(selection) = request.selection {
        prompt.push_str(&format!(
            "The user highlighted lines {}-{}:\n```\n{}\n```\n\n",
            selection.start_line, selection.end_line, selection.text
        ));
    }

    prompt.push_str("Current file content with line numbers:\n```\n");
    for (idx, line) in request.file_content.split('\n').enumerate() {
        prompt.push_str(&format!("{:>4} | {}\n", idx + 1, line));
    }
    prompt.push_str("```\n\n");

    prompt.push_str(&format!("Request: {}\n\n", request.instruction));

    prompt.push_str(
        "Reply ONLY with replacement blocks in this exact format:\n\
         lines <start>-<end>:\n\
         <replacement text>\n\
         Line numbers are 1-based, inclusive, and refer to the file as shown \
         above. Repeat the header for each separate change. Do not add \
         commentary outside the blocks.\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_numbers_every_line() {
        let request = EditRequest {
            file_name: "launcher.css",
            file_content: ".panel {\n  background: green;\n}",
            instruction: "make the panel red",
            selection: None,
        };
        let prompt = build_edit_prompt(&request);

        assert!(prompt.contains("`launcher.css`"));
        assert!(prompt.contains("   1 | .panel {"));
        assert!(prompt.contains("   2 |   background: green;"));
        assert!(prompt.contains("   3 | }"));
        assert!(prompt.contains("Request: make the panel red"));
        assert!(prompt.contains("lines <start>-<end>:"));
    }

    #[test]
    fn test_prompt_includes_selection_when_present() {
        let selection = Selection {
            text: "  background: green;".to_string(),
            start_line: 2,
            end_line: 2,
        };
        let request = EditRequest {
            file_name: "launcher.css",
            file_content: ".panel {\n  background: green;\n}",
            instruction: "use red instead",
            selection: Some(&selection),
        };
        let prompt = build_edit_prompt(&request);

        assert!(prompt.contains("highlighted lines 2-2"));
        assert!(prompt.contains("  background: green;"));
    }

    #[test]
    fn test_prompt_omits_selection_block_when_absent() {
        let request = EditRequest {
            file_name: "a.cfg",
            file_content: "x",
            instruction: "noop",
            selection: None,
        };
        assert!(!build_edit_prompt(&request).contains("highlighted"));
    }
}
