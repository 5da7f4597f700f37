//! The two widget backends must stay in lockstep: same line math, same
//! produced text for the same operations.

use hangar_buffer::{LineWidgetBuffer, PositionWidgetBuffer, TextBuffer};

fn both(text: &str) -> (LineWidgetBuffer, PositionWidgetBuffer) {
    (
        LineWidgetBuffer::from_text(text),
        PositionWidgetBuffer::from_text(text),
    )
}

fn assert_parity(line: &LineWidgetBuffer, position: &PositionWidgetBuffer) {
    assert_eq!(line.text(), position.text());
    assert_eq!(line.line_count(), position.line_count());
    for n in 0..=line.line_count() + 1 {
        assert_eq!(line.line_text(n), position.line_text(n), "line {n}");
    }
}

#[test]
fn test_construction_parity() {
    for text in ["", "a", "a\nb", "a\nb\n", "\n\n", "  spaced  \nx"] {
        let (line, position) = both(text);
        assert_parity(&line, &position);
    }
}

#[test]
fn test_replace_parity_grow_and_shrink() {
    let (mut line, mut position) = both("one\ntwo\nthree\nfour\nfive");

    for buffer in [&mut line as &mut dyn TextBuffer, &mut position] {
        buffer
            .replace_line_range(2, 3, ".box {\n  color: blue;\n}")
            .expect("grow");
        buffer.replace_line_range(5, 6, "tail").expect("shrink");
    }
    assert_parity(&line, &position);
    assert_eq!(line.text(), "one\n.box {\n  color: blue;\n}\ntail");
}

#[test]
fn test_replace_parity_whitespace_preserved() {
    let (mut line, mut position) = both("a\nb\nc");
    for buffer in [&mut line as &mut dyn TextBuffer, &mut position] {
        buffer
            .replace_line_range(2, 2, "#    marker payload")
            .expect("replace");
    }
    assert_parity(&line, &position);
    assert_eq!(line.line_text(2), Some("#    marker payload".to_string()));
}

#[test]
fn test_replace_all_parity() {
    let (mut line, mut position) = both("a\nb");
    for buffer in [&mut line as &mut dyn TextBuffer, &mut position] {
        buffer.replace_all("whole\nnew\nfile\n");
    }
    assert_parity(&line, &position);
}
