//! Indentation normalization for replacement blocks.
//!
//! Models habitually indent the replacement text they embed inside a larger
//! reply. That wrapper indentation must come off before insertion, while
//! indentation the model meant as block formatting must survive. The
//! discriminator is the uniform-indent range [4, 8]: the model's own
//! formatting indentation is typically smaller, and pasted-document
//! indentation typically larger or irregular.

/// Comment leaders of the script formats Hangar edits. A replacement line
/// may start with one of these as a deliberate whitespace-protection marker;
/// the marker is opaque payload and is never consumed or interpreted.
pub const FORMAT_MARKERS: &[&str] = &["#", "//", "--", ";"];

const STRIP_MIN: usize = 4;
const STRIP_MAX: usize = 8;

/// Strip wrapper-introduced uniform indentation from `raw_block`.
///
/// Computes the minimum leading-space count over non-empty lines (lines of
/// only whitespace are ignored) and, when it falls in [4, 8], strips exactly
/// that many spaces from every non-empty line. For a line starting with a
/// recognized format marker, the spaces measured and stripped are the ones
/// *after* the marker. Leading and trailing blank lines of the whole block
/// are trimmed once at the end.
///
/// Idempotent: once stripped, the minimum indent is outside [4, 8] and a
/// second pass changes nothing.
pub fn normalize(raw_block: &str) -> String {
    let lines: Vec<&str> = raw_block.split('\n').collect();

    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| measured_indent(line))
        .min();

    let stripped: Vec<String> = match min_indent {
        Some(indent) if (STRIP_MIN..=STRIP_MAX).contains(&indent) => {
            lines.iter().map(|line| strip_indent(line, indent)).collect()
        }
        _ => lines.iter().map(|line| line.to_string()).collect(),
    };

    trim_blank_edges(&stripped)
}

/// Leading-space count of a line, measured after any recognized format
/// marker (a marker sits at column 0, so measuring the line's own leading
/// spaces would always yield 0 and hide the wrapper indentation).
fn measured_indent(line: &str) -> usize {
    let rest = match marker_prefix(line) {
        Some(marker) => &line[marker.len()..],
        None => line,
    };
    rest.chars().take_while(|&c| c == ' ').count()
}

fn strip_indent(line: &str, indent: usize) -> String {
    if line.trim().is_empty() {
        return line.to_string();
    }
    match marker_prefix(line) {
        Some(marker) => {
            let rest = &line[marker.len()..];
            format!("{marker}{}", &rest[indent..])
        }
        None => line[indent..].to_string(),
    }
}

fn marker_prefix(line: &str) -> Option<&'static str> {
    FORMAT_MARKERS
        .iter()
        .copied()
        .find(|marker| line.starts_with(marker))
}

fn trim_blank_edges(lines: &[String]) -> String {
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}
