//! Final assembly of the generated snippet.

use crate::imports::ImportCollector;

/// Joins the import statement and declaration blocks into output lines.
///
/// Consecutive parts are separated by exactly one blank line. Nothing is
/// emitted for an empty collector with no blocks.
pub fn assemble_snippet(imports: &ImportCollector, blocks: &[Vec<String>]) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(import_line) = imports.render() {
        lines.push(import_line);
    }

    for block in blocks.iter().filter(|b| !b.is_empty()) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(block.iter().cloned());
    }

    lines
}

/// Renders snippet lines as text with a trailing newline.
pub fn render_snippet_text(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
