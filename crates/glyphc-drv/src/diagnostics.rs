//! Source-span pretty-printing for lex/parse errors: a line:column header
//! followed by the offending line and a caret run under the span.

use glyphc_util::Span;

/// Renders `message` with the line/column derived from `span`'s start byte
/// offset, the full offending source line, and a caret run under the span.
pub fn render(source: &str, span: Span, message: &str) -> String {
    let (line, col, line_text) = locate(source, span.start);
    let caret_len = span.len().max(1);
    let mut out = format!("{line}:{col}: {message}\n");
    out.push_str(&line_text);
    out.push('\n');
    for _ in 1..col {
        out.push(' ');
    }
    for _ in 0..caret_len {
        out.push('^');
    }
    out
}

/// 1-indexed (line, column) of `offset`, plus the full text of that line.
fn locate(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;
    for (i, b) in source.as_bytes()[..offset].iter().enumerate() {
        if *b == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());
    let col = offset - line_start + 1;
    (line, col, &source[line_start..line_end])
}
