//! Markup styles for marked text.
//!
//! The comparator produces tagged [`MarkedSpan`]s; a [`MarkupStyle`] decides
//! how each tag is encoded in the `marked_a`/`marked_b` strings.

use crate::diff::model::{ComparisonSummary, MarkedSpan, SpanKind};

/// Encoding of tagged spans into a marked string.
pub trait MarkupStyle {
    /// Append text present on both sides
    fn equal(&self, out: &mut String, text: &str) {
        out.push_str(text);
    }

    /// Append text present only on side A
    fn deleted(&self, out: &mut String, text: &str);

    /// Append text present only on side B
    fn inserted(&self, out: &mut String, text: &str);
}

/// `~~deleted~~` / `**inserted**`
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownMarkup;

impl MarkupStyle for MarkdownMarkup {
    fn deleted(&self, out: &mut String, text: &str) {
        push_delimited(out, text, "~~");
    }

    fn inserted(&self, out: &mut String, text: &str) {
        push_delimited(out, text, "**");
    }
}

// Markdown ignores emphasis delimiters that touch whitespace on the inside,
// so edge whitespace goes outside the markers.
fn push_delimited(out: &mut String, text: &str, marker: &str) {
    let core = text.trim();
    if core.is_empty() {
        out.push_str(text);
        return;
    }
    let lead = text.len() - text.trim_start().len();
    let tail = lead + core.len();
    out.push_str(&text[..lead]);
    out.push_str(marker);
    out.push_str(core);
    out.push_str(marker);
    out.push_str(&text[tail..]);
}

/// `<del>` / `<ins>` with every span HTML-escaped
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl MarkupStyle for HtmlMarkup {
    fn equal(&self, out: &mut String, text: &str) {
        push_escaped(out, text);
    }

    fn deleted(&self, out: &mut String, text: &str) {
        out.push_str("<del>");
        push_escaped(out, text);
        out.push_str("</del>");
    }

    fn inserted(&self, out: &mut String, text: &str) {
        out.push_str("<ins>");
        push_escaped(out, text);
        out.push_str("</ins>");
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Render spans with `style`; the result is not trimmed.
pub fn render_spans(spans: &[MarkedSpan], style: &dyn MarkupStyle) -> String {
    let mut out = String::new();
    for span in spans {
        match span.kind {
            SpanKind::Equal => style.equal(&mut out, &span.text),
            SpanKind::Deleted => style.deleted(&mut out, &span.text),
            SpanKind::Inserted => style.inserted(&mut out, &span.text),
        }
    }
    out
}

/// Standalone HTML page with one table row per aligned pair.
///
/// Cells are rendered from the tagged spans; results without spans (no
/// difference, empty side, fallback) render their marked text escaped.
pub fn render_html_report(title: &str, summary: &ComparisonSummary) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    push_escaped(&mut out, title);
    out.push_str("</title>\n<style>\n");
    out.push_str("del { background: #fdd; } ins { background: #dfd; text-decoration: none; }\n");
    out.push_str("td { vertical-align: top; white-space: pre-wrap; }\n");
    out.push_str("</style>\n</head>\n<body>\n<h1>");
    push_escaped(&mut out, title);
    out.push_str("</h1>\n");
    out.push_str(&format!(
        "<p>{} pairs compared, {} with differences.</p>\n",
        summary.total_chunks, summary.difference_count
    ));
    out.push_str("<table>\n<tr><th>#</th><th>A</th><th>B</th></tr>\n");

    for result in &summary.results {
        let class = if result.has_difference { "changed" } else { "same" };
        out.push_str(&format!("<tr class=\"{}\"><td>{}</td><td>", class, result.index));
        render_cell(&mut out, &result.spans_a, &result.marked_a);
        out.push_str("</td><td>");
        render_cell(&mut out, &result.spans_b, &result.marked_b);
        out.push_str("</td></tr>\n");
    }

    out.push_str("</table>\n</body>\n</html>\n");
    out
}

fn render_cell(out: &mut String, spans: &[MarkedSpan], fallback: &str) {
    if spans.is_empty() {
        push_escaped(out, fallback);
    } else {
        out.push_str(render_spans(spans, &HtmlMarkup).trim());
    }
}
