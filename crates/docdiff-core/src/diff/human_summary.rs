//! Human-readable summary renderer for comparison results.

use crate::diff::model::ComparisonSummary;

/// Render a Markdown summary of a [`ComparisonSummary`].
///
/// Intended for review displays; it lists counts and then each differing
/// pair with its marked text. Unchanged pairs are omitted.
pub fn render_human_summary(summary: &ComparisonSummary) -> String {
    let mut out = String::new();

    out.push_str("## Document Comparison\n\n");
    out.push_str(&format!(
        "**Pairs compared**: {}  \n**With differences**: {}\n",
        summary.total_chunks, summary.difference_count
    ));
    if summary.anomaly_count > 0 {
        out.push_str(&format!(
            "**Unmarked after diff failure**: {}\n",
            summary.anomaly_count
        ));
    }
    out.push('\n');

    if !summary.has_differences() {
        out.push_str("_No differences detected._\n");
        return out;
    }

    for result in summary.results.iter().filter(|r| r.has_difference) {
        out.push_str(&format!("### Pair {}\n\n", result.index + 1));
        out.push_str(&format!("- **A**: {}\n", one_line(&result.marked_a)));
        out.push_str(&format!("- **B**: {}\n\n", one_line(&result.marked_b)));
    }

    out
}

// Keeps each side on one bullet line.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
