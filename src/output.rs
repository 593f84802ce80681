//! Title extraction and report rendering.

use crate::style::Emphasis;

/// Extracts the page title from the `NAME` section: the line following a line
/// that reads exactly `NAME`, with man's 7-space body indent stripped.
///
/// Returns `None` when the page has no recognizable `NAME` section; the
/// caller decides the fallback (the driver uses the command name).
pub fn page_title(page: &str) -> Option<String> {
    let mut lines = page.lines();
    while let Some(line) = lines.next() {
        if line == "NAME" {
            let title = lines.next()?.strip_prefix("       ")?;
            return (!title.is_empty()).then(|| title.to_string());
        }
    }
    None
}

/// Renders the full report: the search banner, then either the emphasized
/// title with an `=` underline followed by the matched sections, or a
/// "No flags found." notice.
pub fn render_report(
    command: &str,
    flags: &[String],
    title: &str,
    sections: &[String],
    emphasis: Emphasis,
) -> String {
    let mut report = String::from("\nSearching for: ");
    report.push_str(command);
    for flag in flags {
        report.push(' ');
        report.push_str(flag);
    }
    report.push_str("\n\n");

    if sections.is_empty() {
        report.push_str("No flags found.\n");
    } else {
        report.push_str(&emphasis.apply(title));
        report.push('\n');
        // Underline sized to the unstyled title, not the escape-wrapped one.
        report.push_str(&"=".repeat(title.chars().count()));
        report.push_str("\n\n");
        for section in sections {
            report.push_str(section);
            report.push_str("\n\n");
        }
    }

    report.push('\n');
    report
}
