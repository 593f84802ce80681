//! Section segmentation and flag matching over a rendered manual page.
//!
//! A section is a run of non-blank lines terminated by a blank line. Manual
//! pages conventionally open an option's block with a comma-separated
//! declaration line (`-a, --all    description`), occasionally wrapping the
//! declaration onto a second physical line. Matching is prefix-based against
//! those two header lines, which deliberately also catches declarations with
//! arguments (`-l <file>`); this is a heuristic, not a manpage grammar.

use crate::style::Emphasis;

/// Scans `page` for sections documenting any of `flags` and returns
/// highlighted copies of the matching sections.
///
/// Output order is section-major (as sections appear in the page), flag-minor
/// (caller-supplied order). A section matching several requested flags is
/// emitted once per flag, highlighting that flag each time.
pub fn matching_sections(page: &str, flags: &[String], emphasis: Emphasis) -> Vec<String> {
    let mut current = String::new();
    let mut output = Vec::new();

    for line in page.lines() {
        if !line.is_empty() {
            current.push_str(line);
            current.push('\n');
            continue;
        }

        if !current.is_empty() {
            let header: Vec<&str> = current.trim().lines().take(2).collect();
            for flag in flags {
                if let Some(section) = section_for_flag(&current, &header, flag, emphasis) {
                    output.push(section);
                }
            }
        }
        current.clear();
    }

    // A trailing block with no blank line after it is never evaluated.
    output
}

/// Decides whether `section` documents `flag` and returns the highlighted,
/// trailing-whitespace-trimmed copy when it does.
///
/// `header` holds the first two lines of the trimmed section. The section
/// matches when the second line's trimmed text starts with the flag (a
/// wrapped declaration), or when any comma-separated segment of the first
/// line does.
fn section_for_flag(
    section: &str,
    header: &[&str],
    flag: &str,
    emphasis: Emphasis,
) -> Option<String> {
    let continuation = header
        .get(1)
        .is_some_and(|line| line.trim().starts_with(flag));

    let declared = header
        .first()
        .is_some_and(|line| line.split(',').any(|seg| seg.trim().starts_with(flag)));

    if !continuation && !declared {
        return None;
    }

    Some(highlight_flag(section, flag, emphasis).trim_end().to_string())
}

/// Wraps every occurrence of `flag` that sits at the very start of `section`
/// or immediately after whitespace. The flag is treated as literal text, and
/// only the flag itself is wrapped; surrounding whitespace is preserved.
fn highlight_flag(section: &str, flag: &str, emphasis: Emphasis) -> String {
    if flag.is_empty() {
        return section.to_string();
    }

    let mut out = String::with_capacity(section.len());
    let mut rest = section;
    let mut at_boundary = true;

    while !rest.is_empty() {
        if at_boundary && rest.starts_with(flag) {
            out.push_str(&emphasis.apply(flag));
            rest = &rest[flag.len()..];
            at_boundary = false;
            continue;
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
            at_boundary = c.is_whitespace();
            rest = chars.as_str();
        }
    }

    out
}
