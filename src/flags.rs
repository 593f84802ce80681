//! Expansion of raw flag tokens into canonical single-flag tokens.

use log::debug;

/// Splits concatenated short flags (e.g. ls's `-la`) into individual flags
/// (`-la` -> `-l`, `-a`). Long flags (`--all`) pass through verbatim.
///
/// Tokens without a leading dash contribute nothing. Input order is kept and
/// duplicates are not removed; no validation is performed beyond the leading
/// dash.
pub fn expand_flags(raw: &[String]) -> Vec<String> {
    let mut flags = Vec::with_capacity(raw.len());

    for token in raw {
        if token.starts_with("--") {
            flags.push(token.clone());
        } else if let Some(cluster) = token.strip_prefix('-') {
            // Bare "-" has an empty cluster and expands to nothing.
            for c in cluster.chars() {
                flags.push(format!("-{c}"));
            }
        } else {
            debug!("Ignoring token without leading dash: {token}");
        }
    }

    flags
}
