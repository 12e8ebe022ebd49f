//! Normalization of known encoding artifacts in question files.
//!
//! The table is applied top to bottom; later patterns see the output of earlier
//! ones (`"àˆ"` only exists after `"Ã" → "à"` has run).

/// Ordered `(pattern, replacement)` pairs.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{c3}", "\u{e0}"), // "Ã" -> "à"
    ("\u{e0}\u{2c6}", "\u{c8}"), // "àˆ" -> "È"
    ("\u{a0}", ""), // non-breaking space
    ("\u{e0}\u{a8}", ""), // "à¨"
];

/// Applies an ordered replacement table to `line`.
pub fn normalize_with(line: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(line.to_string(), |acc, &(pattern, replacement)| {
            acc.replace(pattern, replacement)
        })
}

/// Applies [`REPLACEMENTS`] to `line`.
pub fn normalize(line: &str) -> String {
    normalize_with(line, REPLACEMENTS)
}
