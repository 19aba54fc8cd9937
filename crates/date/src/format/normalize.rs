//! Input clean-up applied before any parsing.

use tracing::trace;

/// Written forms of day names that differ from the culture table only by
/// spacing. Longer variants come first so they win over their substrings.
const DAY_NAME_VARIANTS: &[(&str, &str)] = &[
    ("سه\u{00A0}شنبه", "سه شنبه"),
    ("سه\u{200C}شنبه", "سه شنبه"),
    ("سهشنبه", "سه شنبه"),
    ("یک\u{200C}شنبه", "یکشنبه"),
    ("یک شنبه", "یکشنبه"),
    ("دو\u{200C}شنبه", "دوشنبه"),
    ("دو شنبه", "دوشنبه"),
    ("چهار\u{200C}شنبه", "چهارشنبه"),
    ("چهار شنبه", "چهارشنبه"),
    ("پنج\u{200C}شنبه", "پنجشنبه"),
    ("پنج شنبه", "پنجشنبه"),
];

/// Maps Persian (U+06F0..U+06F9) and Arabic-Indic (U+0660..U+0669) digits
/// to ASCII digits, leaving everything else untouched.
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            _ => c,
        })
        .collect()
}

/// Prepares date text for parsing.
///
/// Trims surrounding whitespace, normalises digits, replaces the Arabic
/// letters `ي` and `ك` with their Persian forms and rewrites day-name
/// spelling variants to the canonical culture names.
pub fn normalize_input(text: &str) -> String {
    let mut out: String = normalize_digits(text.trim())
        .chars()
        .map(|c| match c {
            '\u{064A}' => 'ی',
            '\u{0643}' => 'ک',
            _ => c,
        })
        .collect();
    for &(variant, canonical) in DAY_NAME_VARIANTS {
        if out.contains(variant) {
            trace!(variant, canonical, "substituting day name");
            out = out.replace(variant, canonical);
        }
    }
    out
}
