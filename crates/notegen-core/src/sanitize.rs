//! Title sanitization for transcript filenames
//!
//! Turns an arbitrary human-readable video title into a filesystem-safe
//! slug. Unicode letters are preserved; only punctuation is stripped.

use regex::Regex;
use tracing::warn;

/// Sanitize a title into a filesystem-safe slug.
///
/// Removes every character that is not a word character (Unicode letter,
/// digit, underscore), whitespace, or dash, then collapses each run of
/// whitespace, underscores, or dashes into a single dash.
///
/// Total and idempotent: never fails, and applying it to its own output is
/// a no-op.
pub fn sanitize_title(title: &str) -> String {
    let strip_re = match Regex::new(r"[^\w\s-]") {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Failed to compile sanitizer strip regex");
            return title.to_string();
        }
    };
    let collapse_re = match Regex::new(r"[\s_-]+") {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Failed to compile sanitizer collapse regex");
            return title.to_string();
        }
    };

    let stripped = strip_re.replace_all(title, "");
    collapse_re.replace_all(&stripped, "-").into_owned()
}
