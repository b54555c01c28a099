use std::borrow::Cow;

use crate::static_regex;

/// Collapses every run of whitespace into a single space.
pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static_regex!(RE <- r"\s\s+|[^\S ]");
    RE.replace_all(s, " ")
}
