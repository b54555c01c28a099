//! Turns the inner html of one menu row into a single line of plain text.
//!
//! The page lays out meal, weight and price as visually aligned columns with no
//! delimiter other than a wide gap of spaces, so the gap is kept as ` - `
//! before the remaining whitespace is collapsed.
use std::borrow::Cow;

use crate::static_regex;

use super::remove_excess_whitespace;

type Step = for<'a> fn(Cow<'a, str>) -> Cow<'a, str>;

/// Applied in order; each step only sees the output of the previous one.
const STEPS: [Step; 6] = [
    strip_tags,
    replace_entities,
    mark_column_gaps,
    trim_leading,
    trim_trailing,
    collapse_whitespace,
];

pub fn clean(fragment: &str) -> String {
    STEPS
        .iter()
        .fold(Cow::Borrowed(fragment), |text, step| step(text))
        .into_owned()
}

/// Applies `f` to the text, keeping the borrow when nothing changed.
fn map_cow<'a>(text: Cow<'a, str>, f: impl for<'b> FnOnce(&'b str) -> Cow<'b, str>) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => f(s),
        Cow::Owned(s) => Cow::Owned(f(&s).into_owned()),
    }
}

fn strip_tags(text: Cow<'_, str>) -> Cow<'_, str> {
    static_regex!(TAG <- r"<[^>]*>");
    map_cow(text, |s| TAG.replace_all(s, ""))
}

fn replace_entities(text: Cow<'_, str>) -> Cow<'_, str> {
    static_regex!(ENTITY <- r"&(nbsp|amp);");
    let mut text = text;
    // `&amp;nbsp;` only becomes `&nbsp;` after one pass
    while ENTITY.is_match(&text) {
        text = Cow::Owned(
            ENTITY
                .replace_all(&text, |caps: &regex::Captures| match &caps[1] {
                    "nbsp" => " ",
                    _ => "&",
                })
                .into_owned(),
        );
    }
    text
}

fn mark_column_gaps(text: Cow<'_, str>) -> Cow<'_, str> {
    static_regex!(GAP <- r"\s{4,}");
    map_cow(text, |s| GAP.replace_all(s, " - "))
}

fn trim_leading(text: Cow<'_, str>) -> Cow<'_, str> {
    map_cow(text, |s| {
        Cow::Borrowed(s.trim_start_matches(|c: char| c.is_whitespace() || c == '-'))
    })
}

fn trim_trailing(text: Cow<'_, str>) -> Cow<'_, str> {
    map_cow(text, |s| Cow::Borrowed(s.trim_end()))
}

fn collapse_whitespace(text: Cow<'_, str>) -> Cow<'_, str> {
    map_cow(text, remove_excess_whitespace)
}
