//! Name collation shared by every sorted sequence in the crate.
//!
//! Three levels, each consulted only when the previous one ties:
//! 1. base letters: NFD with combining marks removed, case-folded, so
//!    `Éclair` sorts between `Dialog` and `Fab`
//! 2. accents: unaccented before accented (`eclair` < `éclair`)
//! 3. case: lowercase before uppercase at the first differing character
//!
//! A final code-point comparison keeps the ordering total: only identical
//! strings compare `Equal`.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two entity names.
pub fn compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(base_key(b))
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Sort names in place and drop duplicates.
pub fn sort_dedup(names: &mut Vec<String>) {
    names.sort_by(|a, b| compare(a, b));
    names.dedup();
}

fn base_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accent_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_key(s: &str) -> impl Iterator<Item = (bool, char)> + '_ {
    s.nfd().map(|c| (!c.is_lowercase(), c))
}
