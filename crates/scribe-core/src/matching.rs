//! Autocomplete over a slot's legal options.
//!
//! Two aliases are tolerated when typing: zeros for castling ("0-0" finds
//! "O-O") and a capture written without its `x` ("Ne5" finds "Nxe5").

use std::collections::HashSet;

use crate::game_data::MoveToken;

const CAPTURE_MARKER: char = 'x';

/// Options matching `query`, case-insensitive, deduplicated.
/// Prefix matches come first, then captures matched through their `x`-less form.
pub fn match_options(options: &[MoveToken], query: &str) -> Vec<MoveToken> {
    let base_query = query.replace('0', "O");

    let base = options
        .iter()
        .filter(|o| starts_with_ignore_case(o, &base_query));

    let captures = options
        .iter()
        .filter(|o| o.contains(CAPTURE_MARKER))
        .filter(|o| starts_with_ignore_case(&o.replace(CAPTURE_MARKER, ""), query));

    let mut seen = HashSet::new();
    base.chain(captures)
        .filter(|o| seen.insert(o.as_str()))
        .cloned()
        .collect()
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.to_uppercase().starts_with(&prefix.to_uppercase())
}
