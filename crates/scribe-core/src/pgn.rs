//! PGN text utilities: strict regex-based movetext reader and writer.
//!
//! Tag pairs, comments, variations, move numbers, NAGs and annotation glyphs
//! are dropped. Every other token must be SAN, otherwise the whole text is
//! rejected: a partially understood game is never returned.

use std::sync::LazyLock;

use regex::Regex;
use shakmaty::san::SanPlus;

use crate::error::ScribeError;
use crate::game_data::MoveToken;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("valid header regex"));
static BRACE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("valid comment regex"));
static LINE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";[^\n]*").expect("valid comment regex"));
// Innermost variation only; applied until nothing changes so nesting unwinds.
static VARIATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").expect("valid variation regex"));
static MOVE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.+").expect("valid move number regex"));
static NAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\$\d+$").expect("valid NAG regex"));

const RESULTS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Extract the SAN tokens of a PGN's main line, in order.
///
/// Tokens are syntax-checked only; legality is the rules engine's business.
/// Castling written with zeros is normalized to letters.
pub fn movetext_tokens(pgn: &str) -> Result<Vec<MoveToken>, ScribeError> {
    let no_headers = HEADER_RE.replace_all(pgn, " ");
    let no_comments = BRACE_COMMENT_RE.replace_all(&no_headers, " ");
    let mut text = LINE_COMMENT_RE.replace_all(&no_comments, " ").into_owned();

    loop {
        let stripped = VARIATION_RE.replace_all(&text, " ");
        if stripped.len() == text.len() {
            break;
        }
        text = stripped.into_owned();
    }

    if let Some(c) = text.chars().find(|c| matches!(c, '(' | ')' | '{' | '}')) {
        return Err(ScribeError::parse(c.to_string(), "unbalanced delimiter"));
    }

    let mut tokens = Vec::new();
    for raw in text.split_whitespace() {
        if RESULTS.contains(&raw) {
            break;
        }

        let token = MOVE_NUMBER_RE.replace(raw, "");
        if token.is_empty() || NAG_RE.is_match(&token) {
            continue;
        }

        let token = token.trim_end_matches(['!', '?']);
        if token.is_empty() {
            continue;
        }
        let token = normalize_castling(token);

        if SanPlus::from_ascii(token.as_bytes()).is_err() {
            return Err(ScribeError::parse(raw, "not a move in SAN"));
        }
        tokens.push(token);
    }

    Ok(tokens)
}

/// Rewrite "0-0" / "0-0-0" castling to "O-O" / "O-O-O", keeping any suffix.
pub fn normalize_castling(token: &str) -> String {
    if token.starts_with("0-0") {
        token.replace('0', "O")
    } else {
        token.to_string()
    }
}

/// Render tokens as numbered movetext: "1. e4 e5 2. Nf3".
/// `result` is appended when the game is decided.
pub fn export_movetext(tokens: &[MoveToken], result: Option<&str>) -> String {
    let mut out = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if i % 2 == 0 {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("{}. {}", i / 2 + 1, token));
        } else {
            out.push(' ');
            out.push_str(token);
        }
    }

    if let Some(r) = result {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(r);
    }

    out
}
