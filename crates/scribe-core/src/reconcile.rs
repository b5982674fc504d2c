//! Single-ply edits to a move sequence.
//!
//! Replacing a ply can invalidate everything after it. The edited list is
//! replayed from the start and cut at the first token that no longer
//! applies, so the result is always the longest legal prefix.

use tracing::debug;

use crate::error::ScribeError;
use crate::game_data::{MoveSequence, PlyIndex};
use crate::rules::RulesEngine;

/// Set `ply` to `new_token` (appending when `ply == len`) and rebuild the
/// longest legal prefix of the result.
///
/// Returned tokens are the engine's canonical SAN. A `ply` past the open slot
/// leaves the sequence as it was.
pub fn reconcile<R: RulesEngine>(
    rules: &R,
    sequence: &MoveSequence,
    ply: PlyIndex,
    new_token: &str,
) -> MoveSequence {
    if ply > sequence.len() {
        debug!(ply, len = sequence.len(), "Edit past the open slot ignored");
        return sequence.clone();
    }

    let mut working: Vec<&str> = sequence.iter().map(String::as_str).collect();
    if ply == working.len() {
        working.push(new_token);
    } else {
        working[ply] = new_token;
    }

    let (game, stopped) = replay_prefix(rules, &working);
    if let Some(ScribeError::IllegalMove { ply: at, token }) = stopped {
        debug!(
            edited = ply,
            truncated_at = at,
            token = %token,
            "Replay stopped, dropping the rest of the line"
        );
    }

    MoveSequence::from(rules.history_tokens(&game))
}

/// Play tokens until one fails. Returns the game reached and the error that
/// stopped replay, if any.
pub fn replay_prefix<R: RulesEngine>(
    rules: &R,
    tokens: &[&str],
) -> (R::Game, Option<ScribeError>) {
    let mut game = rules.new_game();
    for token in tokens {
        match rules.apply_move(&game, token) {
            Ok(next) => game = next,
            Err(e) => return (game, Some(e)),
        }
    }
    (game, None)
}
