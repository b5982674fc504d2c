//! Legal options for a single ply slot.

use crate::error::ScribeError;
use crate::game_data::{MoveSequence, MoveToken, PlyIndex};
use crate::rules::RulesEngine;

/// Legal moves a player could choose at `ply`.
///
/// For an existing ply this is the position *before* it was played, so the
/// current choice can be swapped for an alternative. At or past the open slot
/// it is the position after the whole sequence.
pub fn legal_moves_at<R: RulesEngine>(
    rules: &R,
    sequence: &MoveSequence,
    ply: PlyIndex,
) -> Result<Vec<MoveToken>, ScribeError> {
    let reference = ply.min(sequence.len());
    let game = rules.replay(sequence.as_slice()[..reference].iter().map(String::as_str))?;
    Ok(rules.legal_moves(&game))
}

/// Options for every ply slot `0..=len`, computed with a single replay.
pub fn legal_moves_per_slot<R: RulesEngine>(
    rules: &R,
    sequence: &MoveSequence,
) -> Result<Vec<Vec<MoveToken>>, ScribeError> {
    let mut game = rules.new_game();
    let mut slots = Vec::with_capacity(sequence.len() + 1);

    for token in sequence {
        slots.push(rules.legal_moves(&game));
        game = rules.apply_move(&game, token)?;
    }
    slots.push(rules.legal_moves(&game));

    Ok(slots)
}
