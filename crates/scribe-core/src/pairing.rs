//! Groups a flat ply list into white/black pairs for display.

use serde::{Deserialize, Serialize};

use crate::game_data::MoveToken;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePair {
    pub white: Option<MoveToken>,
    pub black: Option<MoveToken>,
}

impl MovePair {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.white.is_some() && self.black.is_some()
    }
}

/// Pair up plies, padded so there is always exactly one open slot at the end.
pub fn pair(plies: &[MoveToken]) -> Vec<MovePair> {
    let mut pairs: Vec<MovePair> = plies
        .chunks(2)
        .map(|chunk| MovePair {
            white: chunk.first().cloned(),
            black: chunk.get(1).cloned(),
        })
        .collect();

    match pairs.last() {
        Some(last) if !last.is_complete() => {}
        _ => pairs.push(MovePair::empty()),
    }

    pairs
}

/// Inverse of [`pair`]: the plies in order, padding dropped.
pub fn flatten(pairs: &[MovePair]) -> Vec<MoveToken> {
    pairs
        .iter()
        .flat_map(|p| [p.white.clone(), p.black.clone()])
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plies(tokens: &[&str]) -> Vec<MoveToken> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pair_empty() {
        assert_eq!(pair(&[]), vec![MovePair::empty()]);
    }

    #[test]
    fn test_pair_odd_length_not_padded() {
        let pairs = pair(&plies(&["e4", "e5", "Nf3"]));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].white.as_deref(), Some("Nf3"));
        assert_eq!(pairs[1].black, None);
    }

    #[test]
    fn test_pair_even_length_padded() {
        let pairs = pair(&plies(&["e4", "e5"]));
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].is_complete());
        assert_eq!(pairs[1], MovePair::empty());
    }

    #[test]
    fn test_flatten_round_trip() {
        for n in 0..6 {
            let all = plies(&["d4", "d5", "c4", "e6", "Nc3", "Nf6"]);
            let s = &all[..n];
            assert_eq!(flatten(&pair(s)), s);
        }
    }
}
