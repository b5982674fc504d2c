//! Rules engine capability and its shakmaty-backed implementation.
//!
//! Nothing outside this module knows how chess works: legality, SAN, check
//! suffixes and FEN all come through [`RulesEngine`].

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{Chess, Color, EnPassantMode, Position};
use tracing::debug;

use crate::error::ScribeError;
use crate::game_data::MoveToken;
use crate::pgn;

/// Capability interface the editing core is written against.
pub trait RulesEngine {
    type Game: Clone;

    /// A game at the initial position.
    fn new_game(&self) -> Self::Game;

    /// Build a game from free-text PGN. All-or-nothing.
    fn load_from_text(&self, pgn: &str) -> Result<Self::Game, ScribeError>;

    /// Play `token` on top of `game`, returning the extended game.
    /// `game` itself is left untouched either way.
    fn apply_move(&self, game: &Self::Game, token: &str) -> Result<Self::Game, ScribeError>;

    /// Legal moves from the game's current position, as SAN tokens.
    fn legal_moves(&self, game: &Self::Game) -> Vec<MoveToken>;

    /// Canonical SAN of every ply played so far.
    fn history_tokens(&self, game: &Self::Game) -> Vec<MoveToken>;

    /// FEN of the current position.
    fn position(&self, game: &Self::Game) -> String;

    /// Movetext of the game, with a result token once it is decided.
    fn export_text(&self, game: &Self::Game) -> String;

    /// Whether the side to move has no legal continuation.
    fn is_game_over(&self, game: &Self::Game) -> bool {
        self.legal_moves(game).is_empty()
    }

    /// Play `tokens` from the initial position, failing on the first one that
    /// does not apply.
    fn replay<'a, I>(&self, tokens: I) -> Result<Self::Game, ScribeError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut game = self.new_game();
        for token in tokens {
            game = self.apply_move(&game, token)?;
        }
        Ok(game)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StandardGame {
    history: Vec<MoveToken>,
    position: Chess,
}

/// Standard chess rules via shakmaty.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl StandardRules {
    pub fn new() -> Self {
        Self
    }

    fn play_token(&self, game: &StandardGame, token: &str) -> Result<StandardGame, ScribeError> {
        let ply = game.history.len();
        let illegal = || ScribeError::illegal(ply, token);

        let normalized = pgn::normalize_castling(token.trim());
        let san_plus: SanPlus = normalized.parse().map_err(|_| illegal())?;
        let mv = san_plus.san.to_move(&game.position).map_err(|_| illegal())?;

        // `to_move` only returns legal moves.
        let mut after = game.position.clone();
        let played = SanPlus::from_move_and_play_unchecked(&mut after, mv);

        let mut history = game.history.clone();
        history.push(played.to_string());

        Ok(StandardGame {
            history,
            position: after,
        })
    }
}

impl RulesEngine for StandardRules {
    type Game = StandardGame;

    fn new_game(&self) -> StandardGame {
        StandardGame::default()
    }

    fn load_from_text(&self, pgn: &str) -> Result<StandardGame, ScribeError> {
        let tokens = pgn::movetext_tokens(pgn)?;

        let mut game = self.new_game();
        for token in &tokens {
            game = self.play_token(&game, token).map_err(|e| match e {
                ScribeError::IllegalMove { ply, token } => {
                    ScribeError::parse(token, format!("illegal move at ply {ply}"))
                }
                other => other,
            })?;
        }

        debug!(plies = game.history.len(), "Loaded game from text");
        Ok(game)
    }

    fn apply_move(&self, game: &StandardGame, token: &str) -> Result<StandardGame, ScribeError> {
        self.play_token(game, token)
    }

    fn legal_moves(&self, game: &StandardGame) -> Vec<MoveToken> {
        legal_sans(&game.position)
    }

    fn history_tokens(&self, game: &StandardGame) -> Vec<MoveToken> {
        game.history.clone()
    }

    fn position(&self, game: &StandardGame) -> String {
        Fen::from_position(&game.position, EnPassantMode::Legal).to_string()
    }

    fn export_text(&self, game: &StandardGame) -> String {
        let tokens = self.history_tokens(game);
        pgn::export_movetext(&tokens, result_token(&game.position))
    }

    fn is_game_over(&self, game: &StandardGame) -> bool {
        game.position.is_game_over()
    }
}

/// SAN (with check suffix) of every legal move from `pos`.
pub fn legal_sans(pos: &Chess) -> Vec<MoveToken> {
    pos.legal_moves()
        .into_iter()
        .map(|m| {
            let mut after = pos.clone();
            SanPlus::from_move_and_play_unchecked(&mut after, m).to_string()
        })
        .collect()
}

fn result_token(pos: &Chess) -> Option<&'static str> {
    if pos.is_checkmate() {
        Some(match pos.turn() {
            Color::White => "0-1",
            Color::Black => "1-0",
        })
    } else if pos.is_stalemate() || pos.is_insufficient_material() {
        Some("1/2-1/2")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_new_game_position() {
        let rules = StandardRules::new();
        let game = rules.new_game();
        assert_eq!(rules.position(&game), START_FEN);
        assert_eq!(rules.legal_moves(&game).len(), 20);
        assert!(rules.history_tokens(&game).is_empty());
    }

    #[test]
    fn test_apply_move_canonicalizes_token() {
        let rules = StandardRules::new();
        let game = rules.replay(["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6"]).unwrap();
        // Written without the mate suffix, stored with it.
        let mated = rules.apply_move(&game, "Qxf7").unwrap();
        assert_eq!(rules.history_tokens(&mated).last().unwrap(), "Qxf7#");
        assert!(rules.is_game_over(&mated));
        assert_eq!(
            rules.export_text(&mated),
            "1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7# 1-0"
        );
    }

    #[test]
    fn test_apply_move_rejects_illegal() {
        let rules = StandardRules::new();
        // The e2 pawn still blocks the f1 bishop.
        let game = rules.replay(["d4", "e5"]).unwrap();
        let err = rules.apply_move(&game, "Bc4").unwrap_err();
        assert_eq!(err, ScribeError::illegal(2, "Bc4"));
        // Input game untouched.
        assert_eq!(rules.history_tokens(&game), vec!["d4", "e5"]);
    }

    #[test]
    fn test_apply_move_accepts_zero_castling() {
        let rules = StandardRules::new();
        let game = rules
            .replay(["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "0-0"])
            .unwrap();
        assert_eq!(rules.history_tokens(&game).last().unwrap(), "O-O");
    }

    #[test]
    fn test_legal_moves_include_check_suffix() {
        let rules = StandardRules::new();
        let game = rules.replay(["e4", "f5"]).unwrap();
        let moves = rules.legal_moves(&game);
        assert!(moves.contains(&"Qh5+".to_string()));
        assert!(moves.contains(&"exf5".to_string()));
    }

    #[test]
    fn test_load_from_text() {
        let rules = StandardRules::new();
        let game = rules
            .load_from_text("[Event \"Casual\"]\n\n1. e4 e5 2. Nf3 Nc6 *")
            .unwrap();
        assert_eq!(rules.history_tokens(&game), vec!["e4", "e5", "Nf3", "Nc6"]);
        assert_eq!(rules.export_text(&game), "1. e4 e5 2. Nf3 Nc6");
    }

    #[test]
    fn test_load_from_text_rejects_illegal_line() {
        let rules = StandardRules::new();
        let err = rules.load_from_text("1. e4 e5 2. Ke3").unwrap_err();
        assert!(matches!(err, ScribeError::Parse { .. }));
    }

    #[test]
    fn test_stalemate_exports_draw() {
        let rules = StandardRules::new();
        // Shortest known stalemate (Sam Loyd, 10 moves).
        let game = rules
            .load_from_text(
                "1. e3 a5 2. Qh5 Ra6 3. Qxa5 h5 4. h4 Rah6 5. Qxc7 f6 \
                 6. Qxd7+ Kf7 7. Qxb7 Qd3 8. Qxb8 Qh7 9. Qxc8 Kg6 10. Qe6",
            )
            .unwrap();
        assert!(rules.is_game_over(&game));
        assert!(rules.export_text(&game).ends_with("10. Qe6 1/2-1/2"));
    }
}
