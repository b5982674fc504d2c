//! Editing session: the single owner of the current move sequence.
//!
//! Every event (per-ply edit or free-text import) computes a new sequence
//! and swaps it in whole. Views are rebuilt from scratch on each read.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ScribeError;
use crate::game_data::{MoveSequence, MoveToken, PlyIndex, Provenance};
use crate::lookup::{legal_moves_at, legal_moves_per_slot};
use crate::matching::match_options;
use crate::pairing::pair;
use crate::reconcile::reconcile;
use crate::rules::RulesEngine;

/// One input slot of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub ply: PlyIndex,
    pub token: Option<MoveToken>,
    pub options: Vec<MoveToken>,
    /// Black's slot stays closed until white's move in the pair exists.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairView {
    /// 1-based move number.
    pub number: usize,
    pub white: SlotView,
    pub black: SlotView,
}

/// Everything a front end needs to draw the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub pairs: Vec<PairView>,
    pub fen: String,
    pub pgn: String,
    pub provenance: Provenance,
    /// Slot to focus after a structured edit: the first open one.
    pub focus: Option<PlyIndex>,
    pub game_over: bool,
}

pub struct EditSession<R: RulesEngine> {
    rules: R,
    sequence: MoveSequence,
    provenance: Provenance,
    pgn_text: String,
}

impl<R: RulesEngine> EditSession<R> {
    pub fn new(rules: R) -> Self {
        Self {
            rules,
            sequence: MoveSequence::new(),
            provenance: Provenance::Import,
            pgn_text: String::new(),
        }
    }

    pub fn sequence(&self) -> &MoveSequence {
        &self.sequence
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// PGN text as last typed, or as exported after a structured edit.
    pub fn pgn_text(&self) -> &str {
        &self.pgn_text
    }

    /// Apply a per-ply edit and publish the reconciled sequence.
    pub fn edit(&mut self, ply: PlyIndex, token: &str) -> &MoveSequence {
        let next = reconcile(&self.rules, &self.sequence, ply, token);

        self.provenance = Provenance::StructuredEdit;
        self.pgn_text = match self.rules.replay(next.iter().map(String::as_str)) {
            Ok(game) => self.rules.export_text(&game),
            Err(_) => String::new(),
        };
        debug!(ply, token, before = self.sequence.len(), after = next.len(), "Move edited");
        self.sequence = next;

        &self.sequence
    }

    /// Replace the game with free-text PGN.
    ///
    /// The raw text is always kept so the editor shows what was typed; the
    /// sequence only changes when the text parses into a legal game.
    pub fn import(&mut self, text: &str) -> Result<&MoveSequence, ScribeError> {
        self.provenance = Provenance::Import;
        self.pgn_text = text.to_string();

        match self.rules.load_from_text(text) {
            Ok(game) => {
                self.sequence = MoveSequence::from(self.rules.history_tokens(&game));
                debug!(plies = self.sequence.len(), "PGN imported");
                Ok(&self.sequence)
            }
            Err(e) => {
                warn!(error = %e, "PGN import rejected, keeping previous moves");
                Err(e)
            }
        }
    }

    /// FEN of the position after the whole sequence.
    pub fn position(&self) -> String {
        match self.rules.replay(self.sequence.iter().map(String::as_str)) {
            Ok(game) => self.rules.position(&game),
            Err(_) => self.rules.position(&self.rules.new_game()),
        }
    }

    pub fn legal_moves_at(&self, ply: PlyIndex) -> Result<Vec<MoveToken>, ScribeError> {
        legal_moves_at(&self.rules, &self.sequence, ply)
    }

    /// Autocomplete suggestions for the slot at `ply`.
    pub fn suggest(&self, ply: PlyIndex, query: &str) -> Result<Vec<MoveToken>, ScribeError> {
        let options = self.legal_moves_at(ply)?;
        Ok(match_options(&options, query))
    }

    pub fn focus_target(&self) -> Option<PlyIndex> {
        match self.provenance {
            Provenance::StructuredEdit => Some(self.sequence.len()),
            Provenance::Import => None,
        }
    }

    pub fn view(&self) -> Result<EditorView, ScribeError> {
        let game = self.rules.replay(self.sequence.iter().map(String::as_str))?;
        let slots = legal_moves_per_slot(&self.rules, &self.sequence)?;
        let len = self.sequence.len();
        let game_over = self.rules.is_game_over(&game);
        // Played plies stay editable; the open slot only while the game goes on.
        let open = |ply: PlyIndex| ply < len || (ply == len && !game_over);

        let slot = |ply: PlyIndex, token: Option<MoveToken>, enabled: bool| SlotView {
            ply,
            token,
            options: slots.get(ply).cloned().unwrap_or_default(),
            enabled,
        };

        let pairs = pair(self.sequence.as_slice())
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                let white_ply = i * 2;
                let black_ply = white_ply + 1;
                PairView {
                    number: i + 1,
                    white: slot(white_ply, p.white, open(white_ply)),
                    black: slot(black_ply, p.black, open(black_ply)),
                }
            })
            .collect();

        Ok(EditorView {
            pairs,
            fen: self.rules.position(&game),
            pgn: self.pgn_text.clone(),
            provenance: self.provenance,
            focus: self.focus_target(),
            game_over,
        })
    }
}
