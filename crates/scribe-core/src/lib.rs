//! Chess game record editing core.
//!
//! Moves are picked per ply from legal-move lists. Editing a ply replays the
//! game and drops whatever the edit made illegal. All chess rules come from
//! the [`rules::RulesEngine`] capability, implemented here on shakmaty.

pub mod error;
pub mod game_data;
pub mod lookup;
pub mod matching;
pub mod pairing;
pub mod pgn;
pub mod reconcile;
pub mod rules;
pub mod session;

pub use error::ScribeError;
pub use game_data::{MoveSequence, MoveToken, PlyIndex, Provenance};
pub use lookup::legal_moves_at;
pub use matching::match_options;
pub use pairing::{flatten, pair, MovePair};
pub use reconcile::reconcile;
pub use rules::{RulesEngine, StandardRules};
pub use session::{EditSession, EditorView};
