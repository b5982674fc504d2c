//! Core error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScribeError {
    /// Free-text PGN could not be turned into a legal game.
    #[error("PGN parse error at {token:?}: {reason}")]
    Parse { token: String, reason: String },

    /// A token does not apply to the position reached so far.
    #[error("Illegal move {token:?} at ply {ply}")]
    IllegalMove { ply: usize, token: String },
}

impl ScribeError {
    pub fn parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        ScribeError::Parse {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn illegal(ply: usize, token: impl Into<String>) -> Self {
        ScribeError::IllegalMove {
            ply,
            token: token.into(),
        }
    }
}
