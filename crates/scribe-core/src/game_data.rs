use serde::{Deserialize, Serialize};

/// One half-move in SAN, e.g. "Nf3", "exd5", "Qxf7#".
pub type MoveToken = String;

/// Zero-based half-move index. Even = white, odd = black.
pub type PlyIndex = usize;

/// Ordered half-moves from the initial position.
///
/// Sequences are replaced wholesale on every edit; nothing mutates one in place
/// after it has been published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSequence(Vec<MoveToken>);

impl MoveSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, ply: PlyIndex) -> Option<&str> {
        self.0.get(ply).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[MoveToken] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveToken> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<MoveToken> {
        self.0
    }
}

impl From<Vec<MoveToken>> for MoveSequence {
    fn from(tokens: Vec<MoveToken>) -> Self {
        Self(tokens)
    }
}

impl From<&[&str]> for MoveSequence {
    fn from(tokens: &[&str]) -> Self {
        Self(tokens.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for MoveSequence {
    fn from(tokens: [&str; N]) -> Self {
        Self(tokens.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a MoveToken;
    type IntoIter = std::slice::Iter<'a, MoveToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Which kind of event produced the current sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Free-text PGN import.
    #[default]
    Import,
    /// A per-ply edit from the move list.
    StructuredEdit,
}
