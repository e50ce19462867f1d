//! Node state normalization.
//!
//! `sinfo` reports dozens of state spellings (`alloc`, `drain*`, `drng`, ...).
//! The grid shows one character per node, so every raw token collapses onto a
//! small fixed alphabet. Matching is case-sensitive and includes suffix
//! markers: `down*` (not responding) is listed explicitly, while `idle*` is not
//! and shows up as unknown.

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Character shown for any state token missing from the table.
pub const UNKNOWN_SYMBOL: char = '?';

/// A node state as displayed in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum NodeState {
    Allocated,
    Mixed,
    Idle,
    Draining,
    Down,
    Reserved,
    Invalid,
    Unknown,
}

impl NodeState {
    /// Raw `sinfo` tokens that map to this state.
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            NodeState::Allocated => &["alloc", "alloc*"],
            NodeState::Mixed => &["mix"],
            NodeState::Idle => &["idle"],
            NodeState::Draining => &["drain", "drain*", "drng"],
            NodeState::Down => &["down", "down*"],
            NodeState::Reserved => &["resv"],
            NodeState::Invalid => &["inval"],
            NodeState::Unknown => &[],
        }
    }

    /// Display character for this state.
    pub fn symbol(self) -> char {
        match self {
            NodeState::Allocated => 'A',
            NodeState::Mixed => 'M',
            NodeState::Idle => 'I',
            NodeState::Draining => 'D',
            NodeState::Down => 'X',
            NodeState::Reserved => 'R',
            NodeState::Invalid => '!',
            NodeState::Unknown => UNKNOWN_SYMBOL,
        }
    }

    /// Lowercase name used in the legend.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up a raw token. Never fails: unlisted tokens are `Unknown`.
    pub fn from_token(token: &str) -> Self {
        NodeState::iter()
            .find(|state| state.tokens().iter().any(|t| *t == token))
            .unwrap_or(NodeState::Unknown)
    }
}

/// Map a raw state token to its display character.
pub fn normalize(token: &str) -> char {
    NodeState::from_token(token).symbol()
}
