//! Status query error types
//!
//! `SinfoError` covers the failures the pipeline distinguishes: the status
//! source being unavailable (fatal) and a node-list token that doesn't
//! expand (the row is skipped). Display output carries the emoji and styles
//! used for every message printed by `main`.

use crate::styling::{ERROR, ERROR_BOLD, ERROR_EMOJI, HINT, HINT_EMOJI};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinfoError {
    /// The status command couldn't be run, failed, or produced nothing
    SourceUnavailable { origin: String, reason: String },
    /// A node-list token that isn't `prefix[body]` or has a bad range
    MalformedNodeList { token: String, reason: String },
}

impl SinfoError {
    pub fn source_unavailable(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        SinfoError::SourceUnavailable {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_node_list(token: impl Into<String>, reason: impl Into<String>) -> Self {
        SinfoError::MalformedNodeList {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SinfoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinfoError::SourceUnavailable { origin, reason } => {
                write!(
                    f,
                    "{ERROR_EMOJI} {ERROR}Cannot read node status from {ERROR_BOLD}{origin}{ERROR_BOLD:#}{ERROR}: {reason}{ERROR:#}\n\n{HINT_EMOJI} {HINT}Set `command` in the config file or pass --input to read a saved snapshot{HINT:#}"
                )
            }
            SinfoError::MalformedNodeList { token, reason } => {
                write!(
                    f,
                    "{ERROR}Malformed node list {ERROR_BOLD}{token}{ERROR_BOLD:#}{ERROR}: {reason}{ERROR:#}"
                )
            }
        }
    }
}

impl std::error::Error for SinfoError {}
