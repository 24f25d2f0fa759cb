//! Crate error type.
//!
//! Only precondition violations are errors: unsupported row patterns and
//! short card supplies at construction time, and actions that do not fit
//! the live pyramid or player. The search engine itself never fails.

use crate::cards::CardId;

/// Errors raised by pyramid construction and the live match layer.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("row pattern is empty or contains an empty row")]
    EmptyRowPattern,

    #[error("row pattern {rows:?} matches no pyramid shape")]
    UnsupportedRowPattern { rows: Vec<usize> },

    #[error("pyramid needs {needed} cards but only {available} were supplied")]
    ShortCardSupply { needed: usize, available: usize },

    #[error("slot {slot} is out of range (pyramid has {len} slots)")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error("slot {slot} is not available")]
    SlotUnavailable { slot: usize },

    #[error("slot {slot} cannot rest on itself")]
    SelfLink { slot: usize },

    #[error("wonder {wonder} is out of range (player owns {len})")]
    WonderOutOfRange { wonder: usize, len: usize },

    #[error("use-as-wonder action names no wonder")]
    MissingWonder,

    #[error("wonder {wonder} is already constructed")]
    WonderAlreadyBuilt { wonder: usize },

    #[error("{card} is not a wonder")]
    NotAWonder { card: CardId },

    #[error("unknown playstyle: {0}")]
    UnknownPlaystyle(String),

    #[error("no era left to draft")]
    EraExhausted,

    #[error("the match is already over")]
    MatchOver,

    #[error("pyramid snapshot: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("corrupt pyramid snapshot: {0}")]
    CorruptSnapshot(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, DraftError>;
