use thiserror::Error;

pub type Result<T> = std::result::Result<T, WakachiError>;

/// Errors produced while loading a dictionary or tokenizing text.
///
/// Load-time errors abort dictionary construction; `UnknownTermId` and
/// `OutOfRange` indicate a corrupt dictionary and are treated as fatal;
/// `NoPath` is a normal, recoverable result.
#[derive(Error, Debug)]
pub enum WakachiError {
    #[error("connection matrix malformed: {reason}")]
    MalformedMatrix { reason: String },

    #[error("term row malformed at {source}:{line}: {reason}")]
    MalformedTerm {
        source: String,
        line: usize,
        reason: String,
    },

    #[error("unknown term id {term_id} (table has {len} entries)")]
    UnknownTermId { term_id: usize, len: usize },

    #[error("connection cost lookup out of range: left={left}, right={right}, side={side}")]
    OutOfRange { left: usize, right: usize, side: usize },

    #[error("no path from BOS to EOS")]
    NoPath,

    #[error("failed to load dictionary from {path}: {reason}")]
    LoadError { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
