use thiserror::Error;

use crate::reader::ChunkId;

/// Fatal errors raised while building the chunk tree.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not enough data: need {need} bytes, {budget} left in the enclosing chunk")]
    TooShort { need: u64, budget: u64 },

    #[error("file doesn't start with FORM, CAT or LIST (found {id:?})")]
    InvalidRoot { id: ChunkId },

    #[error("chunk {id:?} needs {need} bytes but only {budget} are left in the enclosing chunk")]
    BudgetExceeded { id: ChunkId, need: u64, budget: u64 },

    #[error("group chunks nested deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("failed to read from source: {0}")]
    SourceRead(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a cursor read inside a chunk decoder.
///
/// Unlike [`Error`] this never aborts a parse; it ends up as the trailing
/// `(error: ...)` row of the chunk's field listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("data too short for {what} at offset {offset:#x} (need {need} bytes, have {have})")]
    UnexpectedEof {
        what: &'static str,
        offset: usize,
        need: usize,
        have: usize,
    },
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
