//! Word-lattice Viterbi tokenizer for IPADIC-style Japanese term
//! dictionaries: load a term table and connection matrix, then segment
//! text into the minimum-cost sequence of dictionary terms.

pub mod dictionary;
pub mod error;
pub mod lattice;
pub mod tokenizer;
pub mod viterbi;

pub use dictionary::{default_encoding, load_dictionary, Dictionary};
pub use error::{Result, WakachiError};
pub use tokenizer::{terms_only, tokenize, PathKind, PathNode};
