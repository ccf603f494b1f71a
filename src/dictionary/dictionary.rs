use std::path::Path;

use encoding_rs::{Encoding, EUC_JP};
use log::info;

use crate::error::Result;

use super::connection::ConnectionMatrix;
use super::loader::{load_connection_matrix, load_term_table};
use super::prefix_index::PrefixIndex;
use super::term_table::TermTable;
use super::types::TermEntry;

/// The in-memory dictionary: term table, prefix-search index, and
/// connection-cost matrix, built once and shared by reference for the
/// lifetime of every tokenize call (no lazy singleton — see DESIGN.md).
pub struct Dictionary {
    terms: TermTable,
    prefix_index: PrefixIndex,
    matrix: ConnectionMatrix,
}

impl Dictionary {
    pub fn term(&self, term_id: usize) -> Result<&TermEntry> {
        self.terms.get(term_id)
    }

    /// Every `(surface_form, term_id)` pair whose surface form is a prefix
    /// of `suffix`.
    pub fn prefix_search(&self, suffix: &str) -> Vec<(String, usize)> {
        self.prefix_index.prefixes(suffix)
    }

    pub fn connection_cost(&self, left: usize, right: usize) -> Result<i32> {
        self.matrix.cost(left, right)
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

/// Load a dictionary from one or more IPADIC-style term CSV files (processed
/// in the order given) and a single connection-matrix file.
///
/// `encoding` defaults to EUC-JP, IPADIC's traditional distribution
/// encoding, via [`default_encoding`]; callers building against
/// UTF-8-reencoded dictionaries pass `encoding_rs::UTF_8` instead.
pub fn load_dictionary(
    term_files: &[impl AsRef<Path>],
    matrix_file: impl AsRef<Path>,
    encoding: &'static Encoding,
) -> Result<Dictionary> {
    let terms = load_term_table(term_files, encoding)?;
    let prefix_index = PrefixIndex::build(&terms)?;
    let matrix = load_connection_matrix(matrix_file.as_ref(), encoding)?;

    info!(
        "loaded dictionary: {} terms, {}x{} connection matrix",
        terms.len(),
        matrix.side(),
        matrix.side()
    );

    Ok(Dictionary {
        terms,
        prefix_index,
        matrix,
    })
}

/// IPADIC's traditional distribution encoding (§6C).
pub fn default_encoding() -> &'static Encoding {
    EUC_JP
}
