mod connection;
mod dictionary;
mod loader;
mod prefix_index;
mod term_table;
mod types;

pub use connection::ConnectionMatrix;
pub use dictionary::{default_encoding, load_dictionary, Dictionary};
pub use loader::{load_connection_matrix, load_term_table};
pub use prefix_index::PrefixIndex;
pub use term_table::TermTable;
pub use types::{Features, PartOfSpeech, TermEntry};
