//! Struct `Table` represents a categorical dataset.

// Provides table struct.
pub(crate) mod table_struct;
// Provides the canonical pair of label values.
pub(crate) mod label_pair;

// Provides a struct that reads a file.
pub(crate) mod table_reader;


pub use table_reader::TableReader;
pub use table_struct::Table;
pub use label_pair::LabelPair;
