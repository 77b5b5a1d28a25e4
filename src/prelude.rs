//! Exports the standard structs and functions.
//!
pub use crate::table::{
    Table,
    TableReader,
    LabelPair,
};


pub use crate::id3::{
    // Builder
    TreeBuilder,
    Id3Tree,


    // Tree representation
    DecisionNode,
    Branch,


    build_node,
};


pub use crate::error::Error;
