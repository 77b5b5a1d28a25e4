#![warn(missing_docs)]

//!
//! A crate that grows a decision tree from a categorical table
//! by the ID3 algorithm.
//!
//! Every feature and the label are discrete string values,
//! and the label takes at most two values (e.g., `Yes`/`No`).
//! At each node, the attribute with the smallest entropy score
//! is chosen as the split, and each category of that attribute
//! becomes either a leaf (all labels agree)
//! or a sub-tree grown over the rows of that category
//! with the split attribute removed.
//!
//! ```no_run
//! use id3tree::prelude::*;
//!
//! let table = TableReader::new()
//!     .file("data.csv")
//!     .read()
//!     .unwrap();
//! let id3 = TreeBuilder::new(&table)
//!     .build()
//!     .unwrap();
//!
//! println!("{}", id3tree::render::to_json(id3.tree()).unwrap());
//! ```

pub mod error;
pub mod table;
pub mod id3;
pub mod render;
pub mod prelude;


pub use error::{Error, Result, InputError, DataAssumptionViolation};

pub use table::{Table, TableReader, LabelPair};

pub use id3::{
    TreeBuilder,
    Id3Tree,
    DecisionNode,
    Branch,
    build_node,
};
