//! The ID3 tree induction.
//! `TreeBuilder` grows an `Id3Tree` from a `Table`.

/// Defines the entropy score and the split selection.
pub mod entropy;
/// Defines the builder of the ID3 tree.
pub mod builder;

/// Defines the output representation of the ID3 tree.
mod node;
mod id3_algorithm;


pub use builder::{TreeBuilder, Id3Tree};
pub use node::{Branch, DecisionNode};
pub use id3_algorithm::build_node;
