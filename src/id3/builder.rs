use crate::{Table, LabelPair};
use crate::error::Result;
use super::{
    entropy,
    id3_algorithm::grow_from_scores,
    node::DecisionNode,
};

use std::fmt;


/// A struct that builds [`Id3Tree`].
/// `TreeBuilder` keeps the parameters for growing the tree.
///
/// # Example
///
/// ```no_run
/// use id3tree::prelude::*;
///
/// let table = TableReader::new()
///     .file("data.csv")
///     .read()
///     .unwrap();
/// let id3 = TreeBuilder::new(&table)
///     .labels(LabelPair::new("Yes", "No"))
///     .parallel(false)
///     .build()
///     .unwrap();
///
/// println!("{:?}", id3.tree());
/// ```
#[derive(Clone)]
pub struct TreeBuilder<'a> {
    table: &'a Table,
    labels: Option<LabelPair>,
    parallel: bool,
}


impl<'a> TreeBuilder<'a> {
    /// Construct a new instance of [`TreeBuilder`].
    /// By default, [`TreeBuilder`] sets the parameters as follows;
    /// ```text
    /// labels: inferred from the label column,
    /// parallel: true,
    /// ```
    pub fn new(table: &'a Table) -> Self {
        Self { table, labels: None, parallel: true, }
    }


    /// Set the two label values explicitly.
    /// [`TreeBuilder::build`] fails if the label column
    /// contains any other value.
    pub fn labels(mut self, labels: LabelPair) -> Self {
        self.labels = Some(labels);
        self
    }


    /// Score attributes and grow sibling sub-trees in parallel.
    /// Default is `true`.
    /// The resulting tree does not depend on this flag.
    pub fn parallel(mut self, flag: bool) -> Self {
        self.parallel = flag;
        self
    }


    /// Grow the tree.
    /// This method consumes `self`.
    pub fn build(self) -> Result<Id3Tree> {
        let table = self.table;
        let labels = match self.labels {
            Some(labels) => {
                labels.validate(table)?;
                labels
            },
            None => LabelPair::infer(table)?,
        };
        tracing::debug!("labels: {labels}");

        let scores = entropy::scores(table, &labels, self.parallel);
        let tree = grow_from_scores(table, &labels, &scores[..], self.parallel);

        let entropies = table.feature_names()
            .iter()
            .cloned()
            .zip(scores)
            .collect::<Vec<_>>();

        tracing::info!(
            "grew a tree of depth {} with {} leaves",
            tree.depth(),
            tree.n_leaves(),
        );
        Ok(Id3Tree { tree, labels, entropies })
    }
}


/// The output of [`TreeBuilder::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct Id3Tree {
    tree: DecisionNode,
    labels: LabelPair,
    entropies: Vec<(String, f64)>,
}


impl Id3Tree {
    /// Returns the decision tree.
    #[inline]
    pub fn tree(&self) -> &DecisionNode {
        &self.tree
    }


    /// Returns the decision tree, consuming `self`.
    #[inline]
    pub fn into_tree(self) -> DecisionNode {
        self.tree
    }


    /// Returns the label pair used to grow the tree.
    #[inline]
    pub fn labels(&self) -> &LabelPair {
        &self.labels
    }


    /// Returns the root-level entropy of each feature in column order.
    #[inline]
    pub fn entropies(&self) -> &[(String, f64)] {
        &self.entropies[..]
    }


    /// Returns the number of splits along the longest path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }
}


impl fmt::Display for Id3Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Labels: {}\n\
            - Depth: {}\n\
            - Leaves: {}\n\
            - Entropy:\
            ",
            self.labels,
            self.tree.depth(),
            self.tree.n_leaves(),
        )?;

        let width = self.entropies.iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, score) in self.entropies.iter() {
            writeln!(f, "\t* [{name: <width$}] {score:.5}")?;
        }

        write!(f, "----------")
    }
}
