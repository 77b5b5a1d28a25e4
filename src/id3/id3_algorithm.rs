use rayon::prelude::*;

use std::collections::BTreeMap;

use crate::{Table, LabelPair};
use super::{
    entropy,
    node::{Branch, DecisionNode},
};


/// Grows the ID3 tree over `table`.
///
/// The tree is grown sequentially.
/// See [`TreeBuilder`](crate::TreeBuilder) for the parallel version
/// and for the validation of the label column.
///
/// Every label of `table` must be one of `labels`.
pub fn build_node(table: &Table, labels: &LabelPair) -> DecisionNode {
    grow(table, labels, false)
}


/// Score every feature of `table` and split on the best one.
pub(super) fn grow(table: &Table, labels: &LabelPair, parallel: bool)
    -> DecisionNode
{
    let scores = entropy::scores(table, labels, parallel);
    grow_from_scores(table, labels, &scores[..], parallel)
}


/// Split `table` on the attribute with the first minimal score,
/// and resolve each category of that attribute
/// to a leaf (pure partition) or a sub-tree (mixed partition).
pub(super) fn grow_from_scores(
    table: &Table,
    labels: &LabelPair,
    scores: &[f64],
    parallel: bool,
) -> DecisionNode
{
    // Only the label column is left.
    let Some(col) = entropy::select_split(scores) else {
        tracing::debug!("no attribute left to split on");
        return DecisionNode::empty();
    };
    let attribute = &table.header()[col];
    tracing::debug!(
        "split on `{attribute}` (entropy = {}, {} observation(s))",
        scores[col],
        table.n_observations(),
    );


    let categories = table.categories(col);
    if categories.len() == 1 {
        tracing::debug!("attribute `{attribute}` takes a single category");
    }


    let resolve = |category: &str| {
        let partition = table.partition(col, category);

        let branch = if partition.labels().all(|y| y == labels.positive()) {
            Branch::Leaf(labels.positive().to_string())
        } else if partition.labels().all(|y| y == labels.negative()) {
            Branch::Leaf(labels.negative().to_string())
        } else {
            // Each recursion removes the split column,
            // so the depth is bounded by the number of features.
            let partition = partition.without_column(col);
            Branch::Node(grow(&partition, labels, parallel))
        };

        (category.to_string(), branch)
    };


    let branches = if parallel {
        categories.into_par_iter()
            .map(resolve)
            .collect::<BTreeMap<_, _>>()
    } else {
        categories.into_iter()
            .map(resolve)
            .collect::<BTreeMap<_, _>>()
    };

    DecisionNode::split(attribute.clone(), branches)
}
