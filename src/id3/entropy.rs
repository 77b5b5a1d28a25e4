//! Defines the entropy score of an attribute.
//!
//! The score of an attribute is the weighted sum,
//! over the categories of the attribute,
//! of the binary label entropy inside each category:
//! ```txt
//! score = sum_c  -(p1 * lg(p1) + p2 * lg(p2)) * |rows with c| / |rows|,
//! ```
//! where `p1`, `p2` are the fractions of positive/negative labels
//! among the rows with category `c`, and `lg(p) = log2(p)` for `p > 0`.
//! For `p == 0` the logarithm is replaced by `1`,
//! so the product `p * lg(p)` vanishes.
use rayon::prelude::*;

use std::cmp::Ordering;

use crate::{Table, LabelPair};


/// `p * log2(p)` with `log2(0)` replaced by `1`.
#[inline(always)]
fn weighted_log2(p: f64) -> f64 {
    p * if p > 0f64 { p.log2() } else { 1f64 }
}


/// Returns the entropy term of one category:
/// `-(p1 * lg(p1) + p2 * lg(p2)) * prob_of_category`.
#[inline]
pub(crate) fn category_term(n_positive: usize, n_category: usize, n_total: usize)
    -> f64
{
    let x = n_category as f64;
    let y = n_total as f64;
    let prob_of_category = x / y;

    let n_negative = n_category - n_positive;
    let p1 = n_positive as f64 / x;
    let p2 = n_negative as f64 / x;

    -(weighted_log2(p1) + weighted_log2(p2)) * prob_of_category
}


/// Returns the entropy score of the column `col` of `table`.
/// Categories are visited in sorted order.
pub fn score_column(table: &Table, col: usize, labels: &LabelPair) -> f64 {
    let label = table.label_index();
    let n_total = table.n_observations();
    let positive = labels.positive();

    table.categories(col)
        .into_iter()
        .map(|category| {
            let (n_category, n_positive) = table.matching(col, category)
                .fold((0_usize, 0_usize), |(n, pos), row| {
                    (n + 1, pos + usize::from(row[label] == positive))
                });

            category_term(n_positive, n_category, n_total)
        })
        // Start from `+0.0` so that an all-pure attribute scores `0.0`.
        .fold(0f64, |acc, term| acc + term)
}


/// Returns the entropy score of the attribute named `attribute`.
/// Returns `None` if `table` has no feature column of that name.
pub fn score_attribute(table: &Table, attribute: &str, labels: &LabelPair)
    -> Option<f64>
{
    table.column_index(attribute)
        .filter(|&col| col < table.n_features())
        .map(|col| score_column(table, col, labels))
}


/// Returns the entropy scores of all feature columns in column order.
pub fn scores(table: &Table, labels: &LabelPair, parallel: bool) -> Vec<f64> {
    let n_features = table.n_features();
    let scores = if parallel {
        (0..n_features).into_par_iter()
            .map(|col| score_column(table, col, labels))
            .collect::<Vec<_>>()
    } else {
        (0..n_features)
            .map(|col| score_column(table, col, labels))
            .collect::<Vec<_>>()
    };

    for (name, score) in table.feature_names().iter().zip(&scores) {
        tracing::trace!("entropy({name}) = {score}");
    }
    scores
}


/// Returns the index of the first minimum score.
/// Returns `None` if `scores` is empty.
pub fn select_split(scores: &[f64]) -> Option<usize> {
    scores.iter()
        .enumerate()
        .min_by(|(_, x), (_, y)| x.partial_cmp(y).unwrap_or(Ordering::Equal))
        .map(|(i, _)| i)
}
