use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::{DataAssumptionViolation, Result};
use super::table_struct::Table;


/// The two canonical values of the label column,
/// sorted lexicographically (case-sensitive).
///
/// For a `Yes`/`No` label, `negative == "No"` and `positive == "Yes"`.
/// A label column with a single value yields `negative == positive`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelPair {
    negative: String,
    positive: String,
}


impl LabelPair {
    /// Construct a new `LabelPair` from two label values.
    /// The order of the arguments does not matter.
    pub fn new<S, T>(a: S, b: T) -> Self
        where S: Into<String>,
              T: Into<String>,
    {
        let (a, b) = (a.into(), b.into());
        let (negative, positive) = if a <= b { (a, b) } else { (b, a) };
        Self { negative, positive }
    }


    /// Infer the label pair from the label column of `table`.
    /// Fails if the column takes more than two distinct values.
    pub fn infer(table: &Table) -> Result<Self> {
        let labels = table.labels()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();

        match labels[..] {
            [a] => Ok(Self::new(a, a)),
            [a, b] => Ok(Self::new(a, b)),
            _ => {
                let labels = labels.iter()
                    .map(|y| y.to_string())
                    .collect();
                Err(DataAssumptionViolation::TooManyLabels(labels).into())
            },
        }
    }


    /// Check that every label of `table` is one of this pair.
    pub fn validate(&self, table: &Table) -> Result<()> {
        match table.labels().find(|&y| !self.contains(y)) {
            Some(label) => {
                let violation = DataAssumptionViolation::UnknownLabel {
                    label: label.to_string(),
                    negative: self.negative.clone(),
                    positive: self.positive.clone(),
                };
                Err(violation.into())
            },
            None => Ok(()),
        }
    }


    /// The lexicographically smaller label.
    #[inline]
    pub fn negative(&self) -> &str {
        &self.negative
    }


    /// The lexicographically larger label.
    #[inline]
    pub fn positive(&self) -> &str {
        &self.positive
    }


    /// Returns `true` if `label` is one of this pair.
    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        label == self.negative || label == self.positive
    }
}


impl fmt::Display for LabelPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{-: {}, +: {}}}", self.negative, self.positive)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn table(labels: &[&str]) -> Table {
        let rows = labels.iter()
            .map(|&y| vec!["x", y])
            .collect::<Vec<_>>();
        Table::new(vec!["A", "Label"], rows).unwrap()
    }

    #[test]
    fn infer_sorts_labels() {
        let pair = LabelPair::infer(&table(&["Yes", "No", "Yes"])).unwrap();
        assert_eq!(pair.negative(), "No");
        assert_eq!(pair.positive(), "Yes");
    }

    #[test]
    fn infer_is_case_sensitive() {
        let pair = LabelPair::infer(&table(&["yes", "Yes"])).unwrap();
        assert_eq!(pair.negative(), "Yes");
        assert_eq!(pair.positive(), "yes");
    }

    #[test]
    fn infer_single_label() {
        let pair = LabelPair::infer(&table(&["No", "No"])).unwrap();
        assert_eq!(pair.negative(), pair.positive());
    }

    #[test]
    fn infer_rejects_three_labels() {
        let err = LabelPair::infer(&table(&["Yes", "No", "Maybe"])).unwrap_err();
        match err {
            Error::DataAssumption(DataAssumptionViolation::TooManyLabels(labels)) => {
                assert_eq!(labels, vec!["Maybe", "No", "Yes"]);
            },
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn validate_rejects_unknown_label() {
        let pair = LabelPair::new("Yes", "No");
        assert!(pair.validate(&table(&["Yes", "No"])).is_ok());

        let err = pair.validate(&table(&["Yes", "no"])).unwrap_err();
        assert!(matches!(
            err,
            Error::DataAssumption(DataAssumptionViolation::UnknownLabel { ref label, .. })
                if label == "no"
        ));
    }
}
