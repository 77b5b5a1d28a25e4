//! Defines the output representation of the ID3 tree.
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;


/// The outcome of one category of a split attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Branch {
    /// A resolved label value.
    Leaf(String),


    /// A further split.
    Node(DecisionNode),
}


/// A node of the decision tree.
///
/// A node maps the name of its split attribute to a map
/// from each category of that attribute to a [`Branch`].
/// An empty node has no split attribute at all.
/// The serialized form is exactly this nested map, e.g.,
/// ```text
/// {"Weather": {"Rainy": "Yes", "Sunny": "No"}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionNode {
    split: BTreeMap<String, BTreeMap<String, Branch>>,
}


impl DecisionNode {
    /// Returns a node without a split attribute.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }


    /// Returns a node that splits on `attribute`.
    /// Categories are kept in sorted order.
    pub fn split<S>(attribute: S, branches: BTreeMap<String, Branch>) -> Self
        where S: Into<String>
    {
        let split = BTreeMap::from([(attribute.into(), branches)]);
        Self { split }
    }


    /// Returns `true` if this node has no split attribute.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.split.is_empty()
    }


    /// Returns the split attribute of this node.
    pub fn attribute(&self) -> Option<&str> {
        self.split.keys().next().map(String::as_str)
    }


    /// Returns the branches of this node, keyed by category.
    pub fn branches(&self) -> Option<&BTreeMap<String, Branch>> {
        self.split.values().next()
    }


    /// Returns the branch for `category`.
    pub fn get(&self, category: &str) -> Option<&Branch> {
        self.branches()?.get(category)
    }


    /// Returns the number of splits along the longest path.
    /// An empty node has depth `0`.
    pub fn depth(&self) -> usize {
        match self.branches() {
            None => 0,
            Some(branches) => {
                let deepest = branches.values()
                    .map(|branch| match branch {
                        Branch::Leaf(_) => 0,
                        Branch::Node(node) => node.depth(),
                    })
                    .max()
                    .unwrap_or(0);
                1 + deepest
            },
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        self.branches()
            .map(|branches| {
                branches.values()
                    .map(|branch| match branch {
                        Branch::Leaf(_) => 1,
                        Branch::Node(node) => node.n_leaves(),
                    })
                    .sum()
            })
            .unwrap_or(0)
    }
}


impl Branch {
    /// Returns the label if this branch is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Branch::Leaf(label) => Some(label),
            Branch::Node(_) => None,
        }
    }


    /// Returns the sub-tree if this branch is a split.
    pub fn as_node(&self) -> Option<&DecisionNode> {
        match self {
            Branch::Leaf(_) => None,
            Branch::Node(node) => Some(node),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(label: &str) -> Branch {
        Branch::Leaf(label.to_string())
    }

    fn sample_tree() -> DecisionNode {
        let inner = DecisionNode::split(
            "Wind",
            BTreeMap::from([
                ("Strong".to_string(), leaf("No")),
                ("Weak".to_string(), leaf("Yes")),
            ]),
        );
        DecisionNode::split(
            "Weather",
            BTreeMap::from([
                ("Rainy".to_string(), Branch::Node(inner)),
                ("Sunny".to_string(), leaf("No")),
            ]),
        )
    }

    #[test]
    fn accessors() {
        let tree = sample_tree();
        assert_eq!(tree.attribute(), Some("Weather"));
        assert_eq!(tree.get("Sunny").and_then(Branch::as_leaf), Some("No"));

        let inner = tree.get("Rainy").and_then(Branch::as_node).unwrap();
        assert_eq!(inner.attribute(), Some("Wind"));
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 3);
    }

    #[test]
    fn empty_node() {
        let node = DecisionNode::empty();
        assert!(node.is_empty());
        assert_eq!(node.attribute(), None);
        assert_eq!(node.depth(), 0);
        assert_eq!(node.n_leaves(), 0);
        assert_eq!(serde_json::to_string(&node).unwrap(), "{}");
    }

    #[test]
    fn serializes_as_nested_map() {
        let json = serde_json::to_string(&sample_tree()).unwrap();
        assert_eq!(
            json,
            r#"{"Weather":{"Rainy":{"Wind":{"Strong":"No","Weak":"Yes"}},"Sunny":"No"}}"#
        );

        let back: DecisionNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_tree());
    }
}
