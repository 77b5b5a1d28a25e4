//! Renders a [`DecisionNode`] as text.
//!
//! - [`to_json`] writes the nested map as pretty JSON.
//! - [`to_colored_json`] writes the same text with terminal colors.
//! - [`to_dot`] writes a Graphviz graph.
use colored::Colorize;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use std::path::Path;
use std::fs::File;
use std::io::{self, prelude::*};

use crate::error::Result;
use crate::id3::{Branch, DecisionNode};


const INDENT: &str = "    ";


/// Write `node` to `writer` as JSON indented by four spaces.
pub fn write_json<W>(node: &DecisionNode, writer: W) -> Result<()>
    where W: Write
{
    let formatter = PrettyFormatter::with_indent(INDENT.as_bytes());
    let mut serializer = Serializer::with_formatter(writer, formatter);
    node.serialize(&mut serializer)?;
    Ok(())
}


/// Returns `node` as JSON indented by four spaces.
pub fn to_json(node: &DecisionNode) -> Result<String> {
    let mut buf = Vec::new();
    write_json(node, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}


/// Returns `node` as JSON indented by four spaces,
/// colored for terminal display.
/// Keys are blue, labels are green, and punctuation is dimmed.
/// Coloring follows the `colored` crate, so `NO_COLOR` disables it.
pub fn to_colored_json(node: &DecisionNode) -> String {
    let mut out = String::new();
    colored_node(node, 0, &mut out);
    out
}


fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}


fn colored_node(node: &DecisionNode, depth: usize, out: &mut String) {
    let (attribute, branches) = match (node.attribute(), node.branches()) {
        (Some(attribute), Some(branches)) => (attribute, branches),
        _ => {
            out.push_str(&"{}".dimmed().to_string());
            return;
        },
    };

    let pad = INDENT.repeat(depth + 1);
    let inner = INDENT.repeat(depth + 2);

    out.push_str(&format!("{}\n", "{".dimmed()));
    out.push_str(&format!(
        "{pad}{}{} {}\n",
        quote(attribute).blue().bold(),
        ":".dimmed(),
        "{".dimmed(),
    ));

    let n_branches = branches.len();
    for (i, (category, branch)) in branches.iter().enumerate() {
        out.push_str(&format!(
            "{inner}{}{} ",
            quote(category).blue(),
            ":".dimmed(),
        ));
        match branch {
            Branch::Leaf(label) => {
                out.push_str(&quote(label).green().to_string());
            },
            Branch::Node(child) => {
                colored_node(child, depth + 2, out);
            },
        }
        if i + 1 < n_branches {
            out.push_str(&",".dimmed().to_string());
        }
        out.push('\n');
    }

    let outer = INDENT.repeat(depth);
    out.push_str(&format!("{pad}{}\n", "}".dimmed()));
    out.push_str(&format!("{outer}{}", "}".dimmed()));
}


/// Returns `node` as a Graphviz graph.
/// Split nodes are labeled by their attribute,
/// edges by the category, and leaves are boxes.
pub fn to_dot(node: &DecisionNode) -> String {
    let mut info = Vec::new();
    dot_info(node, 0, &mut info);

    let mut dot = String::from("graph DecisionTree {\n");
    info.into_iter()
        .for_each(|row| dot.push_str(&row));
    dot.push('}');
    dot
}


/// Write `node` to a dot file.
pub fn write_dot_file<P>(node: &DecisionNode, path: P) -> io::Result<()>
    where P: AsRef<Path>
{
    let mut f = File::create(path)?;
    f.write_all(to_dot(node).as_bytes())?;
    Ok(())
}


/// Push the dot rows of `node` whose id is `id`,
/// and return the next unused id.
fn dot_info(node: &DecisionNode, id: usize, info: &mut Vec<String>) -> usize {
    let (attribute, branches) = match (node.attribute(), node.branches()) {
        (Some(attribute), Some(branches)) => (attribute, branches),
        _ => {
            info.push(format!(
                "\tnode_{id} [ label = \"(no split)\", shape = box, ];\n"
            ));
            return id + 1;
        },
    };

    info.push(format!(
        "\tnode_{id} [ label = {} ];\n",
        quote(attribute),
    ));

    let mut next_id = id + 1;
    for (category, branch) in branches {
        let child_id = next_id;
        next_id = match branch {
            Branch::Leaf(label) => {
                info.push(format!(
                    "\tnode_{child_id} [ \
                     label = {}, \
                     shape = box, \
                     ];\n",
                    quote(label),
                ));
                child_id + 1
            },
            Branch::Node(child) => dot_info(child, child_id, info),
        };
        info.push(format!(
            "\tnode_{id} -- node_{child_id} [ label = {} ];\n",
            quote(category),
        ));
    }

    next_id
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn tree() -> DecisionNode {
        let windy = DecisionNode::split(
            "Wind",
            BTreeMap::from([
                ("Strong".to_string(), Branch::Leaf("No".to_string())),
                ("Weak".to_string(), Branch::Leaf("Yes".to_string())),
            ]),
        );
        DecisionNode::split(
            "Weather",
            BTreeMap::from([
                ("Rainy".to_string(), Branch::Node(windy)),
                ("Sunny".to_string(), Branch::Leaf("No".to_string())),
            ]),
        )
    }

    #[test]
    fn json_uses_four_space_indent() {
        let json = to_json(&tree()).unwrap();
        let expected = "\
{
    \"Weather\": {
        \"Rainy\": {
            \"Wind\": {
                \"Strong\": \"No\",
                \"Weak\": \"Yes\"
            }
        },
        \"Sunny\": \"No\"
    }
}";
        assert_eq!(json, expected);
    }

    #[test]
    fn colored_json_without_colors_matches_json() {
        colored::control::set_override(false);
        let plain = to_colored_json(&tree());
        let empty = to_colored_json(&DecisionNode::empty());
        colored::control::unset_override();

        assert_eq!(plain, to_json(&tree()).unwrap());
        assert_eq!(empty, "{}");
    }

    #[test]
    fn dot_has_a_node_per_split_and_leaf() {
        let dot = to_dot(&tree());
        assert!(dot.starts_with("graph DecisionTree {"));
        assert!(dot.ends_with('}'));

        // 2 splits and 3 leaves.
        assert_eq!(dot.matches("node_").count() - 2 * dot.matches(" -- ").count(), 5);
        assert!(dot.contains("\tnode_0 [ label = \"Weather\" ];\n"));
        assert!(dot.contains("\tnode_0 -- node_1 [ label = \"Rainy\" ];\n"));
        assert!(dot.contains("\tnode_1 [ label = \"Wind\" ];\n"));
        assert!(dot.contains("\tnode_0 -- node_4 [ label = \"Sunny\" ];\n"));
    }
}
