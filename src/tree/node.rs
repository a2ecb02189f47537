//! A node struct used in the ID3 decision tree.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};
use crate::constants::N_VALUES;

/// The splitting rule of a branch node.
/// A `Splitter` routes an example to the child
/// indexed by the example's value at the chosen attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Splitter {
    pub(crate) attribute: String,
    pub(crate) index: usize,
}

impl Splitter {
    /// Returns a new `Splitter` on the attribute
    /// with the given name and positional index.
    #[inline]
    pub fn new(name: &str, index: usize) -> Self {
        let attribute = name.to_string();
        Self { attribute, index, }
    }

    /// Returns the name of the split attribute.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Defines the splitting.
    /// Returns the child index for the `row`-th example of `sample`.
    #[inline]
    pub fn split(&self, sample: &Sample, row: usize) -> usize {
        usize::from(sample.value(row, self.index))
    }
}

/// Enumeration of the branch and leaf nodes of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that has one child per attribute value.
    /// The attribute of a branch never repeats an attribute
    /// chosen by a strict ancestor.
    Branch {
        /// The splitting rule of this node.
        splitter: Splitter,
        /// The children, in attribute-value order `0, 1, 2`.
        children: [Box<Node>; N_VALUES],
    },

    /// A node that has no child.
    Leaf {
        /// The class label this leaf predicts.
        label: u8,
    },
}

impl Node {
    /// Returns a branch node from the given components.
    pub fn branch(splitter: Splitter, children: [Box<Node>; N_VALUES]) -> Self {
        Self::Branch { splitter, children, }
    }

    /// Returns a leaf node that predicts the given label.
    pub fn leaf(label: u8) -> Self {
        Self::Leaf { label, }
    }

    /// Render the subtree rooted at this node as text lines.
    /// `depth` is the number of `"| "` markers prefixed to
    /// each line of this level.
    /// A leaf child is appended to its branch line as a bare digit;
    /// a branch child starts on the following line, one level deeper.
    pub(crate) fn lines(&self, depth: usize) -> Vec<String> {
        match self {
            Self::Leaf { label } => vec![label.to_string()],
            Self::Branch { splitter, children } => {
                let marker = "| ".repeat(depth);
                let attribute = splitter.attribute();

                let mut out = Vec::new();
                for (value, child) in children.iter().enumerate() {
                    let head = format!("{marker}{attribute} = {value} : ");
                    match child.as_ref() {
                        Self::Leaf { label } => {
                            out.push(format!("{head}{label}"));
                        },
                        branch => {
                            out.push(head);
                            out.extend(branch.lines(depth + 1));
                        },
                    }
                }
                out
            },
        }
    }

    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { splitter, children } => {
                let head = format!(
                    "\tnode_{id} [ label = \"{attribute} = ?\" ];\n",
                    attribute = splitter.attribute,
                );

                let mut info = vec![head];
                let mut child_id = id + 1;
                for (value, child) in children.iter().enumerate() {
                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} \
                         [ label = \"{value}\" ];\n",
                    );
                    info.push(edge);

                    let (child_info, next_id) = child.to_dot_info(child_id);
                    info.extend(child_info);
                    child_id = next_id;
                }

                (info, child_id)
            },
            Self::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}

impl Classifier for Node {
    fn label(&self, sample: &Sample, row: usize) -> u8 {
        match self {
            Self::Branch { splitter, children } => {
                let value = splitter.split(sample, row);
                children[value].label(sample, row)
            },
            Self::Leaf { label } => *label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_tree() -> Node {
        // color = 0 : 1
        // color = 1 :
        // | size = * : 2
        // color = 2 : 0
        let inner = Node::branch(
            Splitter::new("size", 1),
            [
                Box::new(Node::leaf(2)),
                Box::new(Node::leaf(2)),
                Box::new(Node::leaf(2)),
            ],
        );
        Node::branch(
            Splitter::new("color", 0),
            [
                Box::new(Node::leaf(1)),
                Box::new(inner),
                Box::new(Node::leaf(0)),
            ],
        )
    }

    #[test]
    fn test_lines_leaf_01() {
        let node = Node::leaf(2);
        assert_eq!(node.lines(0), vec!["2".to_string()]);
    }

    #[test]
    fn test_lines_nested_01() {
        let expected = vec![
            "color = 0 : 1",
            "color = 1 : ",
            "| size = 0 : 2",
            "| size = 1 : 2",
            "| size = 2 : 2",
            "color = 2 : 0",
        ];
        let lines = toy_tree().lines(0);
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_classify_01() {
        let sample = Sample::from_raw(
            vec!["color".to_string(), "size".to_string()],
            vec![
                vec![0, 0, 1],
                vec![1, 2, 2],
                vec![2, 1, 0],
            ],
        );
        let tree = toy_tree();
        assert_eq!(tree.label(&sample, 0), 1);
        assert_eq!(tree.label(&sample, 1), 2);
        assert_eq!(tree.label(&sample, 2), 0);
    }
}
