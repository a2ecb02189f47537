//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};
use super::node::Node;

use std::fmt;
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;

/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`].
///
/// The `Display` implementation renders the tree as indented text:
/// one line per branch edge, depth marked by a repeated `"| "` prefix,
/// leaves shown as a bare digit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}

impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl From<Box<Node>> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Box<Node>) -> Self {
        Self { root: *root }
    }
}

impl Classifier for DecisionTreeClassifier {
    fn label(&self, sample: &Sample, row: usize) -> u8 {
        self.root.label(sample, row)
    }
}

impl DecisionTreeClassifier {
    /// Returns the root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Write the current decision tree to a dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}")?;

        Ok(())
    }

    /// Write the current decision tree to a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let json = serde_json::to_string(self)
            .map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })?;
        let mut f = File::create(path)?;
        f.write_all(json.as_bytes())?;

        Ok(())
    }

    /// Read a decision tree written by
    /// [`DecisionTreeClassifier::to_json_file`].
    pub fn from_json_file<P>(path: P) -> io::Result<Self>
        where P: AsRef<Path>
    {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })
    }
}

impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.root.lines(0);
        write!(f, "{}", lines.join("\n"))
    }
}
