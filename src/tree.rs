//! This directory defines the ID3 decision tree.

/// Defines the ID3 learner.
pub mod id3;
/// Defines the classifier produced by `Id3`.
pub mod classifier;
/// Defines the nodes of `DecisionTreeClassifier`.
pub mod node;
/// Defines entropy and information gain.
pub mod gain;
/// Defines the contingency table behind information gain.
pub mod distribution;


pub use classifier::DecisionTreeClassifier;
pub use id3::Id3;
pub use node::{Node, Splitter};
