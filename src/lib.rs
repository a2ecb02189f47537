#![warn(missing_docs)]

//!
//! A crate that provides the ID3 decision-tree learning algorithm
//! for ternary classification tasks:
//! every attribute and the class label take a value in `{0, 1, 2}`.
//!
//! The induction core selects splits by information gain,
//! breaking gain ties toward the earliest-declared attribute,
//! and grows one child per attribute value.
//! An attribute is consumed along the path that chose it
//! and stays available to sibling subtrees.
//!
//! A typical run reads a training table and a test table,
//! learns a tree, prints it, and reports the accuracy on both sets:
//!
//! ```no_run
//! use terntree::prelude::*;
//!
//! let train = SampleReader::default()
//!     .file("train.txt")
//!     .read()
//!     .unwrap();
//! let test = SampleReader::default()
//!     .file("test.txt")
//!     .read()
//!     .unwrap();
//!
//! let tree = Id3::default().induce(&train);
//! println!("{tree}");
//!
//! let n_train = train.shape().0;
//! let n_test = test.shape().0;
//! println!(
//!     "Accuracy on training set ({n_train} instances): {:.1}%",
//!     tree.accuracy(&train),
//! );
//! println!(
//!     "Accuracy on test set ({n_test} instances): {:.1}%",
//!     tree.accuracy(&test),
//! );
//! ```

pub mod constants;
pub mod checkers;
pub mod sample;
pub mod hypothesis;
pub mod learner;
pub mod tree;
pub mod research;
pub mod prelude;


pub use sample::{DataError, Sample, SampleReader};

pub use hypothesis::Classifier;
pub use learner::Learner;

pub use tree::{
    DecisionTreeClassifier,
    Id3,
    Node,
    Splitter,
};

pub use research::LearningCurve;
