//! Exports the sample types, the learner and the traits.
//!
pub use crate::sample::{
    // Reading a whitespace table file
    SampleReader,
    DataError,

    // The in-memory example set
    Sample,
};


pub use crate::learner::Learner;
pub use crate::hypothesis::Classifier;


pub use crate::tree::{
    // The ID3 learner
    Id3,

    // The hypothesis it produces
    DecisionTreeClassifier,
    Node,
    Splitter,
};


pub use crate::research::LearningCurve;
