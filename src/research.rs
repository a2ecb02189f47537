//! This directory provides some features for research
//! E.g., measuring accuracy as a function of training-set size

/// Provides nested random subsets for learning curves.
pub mod learning_curve;

pub use learning_curve::LearningCurve;
