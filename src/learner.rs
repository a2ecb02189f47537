//! The core library for the `Learner` trait.

use crate::{Classifier, Sample};

/// A trait that defines the behavior of a learning algorithm.
/// A `Learner` consumes a training sample
/// and produces a hypothesis of type [`Learner::Hypothesis`].
pub trait Learner {
    /// The hypothesis the learner produces.
    type Hypothesis: Classifier;

    /// Learn a hypothesis from the given training sample.
    fn induce(&self, sample: &Sample) -> Self::Hypothesis;
}
