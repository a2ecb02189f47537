//! Struct `Sample` represents a batch of ternary examples.

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::{DataError, SampleReader};
pub use sample_struct::Sample;
