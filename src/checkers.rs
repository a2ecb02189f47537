//! This file defines some functions that check some pre-conditions
//! E.g., shape of the training set

use crate::Sample;

/// Check whether the training sample is valid for tree induction or not.
/// An empty training set is a configuration error of the caller,
/// not a case the recursion handles.
#[inline(always)]
pub fn sample(sample: &Sample) {
    let (n_example, n_attribute) = sample.shape();

    assert!(n_example > 0, "the training set has no examples");

    assert!(n_attribute > 0, "the training set has no attributes");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_success_01() {
        let s = Sample::from_raw(
            vec!["a".to_string()],
            vec![vec![0, 1]],
        );
        sample(&s);
    }

    #[test]
    #[should_panic]
    fn test_sample_failure_01() {
        let s = Sample::from_raw(vec!["a".to_string()], Vec::new());
        sample(&s);
    }
}
