//! The (attribute value × class label) contingency table.
use crate::Sample;
use crate::constants::{N_LABELS, N_VALUES};

/// The distribution of a set of examples with respect to one attribute.
///
/// `counts[v][c]` counts the examples whose value at the attribute is `v`
/// and whose class label is `c`, for `v, c` in `{0, 1, 2}`.
/// Row `3` and column `3` hold the marginal totals;
/// `counts[3][3]` is the number of examples.
/// A `Distribution` is always derived from a sample on demand,
/// never stored across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    counts: [[usize; N_LABELS + 1]; N_VALUES + 1],
}

impl Distribution {
    /// Count the given rows of `sample` by their value
    /// at `attribute` and their class label.
    /// `rows` must be non-empty.
    pub fn over(
        sample: &Sample,
        rows: &[usize],
        attribute: usize,
    ) -> Self
    {
        assert!(
            !rows.is_empty(),
            "tried to build a distribution over zero examples"
        );

        let mut counts = [[0_usize; N_LABELS + 1]; N_VALUES + 1];
        for &row in rows {
            let value = usize::from(sample.value(row, attribute));
            let label = usize::from(sample.label(row));
            counts[value][label] += 1;
        }

        for value in 0..N_VALUES {
            for label in 0..N_LABELS {
                let count = counts[value][label];
                counts[value][N_LABELS] += count;
                counts[N_VALUES][label] += count;
                counts[N_VALUES][N_LABELS] += count;
            }
        }

        Self { counts }
    }

    /// The number of examples with the given attribute value
    /// and class label.
    #[inline]
    pub fn count(&self, value: usize, label: usize) -> usize {
        self.counts[value][label]
    }

    /// The number of examples with the given attribute value.
    #[inline]
    pub fn value_total(&self, value: usize) -> usize {
        self.counts[value][N_LABELS]
    }

    /// The per-label counts of the examples
    /// with the given attribute value.
    #[inline]
    pub fn value_counts(&self, value: usize) -> [usize; N_LABELS] {
        let mut counts = [0_usize; N_LABELS];
        counts.copy_from_slice(&self.counts[value][..N_LABELS]);
        counts
    }

    /// The per-label counts over all examples.
    #[inline]
    pub fn label_counts(&self) -> [usize; N_LABELS] {
        self.value_counts(N_VALUES)
    }

    /// The number of examples counted.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts[N_VALUES][N_LABELS]
    }
}
