//! Entropy, information gain and attribute selection.
use fixedbitset::FixedBitSet;

use crate::Sample;
use crate::constants::{N_LABELS, N_VALUES};
use super::distribution::Distribution;

/// Returns the entropy, in bits, of the given label counts.
///
/// A zero count contributes nothing to the sum,
/// so `log2` is never evaluated at zero.
/// A zero `total` returns `0.0` (the counts must then be all zero).
pub fn entropy(counts: [usize; N_LABELS], total: usize) -> f64 {
    if total == 0 { return 0f64; }

    let total = total as f64;
    counts.into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}

/// Returns the information gain of splitting the given rows of `sample`
/// on `attribute`:
/// the entropy of the class labels minus the entropy remaining
/// after conditioning on the attribute's value.
pub fn information_gain(
    sample: &Sample,
    rows: &[usize],
    attribute: usize,
) -> f64
{
    let dist = Distribution::over(sample, rows, attribute);
    let total = dist.total();

    let mut gain = entropy(dist.label_counts(), total);
    for value in 0..N_VALUES {
        let value_total = dist.value_total(value);
        let weight = value_total as f64 / total as f64;
        gain -= weight * entropy(dist.value_counts(value), value_total);
    }

    gain
}

/// Returns the available attribute with the greatest information gain
/// over the given rows.
///
/// Attributes are scanned in declared order and only a strictly
/// greater gain replaces the incumbent,
/// so a gain tie resolves to the earliest-declared attribute.
pub(crate) fn best_attribute(
    sample: &Sample,
    rows: &[usize],
    available: &FixedBitSet,
) -> usize
{
    assert!(!rows.is_empty(), "cannot select an attribute on zero examples");

    let mut best = None;
    let mut best_gain = f64::NEG_INFINITY;
    for attribute in available.ones() {
        let gain = information_gain(sample, rows, attribute);
        if gain > best_gain {
            best = Some(attribute);
            best_gain = gain;
        }
    }

    best.expect("no attribute is available")
}

#[cfg(test)]
mod tests {
    use super::*;

    // The four-example set whose two attributes have
    // the same information gain.
    fn tied_sample() -> Sample {
        Sample::from_raw(
            vec!["A".to_string(), "B".to_string()],
            vec![
                vec![0, 0, 0],
                vec![0, 1, 1],
                vec![1, 0, 1],
                vec![1, 1, 1],
            ],
        )
    }

    fn all_available(n_attribute: usize) -> FixedBitSet {
        let mut available = FixedBitSet::with_capacity(n_attribute);
        available.insert_range(..);
        available
    }

    #[test]
    fn test_entropy_uniform_01() {
        let h = entropy([1, 1, 0], 2);
        assert!((h - 1f64).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_pure_01() {
        let h = entropy([0, 5, 0], 5);
        assert_eq!(h, 0f64);
    }

    #[test]
    fn test_entropy_three_way_01() {
        let h = entropy([2, 2, 2], 6);
        assert!((h - 3f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_zero_total_01() {
        assert_eq!(entropy([0, 0, 0], 0), 0f64);
    }

    #[test]
    fn test_information_gain_01() {
        // Base entropy of 1 label-0 and 3 label-1 examples
        // is roughly 0.8113 bits; both attributes leave
        // 0.5 bits of conditional entropy.
        let sample = tied_sample();
        let rows = [0, 1, 2, 3];

        let gain_a = information_gain(&sample, &rows, 0);
        let gain_b = information_gain(&sample, &rows, 1);

        assert!((gain_a - 0.3112781244591328).abs() < 1e-9);
        assert!((gain_a - gain_b).abs() < 1e-12);
    }

    #[test]
    fn test_gain_bounds_01() {
        let sample = Sample::from_raw(
            vec!["x".to_string(), "y".to_string()],
            vec![
                vec![0, 2, 1],
                vec![1, 2, 1],
                vec![2, 0, 0],
                vec![0, 1, 2],
                vec![2, 1, 2],
                vec![1, 0, 0],
            ],
        );
        let rows = [0, 1, 2, 3, 4, 5];
        let base = entropy([2, 2, 2], 6);

        for attribute in 0..2 {
            let gain = information_gain(&sample, &rows, attribute);
            assert!(gain >= -1e-12);
            assert!(gain <= base + 1e-12);
        }
    }

    #[test]
    fn test_best_attribute_tie_01() {
        // Equal gains: the earliest declared attribute must win.
        let sample = tied_sample();
        let rows = [0, 1, 2, 3];
        let available = all_available(2);

        assert_eq!(best_attribute(&sample, &rows, &available), 0);
    }

    #[test]
    fn test_best_attribute_skips_unavailable_01() {
        let sample = tied_sample();
        let rows = [0, 1, 2, 3];
        let mut available = all_available(2);
        available.set(0, false);

        assert_eq!(best_attribute(&sample, &rows, &available), 1);
    }

    #[test]
    fn test_best_attribute_deterministic_01() {
        let sample = tied_sample();
        let rows = [0, 1, 2, 3];
        let available = all_available(2);

        let first = best_attribute(&sample, &rows, &available);
        for _ in 0..10 {
            assert_eq!(best_attribute(&sample, &rows, &available), first);
        }
    }
}
