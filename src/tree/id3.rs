//! The ID3 tree-induction algorithm.
use fixedbitset::FixedBitSet;

use crate::{Learner, Sample};
use crate::constants::{N_LABELS, N_VALUES};
use super::classifier::DecisionTreeClassifier;
use super::gain;
use super::node::{Node, Splitter};

/// The ID3 decision-tree learner for ternary-valued samples.
///
/// `Id3` grows a tree top-down, splitting on the attribute with the
/// greatest information gain at each node, until a subset is pure
/// or nothing is left to split on.
/// An attribute is consumed only along the path that chose it;
/// sibling subtrees may choose it again.
///
/// # Example
/// ```no_run
/// use terntree::{Classifier, Id3, Learner, SampleReader};
///
/// let sample = SampleReader::default()
///     .file("/path/to/table/file.txt")
///     .read()
///     .unwrap();
///
/// let tree = Id3::default().induce(&sample);
///
/// println!("{tree}");
/// println!("accuracy: {:.1}%", tree.accuracy(&sample));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3;

impl Id3 {
    /// Construct a new instance of [`Id3`].
    pub fn new() -> Self {
        Self
    }

    /// Grow the subtree for `rows`.
    ///
    /// `fallback` holds the rows of the nearest non-empty ancestor
    /// (the example set of the parent call before partitioning);
    /// it classifies the empty and the exhausted-and-tied cases.
    /// `available` holds the indices of the attributes
    /// not yet chosen by a strict ancestor of this node.
    ///
    /// The checks run in a fixed order:
    /// no examples, one class, no attributes, split.
    fn grow(
        &self,
        sample: &Sample,
        rows: &[usize],
        fallback: &[usize],
        available: &FixedBitSet,
    ) -> Box<Node>
    {
        // No examples reach this node: classify by the ancestor set.
        if rows.is_empty() {
            let label = plurality(sample, fallback, fallback);
            return Box::new(Node::leaf(label));
        }

        // Every example agrees on the class.
        if let Some(label) = same_label(sample, rows) {
            return Box::new(Node::leaf(label));
        }

        // Attributes are exhausted on this path.
        // A local frequency tie is broken by the ancestor frequencies,
        // restricted to the classes present here.
        if available.count_ones(..) == 0 {
            let label = if class_tie(sample, rows) {
                plurality(sample, fallback, rows)
            } else {
                plurality(sample, rows, rows)
            };
            return Box::new(Node::leaf(label));
        }

        let attribute = gain::best_attribute(sample, rows, available);
        let splitter = Splitter::new(
            sample.attribute_name(attribute),
            attribute,
        );

        // Partition the rows by their value at the chosen attribute,
        // preserving order.
        let mut parts: [Vec<usize>; N_VALUES] = Default::default();
        for &row in rows {
            let value = usize::from(sample.value(row, attribute));
            parts[value].push(row);
        }

        // The attribute is consumed for the three children only;
        // the set bound at the parent level is left untouched.
        let mut remaining = available.clone();
        remaining.set(attribute, false);

        let children = parts
            .map(|part| self.grow(sample, &part, rows, &remaining));

        Box::new(Node::branch(splitter, children))
    }
}

impl Learner for Id3 {
    type Hypothesis = DecisionTreeClassifier;

    fn induce(&self, sample: &Sample) -> Self::Hypothesis {
        crate::checkers::sample(sample);

        let (n_example, n_attribute) = sample.shape();
        let rows = (0..n_example).collect::<Vec<_>>();

        let mut available = FixedBitSet::with_capacity(n_attribute);
        available.insert_range(..);

        let root = self.grow(sample, &rows, &rows, &available);

        DecisionTreeClassifier::from(root)
    }
}

/// Returns the class label shared by every given row,
/// or `None` if two rows disagree.
/// `rows` must be non-empty.
fn same_label(sample: &Sample, rows: &[usize]) -> Option<u8> {
    let first = sample.label(rows[0]);
    rows.iter()
        .all(|&row| sample.label(row) == first)
        .then_some(first)
}

fn label_frequencies(sample: &Sample, rows: &[usize]) -> [usize; N_LABELS] {
    let mut frequencies = [0_usize; N_LABELS];
    for &row in rows {
        frequencies[usize::from(sample.label(row))] += 1;
    }
    frequencies
}

/// Returns the most frequent class label of `frequency_rows`,
/// considering only labels that occur in `candidate_rows`.
/// A frequency tie among candidates resolves to the smallest label.
///
/// Every call site guarantees that at least one candidate label
/// occurs in `frequency_rows`; a violation is a bug in the recursion,
/// not an input error.
fn plurality(
    sample: &Sample,
    frequency_rows: &[usize],
    candidate_rows: &[usize],
) -> u8
{
    let frequencies = label_frequencies(sample, frequency_rows);
    let candidates = label_frequencies(sample, candidate_rows);

    let mut best = None;
    let mut best_frequency = 0_usize;
    for label in 0..N_LABELS {
        if candidates[label] == 0 { continue; }
        if frequencies[label] > best_frequency {
            best = Some(label as u8);
            best_frequency = frequencies[label];
        }
    }

    best.expect("no candidate class occurs in the frequency source")
}

/// Returns `true` iff two or more class labels are tied
/// for the highest frequency among the given rows.
/// A single distinct label is never a tie.
fn class_tie(sample: &Sample, rows: &[usize]) -> bool {
    let mut frequencies = label_frequencies(sample, rows)
        .into_iter()
        .filter(|&count| count > 0)
        .collect::<Vec<_>>();
    frequencies.sort_unstable_by(|a, b| b.cmp(a));

    frequencies.len() > 1 && frequencies[0] == frequencies[1]
}
