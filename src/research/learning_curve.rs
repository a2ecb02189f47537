use rand::prelude::*;
use colored::Colorize;

use crate::Sample;

const WIDTH: usize = 9;

/// A struct that generates training subsets of increasing size
/// for learning-curve experiments.
///
/// `LearningCurve` draws rows without replacement and yields nested
/// subsets of sizes `step, 2 * step, ...` up to the full sample,
/// so each subset extends the previous one.
///
/// # Example
/// ```no_run
/// use terntree::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/table/file.txt")
///     .read()
///     .unwrap();
/// let test = SampleReader::default()
///     .file("/path/to/test/file.txt")
///     .read()
///     .unwrap();
///
/// let curve = LearningCurve::new(&sample)
///     .step(100)
///     .seed(777)
///     .verbose(true)
///     .shuffle();
/// for subset in curve {
///     let f = Id3::default().induce(&subset);
///     let n_train = subset.shape().0;
///     let accuracy = f.accuracy(&test);
///     println!("[{n_train} examples] [test {accuracy:.1}%]");
/// }
/// ```
pub struct LearningCurve<'a> {
    step: usize,
    seed: u64,
    current: usize,
    verbose: bool,
    sample: &'a Sample,
    ix: Vec<usize>,
}

impl<'a> LearningCurve<'a> {
    /// Construct a new instance of `LearningCurve.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_example = sample.shape().0;
        let ix = (0..n_example).collect::<Vec<_>>();
        Self {
            step: 100,
            seed: 1234,
            current: 0,
            verbose: false,
            sample,
            ix,
        }
    }

    /// Set the number of examples added per subset.
    /// Default value is `100.`
    #[inline]
    pub fn step(mut self, step: usize) -> Self {
        assert!(step > 0, "the subset step must be positive");
        self.step = step;
        self
    }

    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the verbose parameter.
    /// If `true`, `LearningCurve` prints some information
    /// when generating a subset.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Shuffle the row order.
    /// By default, `LearningCurve` does not shuffle the sample
    /// and the subsets are prefixes of the original row order.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }
}

impl<'a> Iterator for LearningCurve<'a> {
    type Item = Sample;
    fn next(&mut self) -> Option<Self::Item> {
        let n_example = self.sample.shape().0;
        if self.current >= n_example { return None; }

        self.current = (self.current + self.step).min(n_example);
        let subset = self.sample.subset(&self.ix[..self.current]);

        if self.verbose {
            let size = subset.shape().0;
            println!(
                "{}",
                format!("  [TRAIN {size:>WIDTH$}]").bold().green(),
            );
        }

        Some(subset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_rows() -> Sample {
        let examples = (0..10_u8)
            .map(|i| vec![i % 3, (i + 1) % 3, i % 3])
            .collect::<Vec<_>>();
        Sample::from_raw(
            vec!["a".to_string(), "b".to_string()],
            examples,
        )
    }

    #[test]
    fn test_subset_sizes_01() {
        let sample = ten_rows();
        let sizes = LearningCurve::new(&sample)
            .step(4)
            .map(|subset| subset.shape().0)
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![4, 8, 10]);
    }

    #[test]
    fn test_shuffle_deterministic_01() {
        let sample = ten_rows();
        let first = LearningCurve::new(&sample)
            .step(5)
            .seed(42)
            .shuffle()
            .collect::<Vec<_>>();
        let second = LearningCurve::new(&sample)
            .step(5)
            .seed(42)
            .shuffle()
            .collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_subsets_are_nested_01() {
        let sample = ten_rows();
        let mut curve = LearningCurve::new(&sample)
            .step(3)
            .seed(7)
            .shuffle();

        let small = curve.next().unwrap();
        let large = curve.next().unwrap();
        for row in 0..small.shape().0 {
            assert_eq!(small.label(row), large.label(row));
            assert_eq!(small.value(row, 0), large.value(row, 0));
        }
    }
}
