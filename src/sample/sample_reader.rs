use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use thiserror::Error;

use super::sample_struct::Sample;

/// The errors reported while reading a data file.
///
/// Every variant is a defect of the file, not of the caller:
/// a file that reads without error always yields a [`Sample`]
/// the induction core can consume as-is.
#[derive(Debug, Error)]
pub enum DataError {
    /// Reading the file itself failed.
    #[error("failed to read the data file")]
    Io(#[from] io::Error),

    /// The file has no non-blank line to use as the header.
    #[error("the file has no header line")]
    MissingHeader,

    /// The header names fewer than two columns,
    /// so there is no attribute before the class column.
    #[error("the header must name at least one attribute and the class")]
    NoAttributes,

    /// An example row has the wrong number of columns.
    #[error("line {line}: expected {expected} columns, found {found}")]
    WrongColumnCount {
        /// 1-based line number in the file.
        line: usize,
        /// The column count announced by the header.
        expected: usize,
        /// The column count found on this line.
        found: usize,
    },

    /// A token is not an integer in `{0, 1, 2}`.
    #[error("line {line}: `{token}` is not a value in {{0, 1, 2}}")]
    BadValue {
        /// 1-based line number in the file.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The file has a header but no example rows.
    #[error("the file contains a header but no example rows")]
    NoExamples,
}

/// A struct that returns [`Sample`].
/// Using this struct, one can read a whitespace-separated table file
/// to [`Sample`]. Other formats are not supported.
///
/// # Example
/// ```no_run
/// use terntree::SampleReader;
/// let filename = "/path/to/table/file.txt";
/// let sample = SampleReader::default()
///     .file(filename)
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct SampleReader<P> {
    file: Option<P>,
}

impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Reads the file set by [`SampleReader::file`],
    /// and returns `Result<Sample, DataError>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample, DataError> {
        let file = self.file
            .expect("the data file is not set");
        let file = File::open(file)?;

        Sample::from_table(BufReader::new(file))
    }
}
