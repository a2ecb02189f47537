use std::io::{BufRead, BufReader, Read};

use crate::constants::N_VALUES;
use super::sample_reader::DataError;

/// Struct `Sample` holds a batch of ternary-valued examples.
///
/// Each example is one row; every entry takes a value in `{0, 1, 2}`
/// and the last entry of a row is its class label.
/// The columns before the last one correspond, in order,
/// to the attribute names held by the sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    attributes: Vec<String>,
    examples: Vec<Vec<u8>>,
}

impl Sample {
    /// Construct a `Sample` from attribute names and raw rows.
    ///
    /// Each row must have length `attributes.len() + 1`
    /// (the class label is the last entry), and every entry
    /// must take a value in `{0, 1, 2}`.
    /// This method panics otherwise.
    pub fn from_raw(attributes: Vec<String>, examples: Vec<Vec<u8>>) -> Self {
        let n_column = attributes.len() + 1;
        for example in &examples {
            assert_eq!(
                example.len(), n_column,
                "every example must have one value per attribute \
                 plus a class label"
            );
            assert!(
                example.iter().all(|&v| usize::from(v) < N_VALUES),
                "example values must be in {{0, 1, 2}}. got {example:?}"
            );
        }

        Self { attributes, examples, }
    }

    /// Read a whitespace-separated table to [`Sample`].
    ///
    /// The first non-blank line names every column;
    /// the last column is the class column and its name is dropped
    /// from the attribute list.
    /// Each further non-blank line is one example row.
    /// Blank lines are ignored everywhere.
    pub fn from_table<R>(reader: BufReader<R>) -> Result<Self, DataError>
        where R: Read,
    {
        let mut lines = reader.lines();
        let mut lineno = 0_usize;

        // Skip blank lines until the header row of column names.
        let mut header = None;
        for line in lines.by_ref() {
            let line = line?;
            lineno += 1;
            if !line.trim().is_empty() {
                header = Some(line);
                break;
            }
        }
        let header = header.ok_or(DataError::MissingHeader)?;

        let mut attributes = header.split_whitespace()
            .map(String::from)
            .collect::<Vec<_>>();
        if attributes.len() < 2 {
            return Err(DataError::NoAttributes);
        }
        let n_column = attributes.len();
        // The last column names the class.
        attributes.pop();

        let mut examples = Vec::new();
        for line in lines {
            let line = line?;
            lineno += 1;
            if line.trim().is_empty() { continue; }

            let example = line.split_whitespace()
                .map(|token| parse_value(token, lineno))
                .collect::<Result<Vec<_>, _>>()?;
            if example.len() != n_column {
                return Err(DataError::WrongColumnCount {
                    line: lineno,
                    expected: n_column,
                    found: example.len(),
                });
            }
            examples.push(example);
        }

        if examples.is_empty() {
            return Err(DataError::NoExamples);
        }

        Ok(Self { attributes, examples, })
    }

    /// Returns the pair of the number of examples and
    /// the number of attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.attributes.len())
    }

    /// Returns the attribute names in declared order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }

    /// Returns the name of the attribute at the given index.
    pub fn attribute_name(&self, attribute: usize) -> &str {
        &self.attributes[attribute]
    }

    /// Returns the value of the `attribute`-th column
    /// of the `row`-th example.
    #[inline]
    pub fn value(&self, row: usize, attribute: usize) -> u8 {
        self.examples[row][attribute]
    }

    /// Returns the class label of the `row`-th example.
    #[inline]
    pub fn label(&self, row: usize) -> u8 {
        let example = &self.examples[row];
        example[example.len() - 1]
    }

    /// Returns a new `Sample` holding copies of the given rows,
    /// in the given order.
    pub fn subset<T>(&self, rows: T) -> Self
        where T: AsRef<[usize]>
    {
        let examples = rows.as_ref()
            .iter()
            .map(|&row| self.examples[row].clone())
            .collect();

        Self {
            attributes: self.attributes.clone(),
            examples,
        }
    }
}

fn parse_value(token: &str, line: usize) -> Result<u8, DataError> {
    match token.parse::<u8>() {
        Ok(value) if usize::from(value) < N_VALUES => Ok(value),
        _ => Err(DataError::BadValue {
            line,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_examples(bytes: &[u8]) -> Sample {
        let reader = BufReader::new(bytes);
        Sample::from_table(reader).unwrap()
    }

    #[test]
    fn test_from_table_01() {
        let bytes = b"\
            wind humidity class\n\
            0 1 2\n\
            2 0 1\n\
            1 1 0";
        let sample = training_examples(bytes);
        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.attribute_name(0), "wind");
        assert_eq!(sample.attribute_name(1), "humidity");
        assert_eq!(sample.value(1, 0), 2);
        assert_eq!(sample.label(0), 2);
    }

    #[test]
    fn test_from_table_blank_lines_01() {
        let bytes = b"\
            \n\
            a b class\n\
            \n\
            0 0 1\n\
            \n\
            1 2 2\n";
        let sample = training_examples(bytes);
        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample.label(1), 2);
    }

    #[test]
    fn test_from_table_bad_value_01() {
        let bytes = b"\
            a b class\n\
            0 3 1";
        let reader = BufReader::new(&bytes[..]);
        let err = Sample::from_table(reader).unwrap_err();
        assert!(matches!(err, DataError::BadValue { line: 2, .. }));
    }

    #[test]
    fn test_from_table_short_row_01() {
        let bytes = b"\
            a b class\n\
            0 1";
        let reader = BufReader::new(&bytes[..]);
        let err = Sample::from_table(reader).unwrap_err();
        assert!(matches!(
            err,
            DataError::WrongColumnCount { line: 2, expected: 3, found: 2 }
        ));
    }

    #[test]
    fn test_from_table_no_examples_01() {
        let bytes = b"a b class\n\n";
        let reader = BufReader::new(&bytes[..]);
        let err = Sample::from_table(reader).unwrap_err();
        assert!(matches!(err, DataError::NoExamples));
    }

    #[test]
    fn test_subset_01() {
        let sample = training_examples(b"\
            a b class\n\
            0 0 0\n\
            1 1 1\n\
            2 2 2");
        let subset = sample.subset([2, 0]);
        assert_eq!(subset.shape(), (2, 2));
        assert_eq!(subset.label(0), 2);
        assert_eq!(subset.label(1), 0);
    }
}
