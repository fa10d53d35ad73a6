//! Generic dataset parser.
//!
//! Provides a streaming parser for the comma-separated MCC datasets.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{MccError, MccResult};

/// Trait for row types that can be parsed from a dataset record.
pub trait DatasetRecord: Sized {
    /// Expected header names for this row type.
    const EXPECTED_COLUMNS: &'static [&'static str];

    /// Parse a row from a CSV StringRecord.
    fn from_record(record: &StringRecord) -> MccResult<Self>;

    /// Lookup key: the first column, exactly as stored.
    fn key(&self) -> &str;
}

/// A streaming parser for dataset files.
pub struct DatasetParser<R: Read, T: DatasetRecord> {
    reader: Reader<R>,
    records_read: usize,
    _marker: PhantomData<T>,
}

impl<T: DatasetRecord> DatasetParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P) -> MccResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MccError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read, T: DatasetRecord> DatasetParser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R) -> MccResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
            _marker: PhantomData,
        })
    }

    /// Validates that the header row names the expected columns.
    fn validate_headers(reader: &mut Reader<R>) -> MccResult<()> {
        let headers = reader.headers()?;
        let expected = T::EXPECTED_COLUMNS;

        if headers.len() != expected.len() {
            return Err(MccError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}').trim();
            if found != *expected_col {
                return Err(MccError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of data records read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Parses all rows into a Vec, keeping file order.
    ///
    /// Stops at the first malformed row.
    pub fn parse_all(self) -> MccResult<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: DatasetRecord> Iterator for DatasetParser<R, T> {
    type Item = MccResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    // Skip empty records
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    return Some(T::from_record(&record));
                }
                Ok(false) => return None, // End of file
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Helper functions for parsing dataset field values.
pub mod parse {
    use csv::StringRecord;
    use mcc_types::MccCode;

    use super::{MccError, MccResult};

    /// Parses a range bound into a code.
    pub fn code(value: &str) -> MccResult<MccCode> {
        value
            .trim()
            .parse::<MccCode>()
            .map_err(|_| MccError::InvalidInteger {
                value: value.to_string(),
            })
    }

    /// Returns a column as an owned string, empty when absent.
    pub fn column(record: &StringRecord, index: usize) -> String {
        record.get(index).unwrap_or("").to_string()
    }
}
