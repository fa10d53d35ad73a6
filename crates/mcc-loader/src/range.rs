//! Range table parser.
//!
//! Parses `iso18245_ranges.csv`. Bounds are kept verbatim in the
//! [`MccRange`] and parsed once for the scan.

use csv::StringRecord;
use mcc_types::{MccCode, MccRange};

use crate::parser::{parse, DatasetRecord};
use crate::types::MccResult;

/// Expected columns in the range table.
const RANGE_COLUMNS: &[&str] = &["start", "end", "description"];

/// A row of the range table with its numeric bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRow {
    /// The range as written in the table.
    pub range: MccRange,
    /// Parsed `range.start`.
    pub start: MccCode,
    /// Parsed `range.end`.
    pub end: MccCode,
}

impl RangeRow {
    /// Returns true if `code` falls inside this row.
    pub fn contains(&self, code: MccCode) -> bool {
        self.start <= code && code <= self.end
    }
}

impl DatasetRecord for RangeRow {
    const EXPECTED_COLUMNS: &'static [&'static str] = RANGE_COLUMNS;

    fn from_record(record: &StringRecord) -> MccResult<Self> {
        let start_text = parse::column(record, 0);
        let end_text = parse::column(record, 1);
        let start = parse::code(&start_text)?;
        let end = parse::code(&end_text)?;

        Ok(RangeRow {
            range: MccRange::new(start_text, end_text, parse::column(record, 2)),
            start,
            end,
        })
    }

    fn key(&self) -> &str {
        &self.range.start
    }
}
