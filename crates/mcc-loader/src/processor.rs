//! Stripe processor list parser.

use csv::StringRecord;

use crate::parser::{parse, DatasetRecord};
use crate::types::MccResult;

/// Expected columns in the processor list.
const PROCESSOR_COLUMNS: &[&str] = &["mcc", "description", "stripe_code"];

/// A row of the processor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorRow {
    /// Code exactly as written in the list.
    pub mcc: String,
    /// Processor's display name for the category.
    pub description: String,
    /// Processor's machine-readable category identifier.
    pub processor_code: String,
}

impl DatasetRecord for ProcessorRow {
    const EXPECTED_COLUMNS: &'static [&'static str] = PROCESSOR_COLUMNS;

    fn from_record(record: &StringRecord) -> MccResult<Self> {
        Ok(ProcessorRow {
            mcc: parse::column(record, 0),
            description: parse::column(record, 1),
            processor_code: parse::column(record, 2),
        })
    }

    fn key(&self) -> &str {
        &self.mcc
    }
}
