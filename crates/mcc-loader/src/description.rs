//! ISO and USDA description list parser.
//!
//! Both lists share the `mcc,description` layout.

use csv::StringRecord;

use crate::parser::{parse, DatasetRecord};
use crate::types::MccResult;

/// Expected columns in a description list.
const DESCRIPTION_COLUMNS: &[&str] = &["mcc", "description"];

/// A row of the ISO 18245 or USDA list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRow {
    /// Code exactly as written in the list.
    pub mcc: String,
    /// Human-readable description.
    pub description: String,
}

impl DatasetRecord for DescriptionRow {
    const EXPECTED_COLUMNS: &'static [&'static str] = DESCRIPTION_COLUMNS;

    fn from_record(record: &StringRecord) -> MccResult<Self> {
        Ok(DescriptionRow {
            mcc: parse::column(record, 0),
            description: parse::column(record, 1),
        })
    }

    fn key(&self) -> &str {
        &self.mcc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(fields: &[&str]) -> StringRecord {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field);
        }
        record
    }

    #[test]
    fn test_parse_description_record() {
        let record = make_record(&["5411", "Grocery stores and supermarkets"]);
        let row = DescriptionRow::from_record(&record).unwrap();
        assert_eq!(row.mcc, "5411");
        assert_eq!(row.description, "Grocery stores and supermarkets");
        assert_eq!(row.key(), "5411");
    }

    #[test]
    fn test_key_is_not_normalized() {
        let record = make_record(&["0742", "Veterinary Services"]);
        let row = DescriptionRow::from_record(&record).unwrap();
        assert_eq!(row.key(), "0742");
        assert_ne!(row.key(), "742");
    }
}
