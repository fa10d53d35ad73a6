//! Resolved MCC record.
//!
//! This module provides `CodeInfo`, the merged view of one code across
//! the range table and the three description lists.

use crate::{DataSource, MccRange};

/// Everything known about a single MCC.
///
/// Description fields are empty strings when their list has no entry for
/// the code. An empty field means "no data from that list", not an error.
///
/// # Examples
///
/// ```
/// use mcc_types::{CodeInfo, DataSource, MccRange};
///
/// let info = CodeInfo {
///     range: MccRange::new("5000", "5599", "Retail outlet services"),
///     iso_description: "Grocery stores and supermarkets".to_string(),
///     usda_description: String::new(),
///     processor_description: "Grocery Stores, Supermarkets".to_string(),
///     processor_code: "grocery_stores_supermarkets".to_string(),
/// };
///
/// assert_eq!(info.sources(), vec![DataSource::Iso, DataSource::Processor]);
/// assert_eq!(info.description(), Some("Grocery stores and supermarkets"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeInfo {
    /// Range containing the code.
    pub range: MccRange,
    /// Description from the ISO 18245 list.
    pub iso_description: String,
    /// Description from the USDA list.
    pub usda_description: String,
    /// Description from the processor list.
    pub processor_description: String,
    /// Processor's machine-readable category identifier.
    pub processor_code: String,
}

impl CodeInfo {
    /// Creates a record with only the range populated.
    pub fn for_range(range: MccRange) -> Self {
        Self {
            range,
            iso_description: String::new(),
            usda_description: String::new(),
            processor_description: String::new(),
            processor_code: String::new(),
        }
    }

    /// Lists the reference lists with populated fields, in probe order.
    ///
    /// This reflects field contents, not key matches: a list row whose
    /// description is empty still lets a lookup succeed but is not listed.
    pub fn sources(&self) -> Vec<DataSource> {
        DataSource::ALL
            .into_iter()
            .filter(|source| self.has_source(*source))
            .collect()
    }

    /// Returns true if the fields filled from the given list are non-empty.
    pub fn has_source(&self, source: DataSource) -> bool {
        match source {
            DataSource::Iso => !self.iso_description.is_empty(),
            DataSource::Usda => !self.usda_description.is_empty(),
            DataSource::Processor => {
                !self.processor_description.is_empty() || !self.processor_code.is_empty()
            }
        }
    }

    /// First non-empty description, preferring ISO, then USDA, then processor.
    pub fn description(&self) -> Option<&str> {
        [
            &self.iso_description,
            &self.usda_description,
            &self.processor_description,
        ]
        .into_iter()
        .find(|d| !d.is_empty())
        .map(String::as_str)
    }
}
