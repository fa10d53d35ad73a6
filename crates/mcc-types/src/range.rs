//! MCC range type.
//!
//! This module provides the `MccRange` struct representing one row of the
//! ISO 18245 range table.

use crate::MccCode;

/// Description prefix marking a range the standard leaves unassigned.
pub const RESERVED_PREFIX: &str = "Reserved";

/// A contiguous block of MCCs sharing one categorical description.
///
/// `start` and `end` keep the exact text from the range table.
///
/// # Examples
///
/// ```
/// use mcc_types::MccRange;
///
/// let range = MccRange::new("5000", "5599", "Retail outlet services");
/// assert!(!range.reserved);
/// assert!(range.contains(5411));
/// assert!(!range.contains(5600));
///
/// let reserved = MccRange::new("1000", "1499", "Reserved for ISO use");
/// assert!(reserved.reserved);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MccRange {
    /// First code of the range, as written in the range table.
    pub start: String,
    /// Last code of the range (inclusive), as written in the range table.
    pub end: String,
    /// Category name for every code in the range.
    pub description: String,
    /// True iff `description` starts with "Reserved".
    pub reserved: bool,
}

impl MccRange {
    /// Creates a range, deriving `reserved` from the description.
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let description = description.into();
        let reserved = is_reserved_description(&description);
        Self {
            start: start.into(),
            end: end.into(),
            description,
            reserved,
        }
    }

    /// Numeric value of `start`, if it parses.
    pub fn start_value(&self) -> Option<MccCode> {
        self.start.trim().parse().ok()
    }

    /// Numeric value of `end`, if it parses.
    pub fn end_value(&self) -> Option<MccCode> {
        self.end.trim().parse().ok()
    }

    /// Returns true if `code` falls inside this range.
    ///
    /// Always false when either bound fails to parse.
    pub fn contains(&self, code: MccCode) -> bool {
        match (self.start_value(), self.end_value()) {
            (Some(start), Some(end)) => start <= code && code <= end,
            _ => false,
        }
    }
}

/// Returns true if a range description marks the range as reserved.
///
/// The check is a case-sensitive prefix match.
pub fn is_reserved_description(description: &str) -> bool {
    description.starts_with(RESERVED_PREFIX)
}
