//! # mcc-types
//!
//! Type definitions for Merchant Category Codes (ISO 18245).
//!
//! This crate provides the value types shared by the MCC loader: the code
//! itself, the range a code belongs to, and the merged record produced by
//! a lookup.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use mcc_types::{CodeInfo, MccCode, MccRange};
//!
//! let range = MccRange::new("5000", "5599", "Retail outlet services");
//! let code: MccCode = 5411;
//! assert!(range.contains(code));
//!
//! let info = CodeInfo::for_range(range);
//! assert!(info.sources().is_empty());
//! ```

#![warn(missing_docs)]

mod code;
mod info;
pub mod range;
mod source;

// Re-export all public types at crate root
pub use code::{format_code, MccCode, MCC_MAX, MCC_MIN};
pub use info::CodeInfo;
pub use range::{is_reserved_description, MccRange, RESERVED_PREFIX};
pub use source::DataSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _code: MccCode = MCC_MAX;
        let _source = DataSource::Usda;
        let _range = MccRange::new("0000", "0699", "Reserved for ISO use");
    }

    #[test]
    fn test_format_code_pads_to_four_digits() {
        assert_eq!(format_code(0), "0000");
        assert_eq!(format_code(742), "0742");
        assert_eq!(format_code(5411), "5411");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let info = CodeInfo {
            iso_description: "Grocery stores and supermarkets".to_string(),
            ..CodeInfo::for_range(MccRange::new("5000", "5599", "Retail outlet services"))
        };

        let json = serde_json::to_string(&info).unwrap();
        let parsed: CodeInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_range_serializes_with_reserved_flag() {
        let range = MccRange::new("1000", "1499", "Reserved for ISO use");
        let value = serde_json::to_value(&range).unwrap();
        assert_eq!(value["start"], "1000");
        assert_eq!(value["reserved"], true);
    }
}
