//! Merchant Category Code value type.
//!
//! MCCs are four-digit decimal codes. The semantic value is the integer;
//! leading zeros only matter for display and for exact-key lookups.

/// A validated Merchant Category Code.
///
/// # Examples
///
/// ```
/// use mcc_types::{MccCode, MCC_MAX, MCC_MIN};
///
/// let grocery: MccCode = 5411;
/// assert!((MCC_MIN..=MCC_MAX).contains(&grocery));
/// ```
pub type MccCode = u16;

/// Lowest valid MCC.
pub const MCC_MIN: MccCode = 0;

/// Highest valid MCC.
pub const MCC_MAX: MccCode = 9999;

/// Formats a code as its canonical four-digit, zero-padded string.
///
/// ```
/// assert_eq!(mcc_types::format_code(742), "0742");
/// ```
pub fn format_code(code: MccCode) -> String {
    format!("{:04}", code)
}
