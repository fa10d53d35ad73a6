//! MCC input validation.

use std::num::IntErrorKind;

use mcc_types::{MccCode, MCC_MAX, MCC_MIN};

use crate::types::{MccError, MccResult};

/// Validates an MCC string and returns its numeric value.
///
/// Surrounding whitespace is ignored. The input must otherwise be a
/// base-10 integer literal within 0..=9999.
///
/// # Errors
/// - `MalformedCode` if the input is not an integer.
/// - `InvalidCode` if the integer is out of range, including integers too
///   large to represent.
///
/// # Examples
///
/// ```
/// use mcc_loader::validate;
///
/// assert_eq!(validate("5411").unwrap(), 5411);
/// assert_eq!(validate("0742").unwrap(), 742);
/// assert!(validate("10000").is_err());
/// ```
pub fn validate(code: &str) -> MccResult<MccCode> {
    let value = match code.trim().parse::<i64>() {
        Ok(value) => value,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(MccError::InvalidCode {
                value: code.to_string(),
            })
        }
        Err(e) => {
            return Err(MccError::MalformedCode {
                value: code.to_string(),
                source: e,
            })
        }
    };

    if value < i64::from(MCC_MIN) || value > i64::from(MCC_MAX) {
        return Err(MccError::InvalidCode {
            value: code.to_string(),
        });
    }

    Ok(value as MccCode)
}
