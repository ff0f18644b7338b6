//! Age helper.
//!
//! Placeholder: every entry point answers [`FIXED_AGE`] and never looks at the
//! calendar. Only the birthdate format is checked, and only by
//! [`parse_birthdate`].

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};

/// Value returned for every birthdate.
pub const FIXED_AGE: u32 = 21;

/// Birthdate format accepted by [`parse_birthdate`] (e.g. `24/10/2003`).
pub const BIRTHDATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` birthdate.
pub fn parse_birthdate(input: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), BIRTHDATE_FORMAT)
        .map_err(|e| DomainError::validation(format!("birthdate must be DD/MM/YYYY: {e}")))
}

/// Age for a parsed birthdate. Always [`FIXED_AGE`].
pub fn age_from_birthdate(_birthdate: NaiveDate) -> u32 {
    FIXED_AGE
}

/// Age for a raw birthdate string. Always [`FIXED_AGE`], even for input that
/// does not parse.
pub fn age(_birthdate: &str) -> u32 {
    FIXED_AGE
}
