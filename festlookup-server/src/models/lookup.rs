//! Lookup input newtypes
//!
//! Both inputs are trimmed of surrounding whitespace before use. Dates are
//! treated as opaque strings (YYYY-MM-DD expected, not validated); the
//! database does the matching.

use super::ValidationError;

/// Holiday date as supplied by the caller, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayDate(String);

impl HolidayDate {
    /// Trim surrounding whitespace; reject an empty result.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "holidaydate" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HolidayDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// District name as supplied by the caller, trimmed.
///
/// Case is preserved here; the lookup query compares case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictName(String);

impl DistrictName {
    /// Trim surrounding whitespace; reject an empty result.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "district" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DistrictName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
