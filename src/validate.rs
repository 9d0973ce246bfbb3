use thiserror::Error;

use crate::form::RequestForm;
use crate::units::UnitEntry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("all registration fields are required")]
    RequiredFieldsMissing,
    #[error("CNPJ must contain exactly 14 digits")]
    InvalidTaxId,
    #[error("every unit needs a code and at least one complete date/time slot")]
    InvalidUnits,
}

pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn required_fields_complete(form: &RequestForm) -> bool {
    !form.physician.is_empty()
        && !form.cnpj.is_empty()
        && !form.coordination.is_empty()
        && !form.request_type.is_empty()
        && !form.notes.is_empty()
}

/// Format check only: 14 digits after stripping separators. The CNPJ check
/// digits are deliberately not verified.
pub fn cnpj_is_valid(cnpj: &str) -> bool {
    digits_only(cnpj).len() == 14
}

/// `every`-style check: an empty unit list passes vacuously.
pub fn units_are_valid(units: &[UnitEntry]) -> bool {
    units.iter().all(|u| {
        !u.code.is_empty()
            && !u.slots.is_empty()
            && u.slots.iter().all(|s| s.date.is_some() && !s.time_range.is_empty())
    })
}

/// Runs the checks in order and reports the first failure. Message mapping is
/// the caller's job.
pub fn validate(form: &RequestForm, units: &[UnitEntry]) -> Result<(), ValidationError> {
    if !required_fields_complete(form) {
        return Err(ValidationError::RequiredFieldsMissing);
    }
    if !cnpj_is_valid(&form.cnpj) {
        return Err(ValidationError::InvalidTaxId);
    }
    if !units_are_valid(units) {
        return Err(ValidationError::InvalidUnits);
    }
    Ok(())
}
