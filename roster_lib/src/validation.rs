//! Input validation run before a request reaches the shaping pipeline.
//!
//! Ordering and field strings are never validated here: the pipeline drops
//! whatever it cannot resolve. Only inputs that change *which* records are
//! selected are checked.

use uuid::Uuid;

use crate::error::RosterError;
use crate::forms::{CompanyForm, EmployeeForm};
use crate::parameters::EmployeeParameters;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_EMPLOYEE_NAME_LENGTH: usize = 30;
pub const MAX_POSITION_LENGTH: usize = 20;
pub const MIN_EMPLOYEE_AGE: i32 = 18;
pub const MAX_COMPANY_TEXT_LENGTH: usize = 60;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, RosterError> {
    if input.len() > max_len {
        return Err(RosterError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(RosterError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search/name string: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, RosterError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Like [`validate_search`], but a term with nothing left after
/// sanitization means "no search" instead of an error.
pub fn optional_search(input: &str) -> Result<Option<String>, RosterError> {
    match validate_search(input) {
        Ok(term) => Ok(Some(term)),
        Err(_) if input.len() <= MAX_SEARCH_LENGTH => Ok(None),
        Err(e) => Err(e),
    }
}

/// Reject employee age ranges whose upper bound is not above the lower bound.
pub fn validate_age_range(params: &EmployeeParameters) -> Result<(), RosterError> {
    if params.is_valid_age_range() {
        Ok(())
    } else {
        Err(RosterError::InvalidInput(format!(
            "max age ({}) must be greater than min age ({})",
            params.max_age, params.min_age
        )))
    }
}

/// Validate an entity id: a hyphenated or simple UUID.
pub fn validate_id(input: &str) -> Result<Uuid, RosterError> {
    let trimmed = input.trim();
    Uuid::parse_str(trimmed).map_err(|_| {
        RosterError::InvalidInput(format!(
            "invalid id '{}'. Expected a UUID (e.g., c9d4c053-49b6-410c-bc78-2d54a9991870)",
            trimmed
        ))
    })
}

/// Trimmed, non-empty text of at most `max_chars` characters.
fn required_text(value: &str, field: &str, max_chars: usize) -> Result<(), RosterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::InvalidInput(format!(
            "{} is a required field",
            field
        )));
    }
    if trimmed.chars().count() > max_chars {
        return Err(RosterError::InvalidInput(format!(
            "maximum length for the {} is {} characters",
            field.to_lowercase(),
            max_chars
        )));
    }
    Ok(())
}

/// Validate an employee payload: name and position required and bounded,
/// age at least 18.
pub fn validate_employee(form: &EmployeeForm) -> Result<(), RosterError> {
    required_text(&form.name, "Employee name", MAX_EMPLOYEE_NAME_LENGTH)?;
    required_text(&form.position, "Position", MAX_POSITION_LENGTH)?;
    if form.age < MIN_EMPLOYEE_AGE {
        return Err(RosterError::InvalidInput(format!(
            "age can't be lower than {} (got {})",
            MIN_EMPLOYEE_AGE, form.age
        )));
    }
    Ok(())
}

/// Validate a company payload and every employee it carries.
pub fn validate_company(form: &CompanyForm) -> Result<(), RosterError> {
    required_text(&form.name, "Company name", MAX_COMPANY_TEXT_LENGTH)?;
    required_text(&form.address, "Company address", MAX_COMPANY_TEXT_LENGTH)?;
    form.employees.iter().try_for_each(validate_employee)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
