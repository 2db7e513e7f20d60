//! Client-side input validation
//!
//! Fail-fast checks raised before any network round-trip.

use crate::error::{ClientError, ValidationError};
use shared::request::ProfileUpdate;

/// Minimum password length accepted by the backend
pub const MIN_PASSWORD_LEN: usize = 5;

/// Validate registration input: all fields present, passwords matching
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmptyField("email"));
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyField("password"));
    }
    if confirm.is_empty() {
        return Err(ValidationError::EmptyField("password confirmation"));
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate a phone number: `+7` followed by exactly 10 digits
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    match phone.strip_prefix("+7") {
        Some(rest) if rest.len() == 10 && rest.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        _ => Err(ValidationError::InvalidPhoneNumber),
    }
}

/// Validate a sparse profile update before it goes on the wire
///
/// Only the fields that are actually set are checked; an update with no
/// fields at all is rejected without a round-trip.
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<(), ClientError> {
    if update.is_empty() {
        return Err(ClientError::NothingToUpdate);
    }

    if let Some(phone) = update.phone_number.as_deref()
        && !phone.is_empty()
    {
        validate_phone(phone)?;
    }

    if let Some(new_password) = update.new_password.as_deref()
        && !new_password.is_empty()
    {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort.into());
        }
        if update.current_password.is_none() {
            return Err(ValidationError::CurrentPasswordRequired.into());
        }
    }

    Ok(())
}
