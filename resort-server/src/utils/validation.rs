//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on reasonable UX limits for names, notes and
//! contact fields; the embedded database does not enforce lengths itself.

use rust_decimal::Decimal;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: accommodation, room, ticket, customer, staff, item names
pub const MAX_NAME_LEN: usize = 200;

/// Notes / details / free-form descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, pickup location, pickup time
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a monetary amount is not negative.
pub fn validate_non_negative(value: Decimal, field: &str) -> Result<(), AppError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(())
}

/// Validate that a count (capacity, headcount) is at least 1.
pub fn validate_positive(value: u32, field: &str) -> Result<(), AppError> {
    if value == 0 {
        return Err(AppError::validation(format!(
            "{field} must be at least 1"
        )));
    }
    Ok(())
}

/// Validate a password against length limits (before hashing).
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN} characters)"
        )));
    }
    Ok(())
}

/// Minimal email shape check: `local@domain` with a dot-free local part rule
/// left to the mail system; we only reject obviously broken input.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(AppError::validation(format!("invalid email: {email}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_and_oversized() {
        assert!(validate_required_text("Giljo Hotel", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn money_must_not_be_negative() {
        assert!(validate_non_negative(Decimal::from(50000), "amount").is_ok());
        assert!(validate_non_negative(Decimal::ZERO, "amount").is_ok());
        assert!(validate_non_negative(Decimal::from(-1), "amount").is_err());
    }

    #[test]
    fn counts_start_at_one() {
        assert!(validate_positive(1, "capacity").is_ok());
        assert!(validate_positive(40, "capacity").is_ok());
        assert!(validate_positive(0, "capacity").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("staff@resort.example").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@resort.example").is_err());
        assert!(validate_email("staff@").is_err());
    }

    #[test]
    fn password_length_bounds() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }
}
