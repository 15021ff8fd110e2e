//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD handlers. The store is schemaless, so every limit is enforced here.

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: department names, positions, titles, item names
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and free-form text
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Extract a required create field, failing with the field name attached.
pub fn require_field<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| {
        AppError::with_message(ErrorCode::RequiredField, format!("{field} is required"))
            .with_detail("field", field)
    })
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        ));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty and within the
/// length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_required_text(v, field, max_len)?;
    }
    Ok(())
}

/// Validate the shape of an email address: exactly one `@` with a dot in the
/// domain part, no whitespace.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;

    let invalid = || {
        AppError::with_message(
            ErrorCode::AccountEmailInvalid,
            format!("'{email}' is not a valid email address"),
        )
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() {
        return Err(invalid());
    }
    Ok(())
}

/// Validate a date string as `YYYY-MM-DD`.
pub fn validate_date(value: &str, field: &str) -> Result<(), AppError> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be a date in YYYY-MM-DD format, got '{value}'"),
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_names_the_field() {
        assert_eq!(require_field(Some(1), "role").unwrap(), 1);

        let err = require_field::<u32>(None, "role").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(
            err.details.unwrap().get("field"),
            Some(&serde_json::Value::String("role".into()))
        );
    }

    #[test]
    fn test_required_text_rejects_empty_and_blank() {
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Engineering", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text_allows_none() {
        assert!(validate_optional_text(&None, "description", MAX_DESCRIPTION_LEN).is_ok());
        assert!(
            validate_optional_text(&Some("ok".to_string()), "description", MAX_DESCRIPTION_LEN)
                .is_ok()
        );
        assert!(
            validate_optional_text(&Some(String::new()), "description", MAX_DESCRIPTION_LEN)
                .is_err()
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("admin@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.example.co").is_ok());

        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user name@example.com").is_err());
        assert!(validate_email("user@exa mple.com").is_err());
    }

    #[test]
    fn test_date_format() {
        assert!(validate_date("2024-03-15", "hireDate").is_ok());
        assert!(validate_date("2024-3-15", "hireDate").is_err());
        assert!(validate_date("15/03/2024", "hireDate").is_err());
        assert!(validate_date("2024-02-30", "hireDate").is_err());
    }
}
