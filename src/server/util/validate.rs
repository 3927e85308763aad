use crate::server::error::AppError;

/// Rejects empty or whitespace-only values
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - The value to check
///
/// # Returns
/// - `Ok(())` - Value contains at least one non-whitespace character
/// - `Err(AppError::BadRequest)` - Value is blank
pub fn require_not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be blank", field)));
    }

    Ok(())
}

/// Rejects values that cannot be an email address
///
/// Only checks for a non-empty local part and domain around a single `@`.
pub fn require_email(value: &str) -> Result<(), AppError> {
    match value.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(AppError::BadRequest(format!(
            "'{}' is not a valid email address",
            value
        ))),
    }
}

pub fn require_non_negative(field: &str, value: i32) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::BadRequest(format!(
            "{} must not be negative",
            field
        )));
    }

    Ok(())
}

/// Largest page size accepted by paginated listings.
pub const MAX_ENTRIES: u64 = 100;

/// Rejects page windows the database cannot address
///
/// `entries` must be within `1..=MAX_ENTRIES` and the row offset `page * entries` must fit
/// in SQLite's signed 64-bit OFFSET.
///
/// # Returns
/// - `Ok(())` - Page window is usable
/// - `Err(AppError::BadRequest)` - Page size out of range or offset overflows
pub fn require_page_window(page: u64, entries: u64) -> Result<(), AppError> {
    if entries == 0 || entries > MAX_ENTRIES {
        return Err(AppError::BadRequest(format!(
            "entries must be between 1 and {}",
            MAX_ENTRIES
        )));
    }

    let offset = page
        .checked_mul(entries)
        .and_then(|offset| i64::try_from(offset).ok());

    if offset.is_none() {
        return Err(AppError::BadRequest(format!("page {} is out of range", page)));
    }

    Ok(())
}
