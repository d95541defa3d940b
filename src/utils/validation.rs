use crate::utils::error::{ContactError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Unwraps an argument the caller was required to supply.
pub fn require_argument<T>(arg_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ContactError::InvalidArgument {
        message: format!("'{}' must be provided", arg_name),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContactError::ValidationError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
