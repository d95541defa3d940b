use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Validation error for '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ContactError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactError::InvalidArgument { message } => {
                format!("The contact book could not be processed: {}", message)
            }
            ContactError::ValidationError { field, reason } => {
                format!("Option --{} is not usable: {}", field.replace('_', "-"), reason)
            }
            ContactError::SerializationError(_) => {
                "The contact book could not be rendered for display".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
