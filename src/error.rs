// ⚠️ Error taxonomy
// Every fallible operation in the crate returns GalaxyError

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalaxyError {
    /// A form field was non-numeric, non-finite or out of range
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Financing API unreachable, timed out, or answered non-2xx
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// Financing API answered with a body we could not decode
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Financing API answered with an explicit `{"error": ...}` body
    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, GalaxyError>;

// Exit codes used by the CLI
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const NETWORK_FAILURE: i32 = 3;
    pub const MALFORMED_RESPONSE: i32 = 4;
    pub const REJECTED: i32 = 5;
}

impl GalaxyError {
    /// Shorthand for building an `InvalidInput` error
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        GalaxyError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            GalaxyError::InvalidInput { .. } => exit_code::INVALID_INPUT,
            GalaxyError::NetworkFailure(_) => exit_code::NETWORK_FAILURE,
            GalaxyError::MalformedResponse(_) => exit_code::MALFORMED_RESPONSE,
            GalaxyError::Rejected(_) => exit_code::REJECTED,
            GalaxyError::Io(_) | GalaxyError::Csv(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Field name for field-level messages, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            GalaxyError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = GalaxyError::invalid("term_months", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid input for term_months: must be greater than zero"
        );
        assert_eq!(err.field(), Some("term_months"));
        assert_eq!(err.exit_code(), exit_code::INVALID_INPUT);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            GalaxyError::invalid("price", "x").exit_code(),
            GalaxyError::NetworkFailure("down".into()).exit_code(),
            GalaxyError::MalformedResponse("bad".into()).exit_code(),
            GalaxyError::Rejected("no".into()).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
            assert_ne!(*a, exit_code::SUCCESS);
        }
    }

    #[test]
    fn test_io_error_has_no_field() {
        let err: GalaxyError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.field(), None);
        assert_eq!(err.exit_code(), exit_code::GENERAL_ERROR);
    }
}
