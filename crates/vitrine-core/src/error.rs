//! Error types for Vitrine form validation

use thiserror::Error;

/// Validation failures surfaced to the user through the toast layer.
///
/// The `Display` text is the exact copy shown in the error toast, so the
/// form controller can hand the error straight to the notifier.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// One or more required fields were empty
    #[error("Please fill in all fields")]
    MissingField,

    /// Email address failed the shape check
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_is_user_facing_copy() {
        assert_eq!(FormError::MissingField.to_string(), "Please fill in all fields");
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
