//! Contact form validation
//!
//! Pure shape checks: no side effects, no panics, booleans and `Result`s
//! only. The email check is deliberately permissive: anything of the form
//! `local@domain.rest` with no whitespace passes; TLD length and
//! internationalization are out of scope.

use crate::error::FormError;

/// Checks that `text` looks like an email address.
///
/// Accepted shape: one or more non-whitespace, non-`@` characters, then
/// `@`, then a domain containing at least one `.` with a character on each
/// side. Anchored at both ends (no surrounding junk).
pub fn is_valid_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }

    let mut halves = text.splitn(2, '@');
    let local = halves.next().unwrap_or_default();
    let Some(domain) = halves.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs an interior dot: at least one character before and
    // after it. Dots themselves count as ordinary characters, so
    // "a@b.c.d" and "a@b.c." both pass, matching the permissive intent.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Checks that all three required fields are non-empty after trimming.
pub fn has_required_fields(name: &str, email: &str, message: &str) -> bool {
    !name.trim().is_empty() && !email.trim().is_empty() && !message.trim().is_empty()
}

/// A contact form submission before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// Sender's name
    pub name: String,
    /// Sender's reply address
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactDraft {
    /// Creates a draft from the three form fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validates the draft: required fields first, then email shape.
    ///
    /// The first failing check wins, so an empty form reports
    /// [`FormError::MissingField`] rather than complaining about the email.
    pub fn validate(&self) -> Result<(), FormError> {
        if !has_required_fields(&self.name, &self.email, &self.message) {
            return Err(FormError::MissingField);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_address() {
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        assert!(!is_valid_email("a @b.co"));
        assert!(!is_valid_email("a@b .co"));
        assert!(!is_valid_email(" a@b.co"));
        assert!(!is_valid_email("a@b.co "));
    }

    #[test]
    fn rejects_dot_at_domain_edges() {
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@co."));
        assert!(!is_valid_email("a@."));
    }

    #[test]
    fn dots_are_ordinary_characters() {
        // Multiple dots and dotted locals are fine.
        assert!(is_valid_email("first.last@studio.example.co"));
        assert!(is_valid_email("a@b.c.d"));
    }

    #[test]
    fn required_fields_must_all_be_present() {
        assert!(has_required_fields("Ada", "a@b.co", "hi"));
        assert!(!has_required_fields("", "a@b.co", "hi"));
        assert!(!has_required_fields("Ada", "", "hi"));
        assert!(!has_required_fields("Ada", "a@b.co", ""));
        // Whitespace-only counts as empty.
        assert!(!has_required_fields("   ", "a@b.co", "hi"));
    }

    #[test]
    fn empty_draft_reports_missing_field_first() {
        let draft = ContactDraft::new("", "", "");
        assert_eq!(draft.validate(), Err(FormError::MissingField));

        // Even with a bad email, missing fields win.
        let draft = ContactDraft::new("", "not-an-email", "hi");
        assert_eq!(draft.validate(), Err(FormError::MissingField));
    }

    #[test]
    fn bad_email_reported_when_fields_present() {
        let draft = ContactDraft::new("A", "bad-email", "hi");
        assert_eq!(draft.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn complete_draft_passes() {
        let draft = ContactDraft::new("A", "a@b.co", "hi");
        assert_eq!(draft.validate(), Ok(()));
    }
}
