//! Contact form submission flow
//!
//! Exercises the validator → notifier path the way the form controller
//! wires it: validate the draft, show exactly one toast for the outcome,
//! clear the fields only on success.

use vitrine_core::{ContactDraft, FormError, Notifier, ToastKind};

/// The controller's submit step, reduced to its decision logic: returns
/// whether the form should be cleared.
fn submit(notifier: &mut Notifier, draft: &ContactDraft) -> bool {
    match draft.validate() {
        Ok(()) => {
            notifier.show("Thank you for your message! I'll get back to you soon.", ToastKind::Success);
            true
        }
        Err(e) => {
            notifier.show(e.to_string(), ToastKind::Error);
            false
        }
    }
}

#[test]
fn missing_field_never_succeeds_or_clears() {
    let drafts = [
        ContactDraft::new("", "a@b.co", "hi"),
        ContactDraft::new("A", "", "hi"),
        ContactDraft::new("A", "a@b.co", ""),
        ContactDraft::new("", "", ""),
    ];

    for draft in drafts {
        let mut notifier = Notifier::new();
        let cleared = submit(&mut notifier, &draft);

        assert!(!cleared, "form must keep its values: {draft:?}");
        let toast = notifier.current().expect("one toast is shown");
        assert_eq!(toast.kind(), ToastKind::Error);
        assert_eq!(toast.message(), FormError::MissingField.to_string());
    }
}

#[test]
fn invalid_email_yields_single_error_toast() {
    let mut notifier = Notifier::new();
    let draft = ContactDraft::new("A", "bad-email", "hi");

    let cleared = submit(&mut notifier, &draft);

    assert!(!cleared);
    let toast = notifier.current().expect("one toast is shown");
    assert_eq!(toast.kind(), ToastKind::Error);
    assert_eq!(toast.message(), FormError::InvalidEmail.to_string());
}

#[test]
fn valid_submission_yields_single_success_toast_and_clears() {
    let mut notifier = Notifier::new();
    let draft = ContactDraft::new("A", "a@b.co", "hi");

    let cleared = submit(&mut notifier, &draft);

    assert!(cleared);
    let toast = notifier.current().expect("one toast is shown");
    assert_eq!(toast.kind(), ToastKind::Success);
}

#[test]
fn resubmit_replaces_outcome_toast() {
    let mut notifier = Notifier::new();

    // First attempt fails, second succeeds: only the success toast remains.
    submit(&mut notifier, &ContactDraft::new("A", "nope", "hi"));
    submit(&mut notifier, &ContactDraft::new("A", "a@b.co", "hi"));

    let toast = notifier.current().expect("one toast is shown");
    assert_eq!(toast.kind(), ToastKind::Success);
}
