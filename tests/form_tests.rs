// Host-side tests for contact form validation and submit flow.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod notify {
    include!("../src/core/notify.rs");
}
mod form {
    include!("../src/core/form.rs");
}

use form::*;
use notify::NotificationKind;

fn contact_form(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm::new(vec![
        Field::new(FieldKind::Text, name),
        Field::new(FieldKind::Email, email),
        Field::new(FieldKind::Other, message),
    ])
}

#[test]
fn email_pattern() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("a.b+c@sub.example.co.uk"));
    assert!(!is_valid_email("user@@example"));
    assert!(!is_valid_email("plaintext"));
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("us er@example.com"));
    assert!(is_valid_email("a@b.c"));
    assert!(!is_valid_email("a@b.c@d.e"));
    assert!(!is_valid_email("user@example.com\n"));
}

#[test]
fn input_types_map_to_rules() {
    assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
    assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
    assert_eq!(FieldKind::from_input_type("textarea"), FieldKind::Other);
    assert_eq!(FieldKind::from_input_type("select-one"), FieldKind::Other);
}

#[test]
fn rules_apply_to_trimmed_values() {
    assert_eq!(validate(FieldKind::Email, "  user@example.com "), Ok(()));
    assert_eq!(
        validate(FieldKind::Text, " a "),
        Err(FieldError::TooShort { min: 2 })
    );
    assert_eq!(validate(FieldKind::Text, "Al"), Ok(()));
    assert_eq!(validate(FieldKind::Other, "   "), Err(FieldError::Empty));
    assert_eq!(validate(FieldKind::Other, "x"), Ok(()));
    assert_eq!(
        validate(FieldKind::Email, "plaintext"),
        Err(FieldError::InvalidEmail)
    );
}

#[test]
fn blur_marks_single_field() {
    let mut f = contact_form("A", "user@example.com", "");
    assert_eq!(f.blur(0), Some(Err(FieldError::TooShort { min: 2 })));
    assert_eq!(f.fields[0].status, FieldStatus::Error);
    assert_eq!(f.fields[1].status, FieldStatus::Pristine);
    assert_eq!(f.blur(1), Some(Ok(())));
    assert_eq!(f.fields[1].status, FieldStatus::Valid);
    assert_eq!(f.blur(9), None);
}

#[test]
fn valid_submit_shows_success_and_resets() {
    let mut f = contact_form("Ada", "user@example.com", "Hello there");
    assert_eq!(f.submit(), SubmitOutcome::Sending);
    assert!(f.is_sending());
    assert!(f.fields.iter().all(|x| x.status == FieldStatus::Valid));

    let toast = f.complete().expect("success toast");
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(toast.message, SUCCESS_MESSAGE);
    assert!(!f.is_sending());
    for field in &f.fields {
        assert!(field.value.is_empty());
        assert_eq!(field.status, FieldStatus::Pristine);
    }
}

#[test]
fn invalid_email_is_marked_and_form_kept() {
    let mut f = contact_form("Ada", "user@@example", "Hello there");
    match f.submit() {
        SubmitOutcome::Rejected {
            invalid,
            notification,
        } => {
            assert_eq!(invalid, vec![1]);
            assert_eq!(notification.kind, NotificationKind::Error);
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert_eq!(f.fields[1].status, FieldStatus::Error);
    assert_eq!(f.fields[0].status, FieldStatus::Valid);
    assert_eq!(f.fields[1].value, "user@@example");
    assert_eq!(f.fields[2].value, "Hello there");
    assert!(!f.is_sending());
    assert_eq!(f.complete(), None);
}

#[test]
fn second_submit_while_sending_is_ignored() {
    let mut f = contact_form("Ada", "user@example.com", "Hi");
    assert_eq!(f.submit(), SubmitOutcome::Sending);
    assert_eq!(f.submit(), SubmitOutcome::Busy);
    assert!(f.complete().is_some());
    assert_eq!(f.complete(), None);
}

#[test]
fn status_classes() {
    assert_eq!(FieldStatus::Pristine.class(), None);
    assert_eq!(FieldStatus::Valid.class(), Some("valid"));
    assert_eq!(FieldStatus::Error.class(), Some("error"));
}

#[test]
fn field_errors_render_messages() {
    assert_eq!(
        FieldError::TooShort { min: 2 }.to_string(),
        "must be at least 2 characters"
    );
    assert_eq!(FieldError::Empty.to_string(), "required");
}

#[test]
fn rejected_submit_focuses_first_invalid_field() {
    let mut f = contact_form("A", "user@@example", "");
    let outcome = f.submit();
    assert_eq!(outcome.focus_index(), Some(0));

    let mut f = contact_form("Ada", "nope", "");
    assert_eq!(f.submit().focus_index(), Some(1));

    let mut f = contact_form("Ada", "user@example.com", "Hi");
    let outcome = f.submit();
    assert_eq!(outcome, SubmitOutcome::Sending);
    assert_eq!(outcome.focus_index(), None);
    assert_eq!(f.submit().focus_index(), None);
}
