// Contact form validation and simulated-submit state.
//
// The DOM layer copies field values in, calls [`ContactForm::submit`] and
// mirrors each [`FieldStatus`] back as a CSS class.

use super::constants::TEXT_FIELD_MIN_CHARS;
use super::notify::Notification;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Message envoyé avec succès !";
pub const INVALID_MESSAGE: &str = "Veuillez corriger les champs en erreur.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Text,
    Other,
}

impl FieldKind {
    /// Map an input's `type` property; textareas and selects report their own
    /// types and fall through to `Other`.
    pub fn from_input_type(ty: &str) -> Self {
        match ty {
            "email" => FieldKind::Email,
            "text" => FieldKind::Text,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("not a valid email address")]
    InvalidEmail,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("required")]
    Empty,
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the domain
/// with something on both sides of it.
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Validate a raw field value; surrounding whitespace is ignored.
pub fn validate(kind: FieldKind, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Text if value.chars().count() < TEXT_FIELD_MIN_CHARS => {
            Err(FieldError::TooShort {
                min: TEXT_FIELD_MIN_CHARS,
            })
        }
        FieldKind::Other if value.is_empty() => Err(FieldError::Empty),
        _ => Ok(()),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Pristine,
    Valid,
    Error,
}

impl FieldStatus {
    pub fn class(self) -> Option<&'static str> {
        match self {
            FieldStatus::Pristine => None,
            FieldStatus::Valid => Some("valid"),
            FieldStatus::Error => Some("error"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Field {
    pub kind: FieldKind,
    pub value: String,
    pub status: FieldStatus,
}

impl Field {
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            status: FieldStatus::Pristine,
        }
    }

    fn check(&mut self) -> Result<(), FieldError> {
        let res = validate(self.kind, &self.value);
        self.status = if res.is_ok() {
            FieldStatus::Valid
        } else {
            FieldStatus::Error
        };
        res
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// All fields valid; the caller simulates the send and then calls
    /// [`ContactForm::complete`].
    Sending,
    /// Indices of the invalid fields, plus the toast to show.
    Rejected {
        invalid: Vec<usize>,
        notification: Notification,
    },
    /// A send is already in flight.
    Busy,
}

impl SubmitOutcome {
    /// Field that should take focus after a rejected submit.
    pub fn focus_index(&self) -> Option<usize> {
        match self {
            SubmitOutcome::Rejected { invalid, .. } => invalid.first().copied(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub fields: Vec<Field>,
    sending: bool,
}

impl ContactForm {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            sending: false,
        }
    }

    #[inline]
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Validate a single field after it loses focus.
    pub fn blur(&mut self, index: usize) -> Option<Result<(), FieldError>> {
        self.fields.get_mut(index).map(Field::check)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.sending {
            return SubmitOutcome::Busy;
        }
        let invalid: Vec<usize> = self
            .fields
            .iter_mut()
            .enumerate()
            .filter_map(|(i, f)| f.check().err().map(|_| i))
            .collect();
        if invalid.is_empty() {
            self.sending = true;
            SubmitOutcome::Sending
        } else {
            SubmitOutcome::Rejected {
                invalid,
                notification: Notification::error(INVALID_MESSAGE),
            }
        }
    }

    /// Finish a simulated send: clear every field and return the success toast.
    pub fn complete(&mut self) -> Option<Notification> {
        if !self.sending {
            return None;
        }
        self.sending = false;
        for f in self.fields.iter_mut() {
            f.value.clear();
            f.status = FieldStatus::Pristine;
        }
        Some(Notification::success(SUCCESS_MESSAGE))
    }
}
