//! Contact form validation.
//!
//! Three fields are checked independently so every failing field gets its own
//! inline message in one pass.

use core::fmt;

use bistro_core::{Email, EmailError};

/// Minimum message length, counted in characters after trimming.
pub const MIN_MESSAGE_LEN: usize = 6;

/// A contact form field. The id matches both the input's `id` and its
/// error region's `data-for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Why a field was rejected. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Enter a valid email")]
    InvalidEmail(#[source] EmailError),
    #[error("Message should be at least {MIN_MESSAGE_LEN} characters")]
    MessageTooShort,
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A submission that passed every check, with values trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub message: String,
}

/// Per-field failures of a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<FieldError>,
    email: Option<FieldError>,
    message: Option<FieldError>,
}

impl FieldErrors {
    /// The failure for `field`, `None` if it passed.
    #[must_use]
    pub const fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Message => self.message.as_ref(),
        }
    }

    /// Fields that failed, in form order.
    pub fn failed(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_some())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl ContactSubmission {
    /// Check all three fields.
    ///
    /// # Errors
    ///
    /// Returns every failing field when at least one check fails.
    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let name = self.name.trim();
        let email = Email::parse(self.email.trim());
        let message = self.message.trim();

        let errors = FieldErrors {
            name: name.is_empty().then_some(FieldError::MissingName),
            email: email.as_ref().err().cloned().map(FieldError::InvalidEmail),
            message: (message.chars().count() < MIN_MESSAGE_LEN)
                .then_some(FieldError::MessageTooShort),
        };

        match email {
            Ok(email) if errors.is_empty() => Ok(ContactMessage {
                name: name.to_string(),
                email,
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }
}
