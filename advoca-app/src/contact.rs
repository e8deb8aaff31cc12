//! Contact form state and client-side validation.
//!
//! Delivery is handled outside this application; a draft that passes
//! validation is accepted locally and the form is cleared.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("valid email pattern")
});

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Outcome banner shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The message passed validation and was accepted.
    Sent,
    /// The message was rejected with the given reason.
    Rejected(FormError),
}

/// Mutable state of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub notice: Option<Notice>,
}

impl ContactForm {
    /// Check the draft against the submission rules without mutating it.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [&self.name, &self.email, &self.subject, &self.body];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and, on success, accept the message and clear the draft.
    pub fn submit(&mut self) {
        match self.validate() {
            Ok(()) => {
                log::info!(
                    "contact message accepted from {}",
                    self.email.trim()
                );
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.body.clear();
                self.notice = Some(Notice::Sent);
            }
            Err(error) => {
                log::debug!("contact message rejected: {error}");
                self.notice = Some(Notice::Rejected(error));
            }
        }
    }

    /// Editing a field dismisses a rejection banner; a success banner stays
    /// until explicitly dismissed.
    pub fn clear_rejection(&mut self) {
        if matches!(self.notice, Some(Notice::Rejected(_))) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            subject: "Collaboration".into(),
            body: "Hello!".into(),
            notice: None,
        }
    }

    #[test]
    fn rejects_when_any_field_is_blank() {
        let mut form = filled_form();
        form.subject = "   ".into();
        assert_eq!(form.validate(), Err(FormError::MissingFields));

        form.submit();
        assert_eq!(
            form.notice,
            Some(Notice::Rejected(FormError::MissingFields))
        );
        // A rejected draft is preserved for correction.
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn rejects_malformed_addresses() {
        let mut form = filled_form();
        for bad in ["ada", "ada@", "ada@example", "@example.org", "a b@c.de"] {
            form.email = bad.into();
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn accepts_and_clears_a_valid_draft() {
        let mut form = filled_form();
        form.submit();
        assert_eq!(form.notice, Some(Notice::Sent));
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.subject.is_empty());
        assert!(form.body.is_empty());
    }

    #[test]
    fn editing_clears_rejections_but_not_success() {
        let mut form = filled_form();
        form.email = "nope".into();
        form.submit();
        form.clear_rejection();
        assert_eq!(form.notice, None);

        let mut sent = filled_form();
        sent.submit();
        sent.clear_rejection();
        assert_eq!(sent.notice, Some(Notice::Sent));
    }
}
