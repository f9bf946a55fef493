//! Contact form with client-side validation.
//!
//! Submission is simulated: a valid form shows a loading state for a fixed
//! delay, then a success banner, then resets. Banners clear themselves after
//! a few seconds or when dismissed.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

/// Time a simulated submission takes.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Time a banner stays visible.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

/// Message shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

/// Validation failures, displayed to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Form field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

/// Values entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Check that every field is filled and the email looks like one.
    pub fn validate(&self) -> Result<(), FormError> {
        if Field::ALL.iter().any(|f| self.get(*f).trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        if !looks_like_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// Whether `text` contains something shaped like `local@domain.tld`.
///
/// Matches the permissive pattern `\S+@\S+\.\S+` anywhere in the input: a
/// run of non-whitespace around an `@`, followed after at least one more
/// character by a dot with at least one character after it.
pub fn looks_like_email(text: &str) -> bool {
    text.split_whitespace().any(|word| {
        word.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &word[at + 1..];
            // `\S+` before the dot must be non-empty, and so must the tail
            domain
                .char_indices()
                .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// Kind of a banner, used as its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BannerKind {
    Success,
    Error,
}

/// A transient message under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    pub expires_at: Instant,
}

/// The contact form widget.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    banner: Option<Banner>,
    /// Set while a submission is in flight
    submitting_until: Option<Instant>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Whether the submit button shows its loading state.
    pub fn is_submitting(&self) -> bool {
        self.submitting_until.is_some()
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    /// Submit the form.
    ///
    /// Invalid input shows an error banner and returns the error. Valid input
    /// starts the simulated submission. Submitting again while one is in
    /// flight is ignored.
    pub fn submit(&mut self, now: Instant) -> Result<(), FormError> {
        if self.is_submitting() {
            return Ok(());
        }
        if let Err(err) = self.fields.validate() {
            debug!("contact form rejected: {err}");
            self.show(BannerKind::Error, err.to_string(), now);
            return Err(err);
        }
        self.submitting_until = Some(now + SUBMIT_DELAY);
        debug!("contact form submitting");
        Ok(())
    }

    /// Advance timers: finish a pending submission and expire the banner.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.submitting_until {
            if now >= deadline {
                self.submitting_until = None;
                self.fields = ContactFields::default();
                // The banner's clock starts when the submission completes
                self.show(BannerKind::Success, SUCCESS_MESSAGE.to_string(), deadline);
            }
        }
        if self.banner.as_ref().is_some_and(|b| now >= b.expires_at) {
            self.banner = None;
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    fn show(&mut self, kind: BannerKind, text: String, now: Instant) {
        self.banner = Some(Banner {
            kind,
            text,
            expires_at: now + BANNER_TIMEOUT,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Amina");
        form.set(Field::Email, "amina@example.com");
        form.set(Field::Subject, "Wedding");
        form.set(Field::Message, "Are you free in June?");
        form
    }

    #[test]
    fn email_pattern_accepts_plain_addresses() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("dj.booking@events.co.ke"));
        assert!(looks_like_email("  x@y.z  "));
    }

    #[test]
    fn email_pattern_rejects_malformed() {
        assert!(!looks_like_email("plainaddress"));
        assert!(!looks_like_email("@domain.com"));
        assert!(!looks_like_email("user@domain"));
        assert!(!looks_like_email("user@.com"));
        assert!(!looks_like_email("user@domain."));
        assert!(!looks_like_email("user @domain.com"));
    }

    #[test]
    fn blank_fields_are_missing() {
        let mut form = filled();
        form.set(Field::Subject, "   ");
        assert_eq!(form.fields.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn invalid_email_shows_error_banner() {
        let now = Instant::now();
        let mut form = filled();
        form.set(Field::Email, "not-an-email");

        assert_eq!(form.submit(now), Err(FormError::InvalidEmail));

        let banner = form.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "Please enter a valid email address.");
        assert!(!form.is_submitting());
    }

    #[test]
    fn successful_submit_resets_after_delay() {
        let now = Instant::now();
        let mut form = filled();

        form.submit(now).unwrap();
        assert!(form.is_submitting());
        assert!(form.banner().is_none());

        form.tick(now + Duration::from_millis(1999));
        assert!(form.is_submitting());

        form.tick(now + SUBMIT_DELAY);
        assert!(!form.is_submitting());
        assert_eq!(form.fields, ContactFields::default());
        let banner = form.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.text, SUCCESS_MESSAGE);
    }

    #[test]
    fn banner_clears_after_timeout() {
        let now = Instant::now();
        let mut form = ContactForm::new();
        let _ = form.submit(now);
        assert!(form.banner().is_some());

        form.tick(now + Duration::from_millis(4999));
        assert!(form.banner().is_some());

        form.tick(now + BANNER_TIMEOUT);
        assert!(form.banner().is_none());
    }

    #[test]
    fn resubmit_while_in_flight_is_ignored() {
        let now = Instant::now();
        let mut form = filled();
        form.submit(now).unwrap();
        form.set(Field::Email, "broken");

        assert!(form.submit(now + Duration::from_secs(1)).is_ok());
        assert!(form.banner().is_none());
    }

    #[test]
    fn dismiss_clears_banner() {
        let mut form = ContactForm::new();
        let _ = form.submit(Instant::now());
        form.dismiss_banner();
        assert!(form.banner().is_none());
    }
}
