//! Support ticket fields and request validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_with::rust::double_option;

use super::validation::{draft_field, required_text};
use super::{UpdateMode, ValidationError, ValidationErrors};

/// Maximum length for an email address (RFC 5321 path limit)
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum length for ticket subjects
pub const MAX_SUBJECT_LEN: usize = 255;

/// Maximum length for ticket status (column width)
pub const MAX_STATUS_LEN: usize = 32;

/// Status assigned when a ticket is created without one.
/// Also the only value counted as open by the analytics summary.
pub const OPEN_STATUS: &str = "open";

/// Dot-atom local part, no quoted strings
static LOCAL_PART_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-!#$%&'*+/=?^_`{}|~0-9A-Za-z]+(\.[-!#$%&'*+/=?^_`{}|~0-9A-Za-z]+)*$")
        .expect("invalid local part regex")
});

/// Dotted hostname; the TLD is letters (inner hyphens allowed), two or more
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z][A-Za-z-]{0,61}[A-Za-z]$")
        .expect("invalid domain regex")
});

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address.
    ///
    /// # Example
    /// ```
    /// use teenwise_server::models::EmailAddress;
    ///
    /// assert!(EmailAddress::new("student@example.com").is_ok());
    /// assert!(EmailAddress::new("not-an-email").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let email = required_text("email", s, Some(MAX_EMAIL_LEN))?;

        let valid = email
            .rsplit_once('@')
            .is_some_and(|(local, domain)| {
                LOCAL_PART_RE.is_match(local) && DOMAIN_RE.is_match(domain)
            });

        if !valid {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "enter a valid email address",
            });
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated ticket subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSubject(String);

impl TicketSubject {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text("subject", s, Some(MAX_SUBJECT_LEN)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated ticket message (no length limit)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketMessage(String);

impl TicketMessage {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text("message", s, None).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ticket status. Free text: any non-blank value up to 32 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketStatus(String);

impl TicketStatus {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text("status", s, Some(MAX_STATUS_LEN)).map(Self)
    }

    pub fn open() -> Self {
        Self(OPEN_STATUS.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_open(&self) -> bool {
        self.0 == OPEN_STATUS
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        Self::open()
    }
}

/// Raw ticket fields as sent by a client.
/// `None` = key absent, `Some(None)` = explicit `null` (rejected).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketDraft {
    #[serde(default, with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub subject: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub message: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub status: Option<Option<String>>,
}

/// A ticket ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub email: EmailAddress,
    pub subject: TicketSubject,
    pub message: TicketMessage,
    pub status: TicketStatus,
}

/// Field changes for an existing ticket; `None` leaves a column as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketChanges {
    pub email: Option<EmailAddress>,
    pub subject: Option<TicketSubject>,
    pub message: Option<TicketMessage>,
    pub status: Option<TicketStatus>,
}

/// Adapt a `&str` constructor to an owned draft value.
fn text<T>(
    f: fn(&str) -> Result<T, ValidationError>,
) -> impl FnOnce(String) -> Result<T, ValidationError> {
    move |s| f(&s)
}

impl TicketDraft {
    /// Validate for creation. `status` defaults to `"open"`.
    pub fn validate_new(self) -> Result<NewTicket, ValidationErrors> {
        let changes = self.validate_changes(UpdateMode::Full)?;
        match (changes.email, changes.subject, changes.message) {
            (Some(email), Some(subject), Some(message)) => Ok(NewTicket {
                email,
                subject,
                message,
                status: changes.status.unwrap_or_default(),
            }),
            // unreachable: Full mode already reported absent fields
            _ => Err(ValidationError::Missing { field: "email" }.into()),
        }
    }

    /// Validate for an update. `status` is never required since it has a default.
    pub fn validate_changes(self, mode: UpdateMode) -> Result<TicketChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let full = mode.is_full();

        let email = draft_field(&mut errors, "email", self.email, full, text(EmailAddress::new));
        let subject = draft_field(
            &mut errors,
            "subject",
            self.subject,
            full,
            text(TicketSubject::new),
        );
        let message = draft_field(
            &mut errors,
            "message",
            self.message,
            full,
            text(TicketMessage::new),
        );
        let status = draft_field(&mut errors, "status", self.status, false, text(TicketStatus::new));

        errors.finish(|| TicketChanges {
            email,
            subject,
            message,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(email: &str) -> TicketDraft {
        TicketDraft {
            email: Some(Some(email.to_owned())),
            subject: Some(Some("Can't log in".to_owned())),
            message: Some(Some("The app keeps logging me out.".to_owned())),
            status: None,
        }
    }

    #[test]
    fn valid_emails() {
        assert!(EmailAddress::new("student@example.com").is_ok());
        assert!(EmailAddress::new("first.last+tag@mail.school.edu").is_ok());
        assert!(EmailAddress::new("o'brien@example.co.uk").is_ok());
        assert!(EmailAddress::new("  padded@example.org ").is_ok());
        assert!(EmailAddress::new("kid@school4u.museum").is_ok());
    }

    #[test]
    fn invalid_emails() {
        for bad in [
            "not-an-email",
            "missing-tld@example",
            "two@@example.com",
            ".leading-dot@example.com",
            "double..dot@example.com",
            "user@-dash.com",
            "user@example.c",
            "user@example.123",
            "user@10.0.0.1",
            "user@example.c0m",
            "@example.com",
            "user@",
        ] {
            let err = EmailAddress::new(bad).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "email", .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn email_length_limit() {
        let local = "a".repeat(64);
        let domain = format!("{}.com", "b".repeat(MAX_EMAIL_LEN - 64 - 5));
        let at_limit = format!("{}@{}", local, domain);
        assert_eq!(at_limit.len(), MAX_EMAIL_LEN);
        // a 185-char label is not a valid hostname label, length checks come first
        let over = format!("x{}", at_limit);
        assert!(matches!(
            EmailAddress::new(&over).unwrap_err(),
            ValidationError::TooLong { max: MAX_EMAIL_LEN, .. }
        ));
    }

    #[test]
    fn status_defaults_to_open() {
        let ticket = draft("student@example.com").validate_new().unwrap();
        assert_eq!(ticket.status.as_str(), OPEN_STATUS);
        assert!(ticket.status.is_open());
    }

    #[test]
    fn status_accepts_any_string() {
        let mut d = draft("student@example.com");
        d.status = Some(Some("waiting on parent".to_owned()));
        let ticket = d.validate_new().unwrap();
        assert_eq!(ticket.status.as_str(), "waiting on parent");
        assert!(!ticket.status.is_open());
    }

    #[test]
    fn status_match_is_exact() {
        assert!(!TicketStatus::new("Open").unwrap().is_open());
        assert!(TicketStatus::new(" open ").unwrap().is_open());
    }

    #[test]
    fn status_length_limit() {
        let long = "s".repeat(MAX_STATUS_LEN + 1);
        assert!(TicketStatus::new(&long).is_err());
    }

    #[test]
    fn bad_email_reported_with_other_errors() {
        let mut d = draft("not-an-email");
        d.subject = None;
        let fields = d.validate_new().unwrap_err().by_field();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("subject"));
    }

    #[test]
    fn null_status_is_rejected_not_defaulted() {
        let d: TicketDraft = serde_json::from_str(
            r#"{"email": "student@example.com", "subject": "s", "message": "m", "status": null}"#,
        )
        .unwrap();
        let errors = d.validate_new().unwrap_err();
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![&ValidationError::Null { field: "status" }]
        );
    }

    #[test]
    fn null_required_field_on_patch_is_rejected() {
        let d: TicketDraft = serde_json::from_str(r#"{"email": null}"#).unwrap();
        let fields = d.validate_changes(UpdateMode::Partial).unwrap_err().by_field();
        assert_eq!(fields["email"], vec!["email may not be null".to_string()]);
    }

    #[test]
    fn full_update_does_not_require_status() {
        let changes = draft("student@example.com")
            .validate_changes(UpdateMode::Full)
            .unwrap();
        assert!(changes.status.is_none());
    }

    #[test]
    fn partial_update_only_status() {
        let d = TicketDraft {
            status: Some(Some("closed".to_owned())),
            ..Default::default()
        };
        let changes = d.validate_changes(UpdateMode::Partial).unwrap();
        assert_eq!(changes.status.unwrap().as_str(), "closed");
        assert!(changes.email.is_none());
    }
}
