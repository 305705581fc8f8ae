//! Content fields and request validation

use serde::Deserialize;
use serde_with::rust::double_option;

use super::validation::{draft_field, required_text};
use super::{UpdateMode, ValidationError, ValidationErrors};

/// Maximum length for content titles
pub const MAX_TITLE_LEN: usize = 255;

/// Validated content title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTitle(String);

impl ContentTitle {
    /// Create a new title.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 255 characters
    ///
    /// # Example
    /// ```
    /// use teenwise_server::models::ContentTitle;
    ///
    /// assert!(ContentTitle::new("Staying safe online").is_ok());
    /// assert!(ContentTitle::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text("title", s, Some(MAX_TITLE_LEN)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated content body (no length limit)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBody(String);

impl ContentBody {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text("body", s, None).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw content fields as sent by a client.
///
/// Every field is optional here so that missing fields can be reported
/// alongside other field errors instead of failing deserialization.
/// `None` = key absent, `Some(None)` = explicit `null` (rejected).
/// Unknown and read-only fields (`id`, timestamps) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDraft {
    #[serde(default, with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub body: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub is_published: Option<Option<bool>>,
}

/// A content record ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContent {
    pub title: ContentTitle,
    pub body: ContentBody,
    pub is_published: bool,
}

/// Field changes for an existing content record; `None` leaves a column as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentChanges {
    pub title: Option<ContentTitle>,
    pub body: Option<ContentBody>,
    pub is_published: Option<bool>,
}

impl ContentDraft {
    /// Validate for creation: `title` and `body` required,
    /// `is_published` defaults to false.
    pub fn validate_new(self) -> Result<NewContent, ValidationErrors> {
        let changes = self.validate_changes(UpdateMode::Full)?;
        match (changes.title, changes.body) {
            (Some(title), Some(body)) => Ok(NewContent {
                title,
                body,
                is_published: changes.is_published.unwrap_or(false),
            }),
            // validate_changes(Full) already rejected missing fields
            _ => Err(ValidationError::Missing { field: "title" }.into()),
        }
    }

    /// Validate for an update. `Full` (PUT) requires every required field,
    /// `Partial` (PATCH) validates only what is present.
    pub fn validate_changes(self, mode: UpdateMode) -> Result<ContentChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let full = mode.is_full();

        let title = draft_field(&mut errors, "title", self.title, full, |t: String| {
            ContentTitle::new(&t)
        });
        let body = draft_field(&mut errors, "body", self.body, full, |b: String| {
            ContentBody::new(&b)
        });
        let is_published = draft_field(&mut errors, "is_published", self.is_published, false, Ok);

        errors.finish(|| ContentChanges {
            title,
            body,
            is_published,
        })
    }
}
