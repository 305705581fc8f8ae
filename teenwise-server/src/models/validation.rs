//! Validation error types

use std::collections::BTreeMap;
use std::fmt;

/// A single failed field constraint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field absent from a request that requires it
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// Field sent as JSON `null`
    #[error("{field} may not be null")]
    Null { field: &'static str },

    /// Field is blank after trimming
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field exceeds maximum length (in characters)
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Null { field }
            | Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }
}

/// Every field error found while validating one request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }

    /// Record the error (if any) and pass the value through.
    pub fn capture<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Messages grouped by field name, for the 400 response body.
    pub fn by_field(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut fields: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for err in &self.0 {
            fields.entry(err.field()).or_default().push(err.to_string());
        }
        fields
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate one draft field.
///
/// `None` is an absent key (recorded as missing when `required`),
/// `Some(None)` an explicit JSON `null`, which is always an error.
pub(crate) fn draft_field<V, T>(
    errors: &mut ValidationErrors,
    name: &'static str,
    value: Option<Option<V>>,
    required: bool,
    f: impl FnOnce(V) -> Result<T, ValidationError>,
) -> Option<T> {
    match value {
        Some(Some(v)) => errors.capture(f(v)),
        Some(None) => {
            errors.push(ValidationError::Null { field: name });
            None
        }
        None => {
            if required {
                errors.push(ValidationError::Missing { field: name });
            }
            None
        }
    }
}

/// Trim and check a required text field.
///
/// `max` is measured in characters, not bytes.
pub(crate) fn required_text(
    field: &'static str,
    s: &str,
    max: Option<usize>,
) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if let Some(max) = max {
        if trimmed.chars().count() > max {
            return Err(ValidationError::TooLong { field, max });
        }
    }

    Ok(trimmed.to_owned())
}
