//! Domain models with validation at construction
//!
//! All client input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod content;
pub mod ticket;

pub use validation::{ValidationError, ValidationErrors};
pub use content::{ContentBody, ContentChanges, ContentDraft, ContentTitle, NewContent};
pub use ticket::{
    EmailAddress, NewTicket, TicketChanges, TicketDraft, TicketMessage, TicketStatus,
    TicketSubject, OPEN_STATUS,
};

/// How an update request treats absent fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// PUT: every required field must be sent
    Full,
    /// PATCH: only sent fields are validated and changed
    Partial,
}

impl UpdateMode {
    pub fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }
}
