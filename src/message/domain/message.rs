//! The Message entity exchanged between callers and the repository.

use super::MessageId;
use crate::message::error::{MessageError, MessageResult};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Reported when a message is submitted without a title.
pub(crate) const INVALID_TITLE: &str = "Please enter a valid title";

/// Reported when a message is submitted without a body.
pub(crate) const INVALID_BODY: &str = "Please enter a valid body";

/// A titled message with a body.
///
/// Drafts carry [`MessageId::UNASSIGNED`] until the repository stores them
/// and hands back a copy with the assigned identifier.
///
/// # Examples
///
/// ```
/// use message_service::message::domain::{Message, MessageId};
/// use mockable::DefaultClock;
///
/// let draft = Message::new("the title", "the body", &DefaultClock);
/// assert_eq!(draft.id(), MessageId::UNASSIGNED);
/// assert!(draft.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Repository-assigned identifier; unassigned on drafts.
    #[serde(default)]
    id: MessageId,

    /// Message title.
    title: String,

    /// Message body.
    body: String,

    /// When the message was created.
    created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a draft stamped with the clock's current time.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, clock: &impl Clock) -> Self {
        Self::with_created_at(title, body, clock.utc())
    }

    /// Creates a draft with a caller-supplied creation timestamp.
    #[must_use]
    pub fn with_created_at(
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::from_persisted(MessageId::UNASSIGNED, title, body, created_at)
    }

    /// Reconstructs a message from stored values.
    ///
    /// Performs no validation; adapters use this to rebuild rows they
    /// previously accepted.
    #[must_use]
    pub fn from_persisted(
        id: MessageId,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            created_at,
        }
    }

    /// Returns this message carrying the given identifier.
    #[must_use]
    pub const fn with_id(mut self, id: MessageId) -> Self {
        self.id = id;
        self
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Checks that the title and body are present.
    ///
    /// The title is checked first and only the first failure is reported.
    /// Emptiness is exact: whitespace-only text passes.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidRequest`] naming the missing field.
    pub fn validate(&self) -> MessageResult<()> {
        if self.title.is_empty() {
            return Err(MessageError::invalid_request(INVALID_TITLE));
        }
        if self.body.is_empty() {
            return Err(MessageError::invalid_request(INVALID_BODY));
        }
        Ok(())
    }
}
