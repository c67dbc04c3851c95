//! Identifier newtype for persisted messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository-assigned identifier for a message.
///
/// Identifiers are positive integers handed out by the backing store. A
/// message that has not been stored yet carries [`MessageId::UNASSIGNED`].
///
/// # Examples
///
/// ```
/// use message_service::message::domain::MessageId;
///
/// let id = MessageId::new(7);
/// assert!(id.is_assigned());
/// assert!(!MessageId::UNASSIGNED.is_assigned());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MessageId(i64);

impl MessageId {
    /// Placeholder identifier for messages not yet stored.
    pub const UNASSIGNED: Self = Self(0);

    /// Creates an identifier from a raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns `true` once the repository has assigned this identifier.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl From<i64> for MessageId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
