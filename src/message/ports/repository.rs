//! Repository port for message persistence.
//!
//! Defines the capability the service needs from a backing store, allowing
//! different persistence implementations (`PostgreSQL`, in-memory, test
//! doubles) to be injected.

use crate::message::{
    domain::{Message, MessageId},
    error::MessageResult,
};
use async_trait::async_trait;

/// Port for message storage.
///
/// Implementations classify their own failures: the service passes every
/// error returned here to its caller unchanged.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Identifiers are assigned on [`create`](Self::create), never by callers
/// - Concurrent access is handled safely
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Retrieves a message by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::NotFound`] when no message has the given
    /// identifier, or another [`MessageError`] when the lookup fails.
    ///
    /// [`MessageError::NotFound`]: crate::message::error::MessageError::NotFound
    /// [`MessageError`]: crate::message::error::MessageError
    async fn get(&self, id: MessageId) -> MessageResult<Message>;

    /// Stores a new message and returns it with its assigned identifier.
    ///
    /// Any identifier already on `message` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InternalServerError`] when the title is already taken or the
    /// store fails.
    ///
    /// [`InternalServerError`]: crate::message::error::MessageError::InternalServerError
    async fn create(&self, message: &Message) -> MessageResult<Message>;
}
