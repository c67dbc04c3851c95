//! Service layer mediating between callers and the message repository.
//!
//! Provides [`MessageService`], which validates drafts before they reach the
//! repository and otherwise forwards calls and results untouched.

use crate::message::{
    domain::{Message, MessageId},
    error::MessageResult,
    ports::MessageRepository,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Validated access to a message repository.
///
/// The repository is fixed at construction; the service itself holds no
/// other state, so clones share the same repository.
#[derive(Debug)]
pub struct MessageService<R>
where
    R: MessageRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for MessageService<R>
where
    R: MessageRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> MessageService<R>
where
    R: MessageRepository,
{
    /// Creates a service backed by the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetches a message by identifier.
    ///
    /// # Errors
    ///
    /// Returns the repository's error unchanged, typically
    /// [`MessageError::NotFound`](crate::message::error::MessageError::NotFound)
    /// for an unknown identifier.
    pub async fn get_message(&self, id: MessageId) -> MessageResult<Message> {
        debug!(%id, "fetching message");
        self.repository.get(id).await
    }

    /// Validates and stores a new message.
    ///
    /// The title is checked before the body; the repository is not called
    /// when either is empty.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidRequest`] when validation fails, or
    /// the repository's error unchanged when the write fails.
    ///
    /// [`MessageError::InvalidRequest`]: crate::message::error::MessageError::InvalidRequest
    pub async fn create_message(&self, message: &Message) -> MessageResult<Message> {
        if let Err(err) = message.validate() {
            warn!(reason = err.message(), "rejected message draft");
            return Err(err);
        }
        let created = self.repository.create(message).await?;
        debug!(id = %created.id(), "created message");
        Ok(created)
    }
}
