//! In-memory implementation of the `MessageRepository` port.
//!
//! Provides a simple, thread-safe repository for tests and embedders that
//! need no database. Identifiers are handed out sequentially from 1.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{NO_MATCHING_ID, TITLE_TAKEN};
use crate::message::{
    domain::{Message, MessageId},
    error::{MessageError, MessageResult},
    ports::MessageRepository,
};

/// In-memory implementation of [`MessageRepository`].
///
/// Titles are unique, mirroring the `PostgreSQL` schema.
///
/// # Example
///
/// ```
/// use message_service::message::adapters::memory::InMemoryMessageRepository;
///
/// let repo = InMemoryMessageRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageRepository {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    messages: BTreeMap<MessageId, Message>,
    last_id: i64,
}

impl InMemoryMessageRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map_or(0, |guard| guard.messages.len())
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> MessageError {
    MessageError::internal(format!("lock poisoned: {err}"))
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn get(&self, id: MessageId) -> MessageResult<Message> {
        let guard = self.state.read().map_err(lock_poisoned)?;
        guard
            .messages
            .get(&id)
            .cloned()
            .ok_or_else(|| MessageError::not_found(NO_MATCHING_ID))
    }

    async fn create(&self, message: &Message) -> MessageResult<Message> {
        let mut guard = self.state.write().map_err(lock_poisoned)?;

        if guard
            .messages
            .values()
            .any(|stored| stored.title() == message.title())
        {
            return Err(MessageError::internal(TITLE_TAKEN));
        }

        let next = guard
            .last_id
            .checked_add(1)
            .ok_or_else(|| MessageError::internal("message identifiers exhausted"))?;
        guard.last_id = next;

        let created = message.clone().with_id(MessageId::new(next));
        guard.messages.insert(created.id(), created.clone());
        Ok(created)
    }
}
