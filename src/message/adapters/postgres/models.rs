//! Diesel row models for message persistence.

use super::schema::messages;
use crate::message::domain::{Message, MessageId};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Repository-assigned identifier.
    pub id: i64,
    /// Message title.
    pub title: String,
    /// Message body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for message records.
///
/// Carries no identifier; the `BIGSERIAL` column assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Message title.
    pub title: String,
    /// Message body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        let MessageRow {
            id,
            title,
            body,
            created_at,
        } = row;
        Self::from_persisted(MessageId::new(id), title, body, created_at)
    }
}

impl From<&Message> for NewMessageRow {
    fn from(message: &Message) -> Self {
        Self {
            title: message.title().to_owned(),
            body: message.body().to_owned(),
            created_at: message.created_at(),
        }
    }
}
