//! Persistence adapters for the message module.
//!
//! Concrete implementations of the [`MessageRepository`] port:
//!
//! - [`memory::InMemoryMessageRepository`]: thread-safe in-memory storage
//! - [`postgres::PostgresMessageRepository`]: `PostgreSQL` persistence using
//!   Diesel
//!
//! Both report a duplicate title and a missing identifier with the same
//! messages, so callers see identical errors whichever store is injected.
//!
//! [`MessageRepository`]: crate::message::ports::MessageRepository

pub mod memory;
pub mod postgres;

/// Reported when a message with the same title is already stored.
pub const TITLE_TAKEN: &str = "title already taken";

/// Reported when no stored message has the requested identifier.
pub const NO_MATCHING_ID: &str = "no record matching the given id";
