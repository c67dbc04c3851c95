//! Domain model for stored messages.
//!
//! Contains the [`Message`] entity and its [`MessageId`]. No infrastructure
//! concerns live here.

mod ids;
mod message;

pub use ids::MessageId;
pub use message::Message;
