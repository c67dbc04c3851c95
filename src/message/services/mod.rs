//! Application services for the message subsystem.

mod message;

pub use message::MessageService;
