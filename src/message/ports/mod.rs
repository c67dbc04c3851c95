//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces the service requires from
//! infrastructure. Adapters implement them.

pub mod repository;

pub use repository::MessageRepository;
