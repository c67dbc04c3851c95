//! Message storage behind a validating service layer.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: [`domain::Message`] and [`domain::MessageId`]
//! - **Errors**: status-coded [`error::MessageError`] values
//! - **Ports**: the [`ports::MessageRepository`] capability
//! - **Adapters**: [`adapters::memory::InMemoryMessageRepository`] and
//!   [`adapters::postgres::PostgresMessageRepository`]
//! - **Services**: [`services::MessageService`], which validates drafts and
//!   forwards everything else to the injected repository
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use message_service::message::adapters::memory::InMemoryMessageRepository;
//! use message_service::message::domain::Message;
//! use message_service::message::services::MessageService;
//! use mockable::DefaultClock;
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let service = MessageService::new(Arc::new(InMemoryMessageRepository::new()));
//!
//! let created = service
//!     .create_message(&Message::new("the title", "the body", &DefaultClock))
//!     .await
//!     .expect("valid message");
//! let fetched = service.get_message(created.id()).await.expect("stored message");
//! assert_eq!(fetched, created);
//!
//! let rejected = service
//!     .create_message(&Message::new("", "the body", &DefaultClock))
//!     .await
//!     .expect_err("empty title");
//! assert_eq!(rejected.status(), 422);
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
