//! Message service: validated create and fetch of titled messages.
//!
//! This crate provides a small service layer that sits between an
//! HTTP-facing controller and a message store. It validates new messages,
//! delegates to an injected repository, and reports failures as
//! status-coded errors.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`message`]: Message entity, errors, repository port, adapters and service

pub mod message;
