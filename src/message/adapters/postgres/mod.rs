//! `PostgreSQL` implementation of the `MessageRepository` port using Diesel ORM.
//!
//! Rows live in the `messages` table created by the migrations under
//! `migrations/`. Titles carry a unique constraint; a violation surfaces as
//! the same "title already taken" error the in-memory adapter reports.

mod config;
mod models;
mod schema;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;
use tracing::{error, info};

use super::{NO_MATCHING_ID, TITLE_TAKEN};
use crate::message::{
    domain::{Message, MessageId},
    error::{MessageError, MessageResult},
    ports::MessageRepository,
};

pub use config::{
    ConfigError, DRIVER_VAR, HOST_VAR, NAME_VAR, PASSWORD_VAR, POOL_SIZE_VAR, PORT_VAR,
    PostgresConfig, SUPPORTED_DRIVER, USER_VAR,
};
pub use models::{MessageRow, NewMessageRow};
pub use schema::messages;

/// `PostgreSQL` connection pool type.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Errors returned while opening the repository.
#[derive(Debug, Error)]
pub enum RepositoryInitError {
    /// The connection parameters are unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// `PostgreSQL` implementation of [`MessageRepository`].
///
/// Uses Diesel with r2d2 connection pooling. Database calls are offloaded to
/// the blocking thread pool via [`tokio::task::spawn_blocking`].
///
/// # Example
///
/// ```ignore
/// use message_service::message::adapters::postgres::{PostgresConfig, PostgresMessageRepository};
///
/// let config = PostgresConfig::from_env()?;
/// let repo = PostgresMessageRepository::initialize(&config)?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    /// Creates a repository over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryInitError::Config`] for an unsupported driver, or
    /// [`RepositoryInitError::Pool`] when the pool cannot connect.
    pub fn initialize(config: &PostgresConfig) -> Result<Self, RepositoryInitError> {
        config.ensure_supported_driver()?;
        let manager = ConnectionManager::<PgConnection>::new(config.connection_string());
        let pool = Pool::builder()
            .max_size(config.pool_size())
            .build(manager)?;
        info!(
            host = config.host(),
            port = config.port(),
            database = config.database(),
            "message repository connected"
        );
        Ok(Self::new(pool))
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn get(&self, id: MessageId) -> MessageResult<Message> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;

            messages::table
                .find(id.value())
                .select(MessageRow::as_select())
                .first::<MessageRow>(&mut conn)
                .optional()
                .map_err(|err| database_failure("get", &err))?
                .map(Message::from)
                .ok_or_else(|| MessageError::not_found(NO_MATCHING_ID))
        })
        .await
    }

    async fn create(&self, message: &Message) -> MessageResult<Message> {
        let pool = self.pool.clone();
        let new_row = NewMessageRow::from(message);

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;

            diesel::insert_into(messages::table)
                .values(&new_row)
                .returning(MessageRow::as_returning())
                .get_result::<MessageRow>(&mut conn)
                .map(Message::from)
                .map_err(map_insert_error)
        })
        .await
    }
}

/// Runs a blocking database operation on the blocking thread pool.
async fn run_blocking<F, T>(f: F) -> MessageResult<T>
where
    F: FnOnce() -> MessageResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|err| {
        error!(error = %err, "message store task failed");
        MessageError::internal("message store task failed")
    })?
}

fn get_conn(pool: &PgPool) -> MessageResult<PooledConn> {
    pool.get().map_err(|err| {
        error!(error = %err, "failed to check out database connection");
        MessageError::internal("database connection unavailable")
    })
}

pub(crate) fn map_insert_error(err: DieselError) -> MessageError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            MessageError::internal(TITLE_TAKEN)
        }
        other => database_failure("create", &other),
    }
}

/// Logs the underlying cause and returns a message safe to show callers.
fn database_failure(operation: &'static str, err: &DieselError) -> MessageError {
    error!(operation, error = %err, "message query failed");
    MessageError::internal(format!("error when trying to {operation} message"))
}
