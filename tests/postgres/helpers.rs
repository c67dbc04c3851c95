//! Shared helpers for `PostgreSQL` integration tests.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use eyre::WrapErr;
use message_service::message::{
    adapters::postgres::{PostgresConfig, PostgresMessageRepository},
    domain::Message,
};
use mockable::DefaultClock;
use rstest::fixture;
use tokio::runtime::Runtime;
use tracing::warn;

/// Migration applied to every test database.
const CREATE_MESSAGES_SQL: &str =
    include_str!("../../migrations/2026-10-19-000000_create_messages/up.sql");

static NEXT_DATABASE: AtomicU32 = AtomicU32::new(0);

/// A migrated throwaway database and a repository connected to it.
pub struct PostgresTestContext {
    /// Repository under test.
    pub repo: PostgresMessageRepository,
    /// Runtime driving the repository futures.
    pub rt: Runtime,
    guard: CleanupGuard,
}

impl PostgresTestContext {
    /// Closes the pool and drops the database.
    pub fn cleanup(self) {
        drop(self.repo);
        self.guard.cleanup().expect("cleanup database");
    }
}

/// Provides a fresh database, or `None` when no server is configured.
#[fixture]
pub fn postgres_context() -> Option<PostgresTestContext> {
    let admin = PostgresConfig::from_env().ok()?;
    let guard = CleanupGuard::create(admin).expect("create test database");
    let repo = guard.repository().expect("repository setup");
    let rt = test_runtime().expect("tokio runtime");
    Some(PostgresTestContext { repo, rt, guard })
}

/// Creates a runtime for driving repository futures from synchronous tests.
pub fn test_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Builds a draft stamped with the system clock.
pub fn draft(title: &str, body: &str) -> Message {
    Message::new(title, body, &DefaultClock)
}

/// Drops its database when it goes out of scope, even if the test panics.
pub struct CleanupGuard {
    admin: PostgresConfig,
    db_name: String,
    dropped: bool,
}

impl CleanupGuard {
    /// Creates a uniquely named database and applies the migration to it.
    ///
    /// `admin` must name a database the user can connect to for
    /// `CREATE DATABASE`.
    pub fn create(admin: PostgresConfig) -> eyre::Result<Self> {
        let db_name = unique_database_name();
        let create = format!("CREATE DATABASE {}", quote_identifier(&db_name));
        execute_admin_sql(&admin, &create)?;
        let guard = Self {
            admin,
            db_name,
            dropped: false,
        };

        let mut conn = PgConnection::establish(&guard.config().connection_string())
            .wrap_err("connect to test database")?;
        conn.batch_execute(CREATE_MESSAGES_SQL)
            .wrap_err("apply messages migration")?;
        Ok(guard)
    }

    /// Returns the configuration of the test database.
    pub fn config(&self) -> PostgresConfig {
        self.admin
            .clone()
            .with_database(self.db_name.clone())
            .with_pool_size(2)
    }

    /// Opens a repository on the test database.
    pub fn repository(&self) -> eyre::Result<PostgresMessageRepository> {
        PostgresMessageRepository::initialize(&self.config())
            .wrap_err("initialize repository")
    }

    /// Drops the database, reporting any failure.
    pub fn cleanup(mut self) -> eyre::Result<()> {
        self.dropped = true;
        drop_database(&self.admin, &self.db_name)
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if self.dropped {
            return;
        }
        if let Err(err) = drop_database(&self.admin, &self.db_name) {
            warn!(database = %self.db_name, error = %err, "failed to drop test database");
        }
    }
}

fn drop_database(admin: &PostgresConfig, db_name: &str) -> eyre::Result<()> {
    let statement = format!(
        "DROP DATABASE IF EXISTS {} WITH (FORCE)",
        quote_identifier(db_name)
    );
    execute_admin_sql(admin, &statement)
}

fn execute_admin_sql(admin: &PostgresConfig, sql: &str) -> eyre::Result<()> {
    let mut conn = PgConnection::establish(&admin.connection_string())
        .wrap_err("connect to admin database")?;
    diesel::sql_query(sql)
        .execute(&mut conn)
        .wrap_err_with(|| format!("execute `{sql}`"))?;
    Ok(())
}

fn unique_database_name() -> String {
    let sequence = NEXT_DATABASE.fetch_add(1, Ordering::Relaxed);
    let stamp = Utc::now().timestamp_micros();
    format!("message_test_{}_{sequence}_{stamp}", std::process::id())
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
