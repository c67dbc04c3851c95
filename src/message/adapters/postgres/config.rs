//! Connection parameters for the `PostgreSQL` message repository.
//!
//! Parameters are read from `DB_*` environment variables or deserialised
//! from a configuration file, then rendered as a libpq keyword/value
//! connection string.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// The only driver this adapter can open.
pub const SUPPORTED_DRIVER: &str = "postgres";

/// Environment variable naming the database driver.
pub const DRIVER_VAR: &str = "DB_DRIVER";
/// Environment variable naming the database host.
pub const HOST_VAR: &str = "DB_HOST";
/// Environment variable naming the database port.
pub const PORT_VAR: &str = "DB_PORT";
/// Environment variable naming the database user.
pub const USER_VAR: &str = "DB_USER";
/// Environment variable holding the database password.
pub const PASSWORD_VAR: &str = "DB_PASSWORD";
/// Environment variable naming the database.
pub const NAME_VAR: &str = "DB_NAME";
/// Environment variable setting the maximum pool size.
pub const POOL_SIZE_VAR: &str = "DB_POOL_SIZE";

const DEFAULT_PORT: u16 = 5432;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors returned while assembling a [`PostgresConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting is absent or blank.
    #[error("missing required setting {0}")]
    MissingVar(&'static str),

    /// The port is not a valid TCP port number.
    #[error("invalid database port: {0}")]
    InvalidPort(String),

    /// The pool size is not a positive integer.
    #[error("invalid connection pool size: {0}")]
    InvalidPoolSize(String),

    /// The driver is not `postgres`.
    #[error("unsupported database driver '{0}' (expected '{SUPPORTED_DRIVER}')")]
    UnsupportedDriver(String),
}

/// `PostgreSQL` connection parameters.
///
/// # Examples
///
/// ```
/// use message_service::message::adapters::postgres::PostgresConfig;
///
/// let config = PostgresConfig::new("localhost", "app", "secret", "messages")
///     .with_port(5433);
/// assert_eq!(
///     config.connection_string(),
///     "host='localhost' port=5433 user='app' password='secret' dbname='messages'",
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct PostgresConfig {
    #[serde(default = "default_driver")]
    driver: String,
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    user: String,
    #[serde(default)]
    password: String,
    #[serde(alias = "dbname")]
    database: String,
    #[serde(default = "default_pool_size")]
    pool_size: u32,
}

fn default_driver() -> String {
    SUPPORTED_DRIVER.to_owned()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}

impl PostgresConfig {
    /// Creates a configuration with the default port and pool size.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            driver: default_driver(),
            host: host.into(),
            port: DEFAULT_PORT,
            user: user.into(),
            password: password.into(),
            database: database.into(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Sets the server port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Targets a different database on the same server.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Sets the maximum number of pooled connections.
    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Reads the configuration from `DB_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`PostgresConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// `DB_HOST`, `DB_USER` and `DB_NAME` are required. `DB_DRIVER`
    /// defaults to `postgres`, `DB_PORT` to 5432, `DB_POOL_SIZE` to 10 and
    /// `DB_PASSWORD` to empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when a required value is absent or
    /// blank, [`ConfigError::InvalidPort`] or [`ConfigError::InvalidPoolSize`]
    /// when a number does not parse, and [`ConfigError::UnsupportedDriver`]
    /// for any driver other than `postgres`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::MissingVar(key));

        let driver = optional(DRIVER_VAR).unwrap_or_else(default_driver);
        let port = match optional(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let pool_size = match optional(POOL_SIZE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPoolSize(raw))?,
            None => DEFAULT_POOL_SIZE,
        };

        let config = Self {
            driver,
            host: required(HOST_VAR)?,
            port,
            user: required(USER_VAR)?,
            password: lookup(PASSWORD_VAR).unwrap_or_default(),
            database: required(NAME_VAR)?,
            pool_size,
        };
        config.ensure_supported_driver()?;
        Ok(config)
    }

    /// Checks that the configured driver is `postgres`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedDriver`] otherwise.
    pub fn ensure_supported_driver(&self) -> Result<(), ConfigError> {
        if self.driver == SUPPORTED_DRIVER {
            Ok(())
        } else {
            Err(ConfigError::UnsupportedDriver(self.driver.clone()))
        }
    }

    /// Returns the database host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the server port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the database user.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the database name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Renders the libpq keyword/value connection string.
    ///
    /// String values are single-quoted with embedded quotes and backslashes
    /// escaped. The password is omitted when empty.
    #[must_use]
    pub fn connection_string(&self) -> String {
        let mut parts = vec![
            format!("host={}", quote(&self.host)),
            format!("port={}", self.port),
            format!("user={}", quote(&self.user)),
        ];
        if !self.password.is_empty() {
            parts.push(format!("password={}", quote(&self.password)));
        }
        parts.push(format!("dbname={}", quote(&self.database)));
        parts.join(" ")
    }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}
