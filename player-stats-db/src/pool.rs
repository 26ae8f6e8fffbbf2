//! Bounded async connection pool.
//!
//! SQLite connections are blocking, so every statement runs on the blocking
//! thread pool. A semaphore caps the number of connections in use at once;
//! callers queue for a permit up to `acquire_timeout` and then fail with
//! [`PoolError::Exhausted`]. A statement that takes longer than
//! `query_timeout` is reported as [`PoolError::Timeout`]. Its connection and
//! permit are only released once the statement actually finishes, so the cap
//! holds even for abandoned work.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::Connection;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::time::timeout;

use crate::operations::OperationError;
use crate::queries::ping;
use crate::schema::{SchemaError, open_database};

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("{0}")]
    Operation(#[from] OperationError),
    #[error("No connection available after waiting {0:?}")]
    Exhausted(Duration),
    #[error("Statement did not finish within {0:?}")]
    Timeout(Duration),
    #[error("Connection pool is closed")]
    Closed,
    #[error("Blocking worker failed: {0}")]
    Worker(String),
    #[error("Invalid pool configuration: {0}")]
    Config(String),
}

/// Connection pool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub path: PathBuf,
    /// Maximum connections in use at once.
    pub max_connections: usize,
    /// How long a caller may wait for a free connection.
    pub acquire_timeout: Duration,
    /// How long a single statement may run.
    pub query_timeout: Duration,
}

impl PoolConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
            query_timeout: Duration::from_secs(10),
        }
    }
}

/// Process-scoped handle to the roster database.
///
/// Created once at startup with [`ConnectionPool::open`], shared by
/// reference (typically behind an `Arc`) and shut down with
/// [`ConnectionPool::close`].
pub struct ConnectionPool {
    config: PoolConfig,
    permits: Arc<Semaphore>,
    // `None` once closed; returned connections are then dropped.
    idle: Arc<Mutex<Option<Vec<Connection>>>>,
}

impl ConnectionPool {
    /// Open the database, create the schema if needed and verify the
    /// connection answers. The verified connection seeds the idle list.
    pub async fn open(config: PoolConfig) -> Result<Self, PoolError> {
        if config.max_connections == 0 {
            return Err(PoolError::Config(
                "max_connections must be at least 1".to_string(),
            ));
        }

        let path = config.path.clone();
        let conn = tokio::task::spawn_blocking(move || -> Result<Connection, PoolError> {
            let conn = open_database(&path)?;
            ping(&conn)?;
            Ok(conn)
        })
        .await
        .map_err(|e| PoolError::Worker(e.to_string()))??;

        log::debug!(
            "Opened roster database at {} (max {} connections)",
            config.path.display(),
            config.max_connections
        );

        Ok(Self {
            permits: Arc::new(Semaphore::new(config.max_connections)),
            idle: Arc::new(Mutex::new(Some(vec![conn]))),
            config,
        })
    }

    /// Run `f` against a pooled connection on the blocking thread pool.
    pub async fn run<T, F>(&self, f: F) -> Result<T, PoolError>
    where
        F: FnOnce(&Connection) -> Result<T, OperationError> + Send + 'static,
        T: Send + 'static,
    {
        let acquire_timeout = self.config.acquire_timeout;
        let permit = match timeout(acquire_timeout, Arc::clone(&self.permits).acquire_owned()).await
        {
            Ok(Ok(permit)) => permit,
            Ok(Err(_)) => return Err(PoolError::Closed),
            Err(_) => {
                log::warn!("Connection pool exhausted after waiting {acquire_timeout:?}");
                return Err(PoolError::Exhausted(acquire_timeout));
            }
        };

        let idle = Arc::clone(&self.idle);
        let path = self.config.path.clone();
        let task = tokio::task::spawn_blocking(move || -> Result<T, PoolError> {
            let _permit = permit;
            let conn = match take_idle(&idle)? {
                Some(conn) => conn,
                None => open_database(&path)?,
            };
            let result = f(&conn);
            if let Some(list) = lock(&idle).as_mut() {
                list.push(conn);
            }
            result.map_err(PoolError::from)
        });

        let query_timeout = self.config.query_timeout;
        match timeout(query_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(PoolError::Worker(e.to_string())),
            Err(_) => {
                log::warn!("Statement exceeded {query_timeout:?}");
                Err(PoolError::Timeout(query_timeout))
            }
        }
    }

    /// Check that the database still answers.
    pub async fn health_check(&self) -> Result<(), PoolError> {
        self.run(ping).await
    }

    /// Stop handing out connections and drop the idle ones. Statements
    /// already running finish normally; their connections are discarded.
    pub fn close(&self) {
        self.permits.close();
        let dropped = lock(&self.idle).take().map_or(0, |list| list.len());
        log::debug!("Connection pool closed ({dropped} idle connections dropped)");
    }

    pub fn is_closed(&self) -> bool {
        self.permits.is_closed()
    }

    /// Number of connections currently parked and ready for reuse.
    pub fn idle_connections(&self) -> usize {
        lock(&self.idle).as_ref().map_or(0, Vec::len)
    }
}

fn lock(idle: &Mutex<Option<Vec<Connection>>>) -> MutexGuard<'_, Option<Vec<Connection>>> {
    idle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn take_idle(idle: &Mutex<Option<Vec<Connection>>>) -> Result<Option<Connection>, PoolError> {
    match lock(idle).as_mut() {
        Some(list) => Ok(list.pop()),
        None => Err(PoolError::Closed),
    }
}
