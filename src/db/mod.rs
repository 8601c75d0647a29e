// Optional database collaborator.
// The diagnostic endpoint is the only caller; a missing database is a normal state.

#[cfg(feature = "database")]
pub mod postgres;

use std::fmt;
use std::sync::Arc;

use crate::config::DatabaseEnv;

/// A handle to an external database that can be probed for liveness.
#[async_trait::async_trait]
pub trait DatabaseHandle: Send + Sync {
    /// Name of the database the handle points at, when known.
    fn name(&self) -> Option<&str>;

    /// Lists collection (table) names. Any failure is reported as a string
    /// by the caller, so the error type stays opaque.
    async fn list_collection_names(&self) -> anyhow::Result<Vec<String>>;
}

/// Outcome of trying to acquire a database handle at startup.
#[derive(Clone)]
pub enum DatabaseLookup {
    /// No database support compiled into this binary.
    Missing,
    /// Support is present but nothing is configured.
    Uninitialized,
    /// Configuration exists but the handle could not be built.
    Failed(String),
    Ready(Arc<dyn DatabaseHandle>),
}

impl fmt::Debug for DatabaseLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseLookup::Missing => f.write_str("Missing"),
            DatabaseLookup::Uninitialized => f.write_str("Uninitialized"),
            DatabaseLookup::Failed(reason) => f.debug_tuple("Failed").field(reason).finish(),
            DatabaseLookup::Ready(handle) => f
                .debug_tuple("Ready")
                .field(&handle.name().unwrap_or("<unnamed>"))
                .finish(),
        }
    }
}

/// Builds the lookup for this binary. Never connects; the first network
/// round trip happens when the handle is probed.
#[cfg(feature = "database")]
pub fn locate(env: &DatabaseEnv) -> DatabaseLookup {
    let Some(ref url) = env.url else {
        return DatabaseLookup::Uninitialized;
    };

    match postgres::PostgresDatabase::connect_lazy(url, env.name.as_deref()) {
        Ok(db) => DatabaseLookup::Ready(Arc::new(db)),
        Err(e) => {
            tracing::warn!("Database handle unavailable: {:#}", e);
            DatabaseLookup::Failed(format!("{:#}", e))
        }
    }
}

#[cfg(not(feature = "database"))]
pub fn locate(_env: &DatabaseEnv) -> DatabaseLookup {
    DatabaseLookup::Missing
}
