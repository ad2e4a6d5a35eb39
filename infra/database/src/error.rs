use thiserror::Error;

/// A specialized [`DatabaseError`] enum of this crate.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Builder misuse: a required connection parameter was not supplied.
    #[error("validation error: {0}")]
    Validation(&'static str),

    /// Connectivity or health checks failed.
    #[error("database connection failed: {0}")]
    Connection(String),

    /// Root sign-in was rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A wrapper for underlying `SurrealDB` engine errors.
    #[error(transparent)]
    Surreal(#[from] surrealdb::Error),
}
